//! 需求換算

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use staffing_core::{DemandRecord, PlanningConfig, PlanningError, Result, StaffingRequirement};

/// 需求換算器
pub struct RequirementTranslator;

impl RequirementTranslator {
    /// 將需求觀測換算為每時段最低人力
    ///
    /// `required = ceil(demand / productivity_rate * (1 + buffer_fraction))`
    ///
    /// 進位永遠向上，換算本身不可造成服務不足；需求為 0 的時段
    /// 換算結果為 0，不強制最低配置。純函數，保持輸入順序。
    pub fn translate(
        records: &[DemandRecord],
        config: &PlanningConfig,
    ) -> Result<Vec<StaffingRequirement>> {
        config.validate(records.len())?;

        let buffer_factor = Decimal::ONE + config.buffer_fraction;

        records
            .iter()
            .map(|record| {
                let raw = record.demand / config.productivity_rate * buffer_factor;
                let required_staff = ceil_to_u32(raw)?;

                Ok(StaffingRequirement::new(
                    record.period,
                    record.demand,
                    required_staff,
                ))
            })
            .collect()
    }
}

fn ceil_to_u32(value: Decimal) -> Result<u32> {
    value
        .ceil()
        .to_u32()
        .ok_or_else(|| PlanningError::Validation(format!("人力需求換算溢出: {}", value)))
}
