//! 線性問題建構

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use staffing_core::{
    DemandRecord, Period, PlanningConfig, PlanningError, Result, StaffingRequirement,
};

/// 成本最小化問題
///
/// 各向量以時段索引對齊，且與輸入順序一致；這個順序必須
/// 端到端保持不變，求解結果才能無歧義映射回時段。
#[derive(Debug, Clone)]
pub struct StaffingProblem {
    /// 各時段
    pub periods: Vec<Period>,

    /// 目標函數係數（時薪加超編罰則）
    pub objective: Vec<f64>,

    /// 各時段最低人力（meet-or-exceed 約束右端）
    pub required: Vec<f64>,

    /// 各時段人力上限（無上限時無隱含上界）
    pub caps: Vec<Option<f64>>,
}

impl StaffingProblem {
    /// 時段數（即變數數）
    pub fn num_periods(&self) -> usize {
        self.periods.len()
    }
}

/// 問題建構器
pub struct ProblemBuilder;

impl ProblemBuilder {
    /// 由人力需求與時薪組裝成本最小化問題
    ///
    /// 目標係數為 `wage[i] + overstaff_penalty`：最低需求是硬約束，
    /// 需求以下的人力成本是常數項，因此對整條係數加罰則與只罰
    /// 超額部分的最優解相同。成本回報一律用原始時薪。
    ///
    /// 任一時段的上限低於最低需求即屬結構性不可行，列出全部
    /// 受影響時段回報，不做靜默壓低。優先序：覆蓋 > 上限 > 罰則。
    pub fn build(
        requirements: &[StaffingRequirement],
        records: &[DemandRecord],
        config: &PlanningConfig,
    ) -> Result<StaffingProblem> {
        config.validate(requirements.len())?;

        let penalty = decimal_to_f64(config.overstaff_penalty)?;

        let mut periods = Vec::with_capacity(requirements.len());
        let mut objective = Vec::with_capacity(requirements.len());
        let mut required = Vec::with_capacity(requirements.len());
        let mut caps = Vec::with_capacity(requirements.len());
        let mut conflicting_periods = Vec::new();

        for (index, (requirement, record)) in requirements.iter().zip(records).enumerate() {
            let wage = decimal_to_f64(record.wage)?;

            let cap = config
                .staffing_cap
                .as_ref()
                .and_then(|c| c.for_index(index));

            if let Some(cap) = cap {
                if cap < requirement.required_staff {
                    conflicting_periods.push(requirement.period);
                }
            }

            periods.push(requirement.period);
            objective.push(wage + penalty);
            required.push(f64::from(requirement.required_staff));
            caps.push(cap.map(f64::from));
        }

        if !conflicting_periods.is_empty() {
            return Err(PlanningError::Infeasible(conflicting_periods));
        }

        Ok(StaffingProblem {
            periods,
            objective,
            required,
            caps,
        })
    }
}

fn decimal_to_f64(value: Decimal) -> Result<f64> {
    value
        .to_f64()
        .ok_or_else(|| PlanningError::Solver(format!("數值無法轉換為浮點係數: {}", value)))
}
