//! 人力需求模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Period;

/// 換算後的最低人力需求
///
/// 由需求觀測以生產力假設換算而來；保留原始需求量，
/// 供後段組裝覆蓋對照時使用，不必再回頭連結輸入表。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffingRequirement {
    /// 時段
    pub period: Period,

    /// 原始需求量
    pub demand: Decimal,

    /// 最低所需人力
    pub required_staff: u32,
}

impl StaffingRequirement {
    /// 創建新的人力需求
    pub fn new(period: Period, demand: Decimal, required_staff: u32) -> Self {
        Self {
            period,
            demand,
            required_staff,
        }
    }
}
