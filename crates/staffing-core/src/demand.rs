//! 需求觀測模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::{Period, PlanningError, Result};

/// 單一時段的需求觀測
///
/// 每個時段恰有一筆記錄；需求與時薪在進入管線前即為數值。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandRecord {
    /// 時段
    pub period: Period,

    /// 需求量（非負）
    pub demand: Decimal,

    /// 時薪（必須為正）
    pub wage: Decimal,
}

impl DemandRecord {
    /// 創建新的需求觀測
    pub fn new(period: Period, demand: Decimal, wage: Decimal) -> Self {
        Self {
            period,
            demand,
            wage,
        }
    }

    /// 便利建構：直接由日期與小時創建
    pub fn at(date: NaiveDate, hour: u8, demand: Decimal, wage: Decimal) -> Self {
        Self::new(Period::new(date, hour), demand, wage)
    }
}

/// 驗證整個規劃範圍的需求資料
///
/// 規則：
/// - 範圍不可為空
/// - 小時必須落在 0-23
/// - 需求不可為負值，時薪必須為正值
/// - 時段不可重複（重複屬於資料錯誤，不做靜默合併）
pub fn validate_horizon(records: &[DemandRecord]) -> Result<()> {
    if records.is_empty() {
        return Err(PlanningError::Validation("需求資料為空".to_string()));
    }

    let mut seen = HashSet::with_capacity(records.len());

    for record in records {
        if !record.period.has_valid_hour() {
            return Err(PlanningError::Validation(format!(
                "小時超出範圍 0-23: {}",
                record.period.hour
            )));
        }

        if record.demand < Decimal::ZERO {
            return Err(PlanningError::Validation(format!(
                "時段 {} 的需求為負值: {}",
                record.period, record.demand
            )));
        }

        if record.wage <= Decimal::ZERO {
            return Err(PlanningError::Validation(format!(
                "時段 {} 的時薪必須為正值: {}",
                record.period, record.wage
            )));
        }

        if !seen.insert(record.period) {
            return Err(PlanningError::DuplicatePeriod(record.period));
        }
    }

    Ok(())
}
