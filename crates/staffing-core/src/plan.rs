//! 排班計劃模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Period;

/// 求解終端狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveStatus {
    /// 整數最優解
    Optimal,

    /// 線性鬆弛加保守進位的後備解
    Fallback,

    /// 不可行
    Infeasible,

    /// 無界
    Unbounded,
}

impl SolveStatus {
    /// 是否為可產出計劃的狀態
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveStatus::Optimal | SolveStatus::Fallback)
    }
}

/// 單一時段的排班結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffingAssignment {
    /// 時段
    pub period: Period,

    /// 計劃人力
    pub planned_staff: u32,

    /// 該時段人力成本（planned_staff * 時薪）
    pub hourly_cost: Decimal,
}

/// 排班計劃（單次優化的產出，組裝後不再變更）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffingPlan {
    /// 各時段排班（與輸入同序）
    pub assignments: Vec<StaffingAssignment>,

    /// 總人力成本
    pub total_cost: Decimal,

    /// 求解狀態
    pub status: SolveStatus,
}

impl StaffingPlan {
    /// 時段數
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// 是否為空計劃
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// 總人時
    pub fn total_staff_hours(&self) -> u64 {
        self.assignments
            .iter()
            .map(|a| u64::from(a.planned_staff))
            .sum()
    }

    /// 尖峰人力
    pub fn peak_staff(&self) -> u32 {
        self.assignments
            .iter()
            .map(|a| a.planned_staff)
            .max()
            .unwrap_or(0)
    }

    /// 平均每時段人力
    pub fn average_staff(&self) -> Decimal {
        if self.assignments.is_empty() {
            return Decimal::ZERO;
        }

        Decimal::from(self.total_staff_hours()) / Decimal::from(self.assignments.len() as u64)
    }
}

/// 需求與排班的覆蓋對照（唯讀投影，非權威實體）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageRow {
    /// 時段
    pub period: Period,

    /// 原始需求量
    pub demand: Decimal,

    /// 最低所需人力
    pub required_staff: u32,

    /// 計劃人力
    pub planned_staff: u32,

    /// 計劃人力的服務能量（planned_staff * 人均服務率）
    pub service_capacity: Decimal,

    /// 人力差額（計劃 - 最低需求；負值表示上限壓回造成的缺口）
    pub gap: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn assignment(hour: u8, planned_staff: u32, hourly_cost: i64) -> StaffingAssignment {
        StaffingAssignment {
            period: Period::new(NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(), hour),
            planned_staff,
            hourly_cost: Decimal::from(hourly_cost),
        }
    }

    #[test]
    fn test_plan_metrics() {
        let plan = StaffingPlan {
            assignments: vec![assignment(8, 2, 40), assignment(9, 0, 0), assignment(10, 4, 80)],
            total_cost: Decimal::from(120),
            status: SolveStatus::Optimal,
        };

        assert_eq!(plan.len(), 3);
        assert_eq!(plan.total_staff_hours(), 6);
        assert_eq!(plan.peak_staff(), 4);
        assert_eq!(plan.average_staff(), Decimal::from(2));
    }

    #[test]
    fn test_empty_plan_metrics() {
        let plan = StaffingPlan {
            assignments: Vec::new(),
            total_cost: Decimal::ZERO,
            status: SolveStatus::Optimal,
        };

        assert!(plan.is_empty());
        assert_eq!(plan.peak_staff(), 0);
        assert_eq!(plan.average_staff(), Decimal::ZERO);
    }

    #[test]
    fn test_status_is_solved() {
        assert!(SolveStatus::Optimal.is_solved());
        assert!(SolveStatus::Fallback.is_solved());
        assert!(!SolveStatus::Infeasible.is_solved());
        assert!(!SolveStatus::Unbounded.is_solved());
    }
}
