//! # Staffing Calculation Engine
//!
//! 需求換算與計劃組裝

pub mod assembler;
pub mod translator;

// Re-export 主要類型
pub use assembler::PlanAssembler;
pub use translator::RequirementTranslator;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use staffing_core::{CoverageRow, Period, StaffingPlan};

/// 規劃執行結果
#[derive(Debug, Clone)]
pub struct PlanningResult {
    /// 執行ID
    pub run_id: uuid::Uuid,

    /// 排班計劃
    pub plan: StaffingPlan,

    /// 需求與排班的覆蓋對照
    pub coverage: Vec<CoverageRow>,

    /// 警告信息
    pub warnings: Vec<PlanningWarning>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl PlanningResult {
    /// 添加警告
    pub fn add_warning(&mut self, warning: PlanningWarning) {
        self.warnings.push(warning);
    }

    /// 是否存在覆蓋缺口警告
    pub fn has_coverage_violation(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| w.severity == WarningSeverity::Warning || w.severity == WarningSeverity::Error)
    }

    /// 輸出契約的資料列 {date, hour, planned_staff, hourly_cost}（與輸入同序）
    pub fn output_rows(&self) -> Vec<OutputRow> {
        self.plan
            .assignments
            .iter()
            .map(|a| OutputRow {
                date: a.period.date,
                hour: a.period.hour,
                planned_staff: a.planned_staff,
                hourly_cost: a.hourly_cost,
            })
            .collect()
    }
}

/// 輸出資料列
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputRow {
    pub date: NaiveDate,
    pub hour: u8,
    pub planned_staff: u32,
    pub hourly_cost: Decimal,
}

/// 規劃警告
#[derive(Debug, Clone)]
pub struct PlanningWarning {
    pub period: Period,
    pub message: String,
    pub severity: WarningSeverity,
}

impl PlanningWarning {
    pub fn new(period: Period, message: String, severity: WarningSeverity) -> Self {
        Self {
            period,
            message,
            severity,
        }
    }

    pub fn info(period: Period, message: String) -> Self {
        Self::new(period, message, WarningSeverity::Info)
    }

    pub fn warning(period: Period, message: String) -> Self {
        Self::new(period, message, WarningSeverity::Warning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    Info,
    Warning,
    Error,
}
