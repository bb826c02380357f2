//! # Staffing Core
//!
//! 排班核心資料模型與類型定義

pub mod config;
pub mod demand;
pub mod period;
pub mod plan;
pub mod requirement;

// Re-export 主要類型
pub use config::{PlanningConfig, SolverMode, StaffingCap};
pub use demand::DemandRecord;
pub use period::Period;
pub use plan::{CoverageRow, SolveStatus, StaffingAssignment, StaffingPlan};
pub use requirement::StaffingRequirement;

/// 排班錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum PlanningError {
    #[error("輸入資料驗證失敗: {0}")]
    Validation(String),

    #[error("重複的時段: {0}")]
    DuplicatePeriod(Period),

    #[error("配置錯誤: {0}")]
    Configuration(String),

    #[error("問題不可行，受影響時段: {}", format_periods(.0))]
    Infeasible(Vec<Period>),

    #[error("鬆弛問題無界")]
    Unbounded,

    #[error("求解後端不可用")]
    SolverUnavailable,

    #[error("求解器錯誤: {0}")]
    Solver(String),
}

fn format_periods(periods: &[Period]) -> String {
    if periods.is_empty() {
        "（由求解器回報）".to_string()
    } else {
        periods
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

pub type Result<T> = std::result::Result<T, PlanningError>;
