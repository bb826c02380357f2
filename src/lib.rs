//! # Staffing
//!
//! 以需求觀測產生小時級排班計劃的成本最小化引擎。
//!
//! 管線嚴格由左到右：需求換算 → 問題建構 → 求解協調 → 計劃組裝；
//! 各階段獨佔自己產出的實體，沒有共享可變狀態。

pub mod planner;

// Re-export 主要類型
pub use planner::StaffingPlanner;

pub use staffing_core::{
    demand::validate_horizon, CoverageRow, DemandRecord, Period, PlanningConfig, PlanningError,
    Result, SolveStatus, SolverMode, StaffingAssignment, StaffingCap, StaffingPlan,
    StaffingRequirement,
};

pub use staffing_calc::{
    OutputRow, PlanAssembler, PlanningResult, PlanningWarning, RequirementTranslator,
    WarningSeverity,
};

pub use staffing_optimizer::{
    BackendFailure, MicrolpBackend, ProblemBuilder, SolveOutcome, SolverBackend,
    SolverOrchestrator, StaffingProblem, VariableDomain,
};
