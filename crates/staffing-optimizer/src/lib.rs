//! # Staffing Optimizer
//!
//! 成本最小化問題建構與求解協調

pub mod backend;
pub mod orchestrator;
pub mod problem;

// Re-export 主要類型
pub use backend::{BackendFailure, MicrolpBackend, SolverBackend, VariableDomain};
pub use orchestrator::{SolveOutcome, SolverOrchestrator};
pub use problem::{ProblemBuilder, StaffingProblem};
