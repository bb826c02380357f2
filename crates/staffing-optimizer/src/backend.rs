//! 求解後端

use good_lp::{
    constraint, default_solver, variable, variables, Expression, ResolutionError, Solution,
    SolverModel, Variable,
};

use crate::problem::StaffingProblem;

/// 變數定義域
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableDomain {
    /// 整數變數
    Integer,

    /// 連續變數（線性鬆弛）
    Continuous,
}

/// 後端求解失敗
#[derive(Debug, thiserror::Error)]
pub enum BackendFailure {
    #[error("問題不可行")]
    Infeasible,

    #[error("問題無界")]
    Unbounded,

    #[error("後端不可用")]
    Unavailable,

    #[error("後端錯誤: {0}")]
    Backend(String),
}

/// 求解後端能力抽象
///
/// 後端可用性是執行環境的能力，在建構協調器時注入，
/// 不以全域狀態表示；整數與後備兩條路徑都能以替身後端
/// 決定性地測試。
pub trait SolverBackend {
    /// 後端名稱
    fn name(&self) -> &str;

    /// 是否支援整數變數
    fn supports_integer(&self) -> bool;

    /// 在指定定義域下求解，回傳各時段人力（與問題同序）
    fn solve(
        &self,
        problem: &StaffingProblem,
        domain: VariableDomain,
    ) -> std::result::Result<Vec<f64>, BackendFailure>;
}

/// good_lp / microlp 後端（純 Rust，支援整數與連續變數）
#[derive(Debug, Default)]
pub struct MicrolpBackend;

impl MicrolpBackend {
    /// 創建新的後端
    pub fn new() -> Self {
        Self
    }
}

impl SolverBackend for MicrolpBackend {
    fn name(&self) -> &str {
        "microlp"
    }

    fn supports_integer(&self) -> bool {
        true
    }

    fn solve(
        &self,
        problem: &StaffingProblem,
        domain: VariableDomain,
    ) -> std::result::Result<Vec<f64>, BackendFailure> {
        let mut vars = variables!();

        let staff: Vec<Variable> = (0..problem.num_periods())
            .map(|index| {
                let mut definition = variable().min(0.0);

                if let Some(cap) = problem.caps[index] {
                    definition = definition.max(cap);
                }

                if domain == VariableDomain::Integer {
                    definition = definition.integer();
                }

                vars.add(definition)
            })
            .collect();

        let objective = staff
            .iter()
            .zip(&problem.objective)
            .fold(Expression::from(0.0), |acc, (var, coefficient)| {
                acc + *var * *coefficient
            });

        let mut model = vars.minimise(objective).using(default_solver);

        for (var, required) in staff.iter().zip(&problem.required) {
            model = model.with(constraint!(*var >= *required));
        }

        let solution = model.solve().map_err(|error| match error {
            ResolutionError::Infeasible => BackendFailure::Infeasible,
            ResolutionError::Unbounded => BackendFailure::Unbounded,
            other => BackendFailure::Backend(other.to_string()),
        })?;

        Ok(staff.iter().map(|var| solution.value(*var)).collect())
    }
}
