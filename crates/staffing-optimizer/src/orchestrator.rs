//! 求解協調

use staffing_core::{PlanningError, Result, SolveStatus, SolverMode};

use crate::backend::{BackendFailure, SolverBackend, VariableDomain};
use crate::problem::StaffingProblem;

/// 整數判定容差，吸收求解器的浮點噪音
const INTEGER_TOLERANCE: f64 = 1e-6;

/// 求解結果
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    /// 各時段人力（已為整數值，與問題同序）
    pub assignment: Vec<f64>,

    /// 終端狀態
    pub status: SolveStatus,

    /// 進位後被上限壓回、無法滿足最低需求的時段索引
    pub cap_breaches: Vec<usize>,
}

impl SolveOutcome {
    /// 整數最優解
    pub fn optimal(assignment: Vec<f64>) -> Self {
        Self {
            assignment,
            status: SolveStatus::Optimal,
            cap_breaches: Vec::new(),
        }
    }

    /// 後備解（鬆弛加保守進位）
    pub fn fallback(assignment: Vec<f64>, cap_breaches: Vec<usize>) -> Self {
        Self {
            assignment,
            status: SolveStatus::Fallback,
            cap_breaches,
        }
    }

    /// 不可行終端狀態
    pub fn infeasible() -> Self {
        Self {
            assignment: Vec::new(),
            status: SolveStatus::Infeasible,
            cap_breaches: Vec::new(),
        }
    }

    /// 無界終端狀態
    pub fn unbounded() -> Self {
        Self {
            assignment: Vec::new(),
            status: SolveStatus::Unbounded,
            cap_breaches: Vec::new(),
        }
    }
}

/// 求解協調器
///
/// 狀態機：
/// 1. 嘗試整數求解（模式排除或後端缺整數能力時跳過）
/// 2. 整數最優即終端；整數不可行即終端，不嘗試後備——
///    不可行是輸入的結構性質，進位修不了
/// 3. 後端出錯時改解線性鬆弛；鬆弛不可行或無界即終端
/// 4. 鬆弛解保守進位（只向上），上限壓回的時段記入 cap_breaches
pub struct SolverOrchestrator<B: SolverBackend> {
    backend: B,
    mode: SolverMode,
}

impl<B: SolverBackend> SolverOrchestrator<B> {
    /// 創建新的協調器
    pub fn new(backend: B, mode: SolverMode) -> Self {
        Self { backend, mode }
    }

    /// 求解
    ///
    /// 回傳 `Err` 僅代表後端本身無法完成求解（兩條路徑都失敗）；
    /// 不可行與無界以終端狀態回傳，由呼叫端決定如何上報。
    pub fn solve(&self, problem: &StaffingProblem) -> Result<SolveOutcome> {
        if self.integer_path_enabled() {
            tracing::debug!("嘗試整數求解（後端: {}）", self.backend.name());

            match self.backend.solve(problem, VariableDomain::Integer) {
                Ok(assignment) => {
                    tracing::debug!("整數求解成功");
                    let snapped = assignment.iter().map(|v| snap_to_integer(*v)).collect();
                    return Ok(SolveOutcome::optimal(snapped));
                }
                Err(BackendFailure::Infeasible) => {
                    tracing::warn!("整數問題不可行");
                    return Ok(SolveOutcome::infeasible());
                }
                Err(BackendFailure::Unbounded) => {
                    tracing::warn!("整數問題無界");
                    return Ok(SolveOutcome::unbounded());
                }
                Err(failure) => {
                    tracing::warn!("整數後端失敗，改走鬆弛路徑: {}", failure);
                }
            }
        } else {
            tracing::debug!("整數路徑未啟用，直接走鬆弛路徑");
        }

        self.solve_relaxed(problem)
    }

    fn integer_path_enabled(&self) -> bool {
        self.mode == SolverMode::Integer && self.backend.supports_integer()
    }

    /// 線性鬆弛加保守進位
    fn solve_relaxed(&self, problem: &StaffingProblem) -> Result<SolveOutcome> {
        let relaxed = match self.backend.solve(problem, VariableDomain::Continuous) {
            Ok(relaxed) => relaxed,
            Err(BackendFailure::Infeasible) => return Ok(SolveOutcome::infeasible()),
            Err(BackendFailure::Unbounded) => return Ok(SolveOutcome::unbounded()),
            Err(BackendFailure::Unavailable) => return Err(PlanningError::SolverUnavailable),
            Err(BackendFailure::Backend(message)) => return Err(PlanningError::Solver(message)),
        };

        let mut assignment = Vec::with_capacity(relaxed.len());
        let mut cap_breaches = Vec::new();

        for (index, &value) in relaxed.iter().enumerate() {
            let mut staff = round_up_conservative(value);

            if let Some(cap) = problem.caps[index] {
                if staff > cap {
                    // 壓回上限會破壞覆蓋保證；記下來回報，不隱藏
                    staff = cap;
                    cap_breaches.push(index);
                }
            }

            assignment.push(staff);
        }

        Ok(SolveOutcome::fallback(assignment, cap_breaches))
    }
}

/// 容差內視為整數，取最近整數
fn snap_to_integer(value: f64) -> f64 {
    let nearest = value.round();
    if (value - nearest).abs() <= INTEGER_TOLERANCE {
        nearest.max(0.0)
    } else {
        value.max(0.0)
    }
}

/// 保守進位：容差內視為整數，否則無條件向上
fn round_up_conservative(value: f64) -> f64 {
    let nearest = value.round();
    if (value - nearest).abs() <= INTEGER_TOLERANCE {
        nearest.max(0.0)
    } else {
        value.ceil().max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use staffing_core::Period;

    /// 回傳固定解的替身後端
    struct StubBackend {
        integer_capable: bool,
        integer_result: std::result::Result<Vec<f64>, BackendFailure>,
        relaxed_result: std::result::Result<Vec<f64>, BackendFailure>,
    }

    impl StubBackend {
        fn clone_result(
            result: &std::result::Result<Vec<f64>, BackendFailure>,
        ) -> std::result::Result<Vec<f64>, BackendFailure> {
            match result {
                Ok(values) => Ok(values.clone()),
                Err(BackendFailure::Infeasible) => Err(BackendFailure::Infeasible),
                Err(BackendFailure::Unbounded) => Err(BackendFailure::Unbounded),
                Err(BackendFailure::Unavailable) => Err(BackendFailure::Unavailable),
                Err(BackendFailure::Backend(message)) => {
                    Err(BackendFailure::Backend(message.clone()))
                }
            }
        }
    }

    impl SolverBackend for StubBackend {
        fn name(&self) -> &str {
            "stub"
        }

        fn supports_integer(&self) -> bool {
            self.integer_capable
        }

        fn solve(
            &self,
            _problem: &StaffingProblem,
            domain: VariableDomain,
        ) -> std::result::Result<Vec<f64>, BackendFailure> {
            match domain {
                VariableDomain::Integer => Self::clone_result(&self.integer_result),
                VariableDomain::Continuous => Self::clone_result(&self.relaxed_result),
            }
        }
    }

    fn problem(required: Vec<f64>, caps: Vec<Option<f64>>) -> StaffingProblem {
        let periods = (0..required.len())
            .map(|i| Period::new(NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(), i as u8))
            .collect();
        let objective = vec![10.0; required.len()];

        StaffingProblem {
            periods,
            objective,
            required,
            caps,
        }
    }

    #[test]
    fn test_integer_path_returns_optimal() {
        let backend = StubBackend {
            integer_capable: true,
            integer_result: Ok(vec![2.0, 0.0, 1.0]),
            relaxed_result: Err(BackendFailure::Backend("不應走到鬆弛路徑".to_string())),
        };
        let orchestrator = SolverOrchestrator::new(backend, SolverMode::Integer);

        let outcome = orchestrator
            .solve(&problem(vec![2.0, 0.0, 1.0], vec![None, None, None]))
            .unwrap();

        assert_eq!(outcome.status, SolveStatus::Optimal);
        assert_eq!(outcome.assignment, vec![2.0, 0.0, 1.0]);
        assert!(outcome.cap_breaches.is_empty());
    }

    #[test]
    fn test_integer_infeasible_is_terminal_without_fallback() {
        let backend = StubBackend {
            integer_capable: true,
            integer_result: Err(BackendFailure::Infeasible),
            relaxed_result: Ok(vec![1.0]),
        };
        let orchestrator = SolverOrchestrator::new(backend, SolverMode::Integer);

        let outcome = orchestrator.solve(&problem(vec![2.0], vec![None])).unwrap();

        assert_eq!(outcome.status, SolveStatus::Infeasible);
        assert!(outcome.assignment.is_empty());
    }

    #[test]
    fn test_backend_without_integer_support_goes_straight_to_fallback() {
        let backend = StubBackend {
            integer_capable: false,
            integer_result: Err(BackendFailure::Backend("不應嘗試整數求解".to_string())),
            relaxed_result: Ok(vec![1.4]),
        };
        let orchestrator = SolverOrchestrator::new(backend, SolverMode::Integer);

        let outcome = orchestrator.solve(&problem(vec![1.4], vec![None])).unwrap();

        // 1.4 保守進位為 2
        assert_eq!(outcome.status, SolveStatus::Fallback);
        assert_eq!(outcome.assignment, vec![2.0]);
        assert!(outcome.cap_breaches.is_empty());
    }

    #[test]
    fn test_integer_backend_error_falls_back() {
        let backend = StubBackend {
            integer_capable: true,
            integer_result: Err(BackendFailure::Backend("數值失敗".to_string())),
            relaxed_result: Ok(vec![3.0000000002]),
        };
        let orchestrator = SolverOrchestrator::new(backend, SolverMode::Integer);

        let outcome = orchestrator.solve(&problem(vec![3.0], vec![None])).unwrap();

        // 容差內的噪音貼回 3，不得進位成 4
        assert_eq!(outcome.status, SolveStatus::Fallback);
        assert_eq!(outcome.assignment, vec![3.0]);
    }

    #[test]
    fn test_fallback_only_mode_skips_integer_path() {
        let backend = StubBackend {
            integer_capable: true,
            integer_result: Err(BackendFailure::Backend("不應嘗試整數求解".to_string())),
            relaxed_result: Ok(vec![0.5, 2.0]),
        };
        let orchestrator = SolverOrchestrator::new(backend, SolverMode::LinearFallbackOnly);

        let outcome = orchestrator
            .solve(&problem(vec![0.5, 2.0], vec![None, None]))
            .unwrap();

        assert_eq!(outcome.status, SolveStatus::Fallback);
        assert_eq!(outcome.assignment, vec![1.0, 2.0]);
    }

    #[test]
    fn test_rounding_clamped_at_cap_is_flagged() {
        let backend = StubBackend {
            integer_capable: false,
            integer_result: Err(BackendFailure::Unavailable),
            relaxed_result: Ok(vec![1.4, 0.3]),
        };
        let orchestrator = SolverOrchestrator::new(backend, SolverMode::Integer);

        // 時段 0 進位到 2 超過上限 1，壓回並記錄；時段 1 進位到 1 在上限內
        let outcome = orchestrator
            .solve(&problem(vec![1.0, 0.3], vec![Some(1.0), Some(2.0)]))
            .unwrap();

        assert_eq!(outcome.status, SolveStatus::Fallback);
        assert_eq!(outcome.assignment, vec![1.0, 1.0]);
        assert_eq!(outcome.cap_breaches, vec![0]);
    }

    #[rstest::rstest]
    #[case::infeasible(BackendFailure::Infeasible, SolveStatus::Infeasible)]
    #[case::unbounded(BackendFailure::Unbounded, SolveStatus::Unbounded)]
    fn test_relaxed_failure_is_terminal(
        #[case] failure: BackendFailure,
        #[case] expected: SolveStatus,
    ) {
        let backend = StubBackend {
            integer_capable: false,
            integer_result: Err(BackendFailure::Unavailable),
            relaxed_result: Err(failure),
        };
        let orchestrator = SolverOrchestrator::new(backend, SolverMode::Integer);

        let outcome = orchestrator.solve(&problem(vec![2.0], vec![None])).unwrap();
        assert_eq!(outcome.status, expected);
        assert!(outcome.assignment.is_empty());
    }

    #[test]
    fn test_both_paths_unavailable_surfaces_error() {
        let backend = StubBackend {
            integer_capable: true,
            integer_result: Err(BackendFailure::Unavailable),
            relaxed_result: Err(BackendFailure::Unavailable),
        };
        let orchestrator = SolverOrchestrator::new(backend, SolverMode::Integer);

        let result = orchestrator.solve(&problem(vec![2.0], vec![None]));
        assert!(matches!(result, Err(PlanningError::SolverUnavailable)));
    }

    #[test]
    fn test_round_up_conservative() {
        assert_eq!(round_up_conservative(1.4), 2.0);
        assert_eq!(round_up_conservative(2.0), 2.0);
        assert_eq!(round_up_conservative(1.9999999), 2.0);
        assert_eq!(round_up_conservative(2.0000001), 2.0);
        assert_eq!(round_up_conservative(0.0), 0.0);
        assert_eq!(round_up_conservative(0.001), 1.0);
    }
}
