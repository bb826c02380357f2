//! 排班規劃管線

use staffing_calc::{PlanAssembler, PlanningResult, RequirementTranslator};
use staffing_core::{demand, DemandRecord, PlanningConfig, PlanningError, Result, SolveStatus};
use staffing_optimizer::{MicrolpBackend, ProblemBuilder, SolverBackend, SolverOrchestrator};

/// 排班規劃器
///
/// 單次規劃在自己的輸入快照上同步執行各階段；多個規劃
/// 各自持有問題實例時可併行，互不協調。
pub struct StaffingPlanner<B: SolverBackend> {
    config: PlanningConfig,
    orchestrator: SolverOrchestrator<B>,
}

impl StaffingPlanner<MicrolpBackend> {
    /// 以預設後端（microlp）創建規劃器
    pub fn new(config: PlanningConfig) -> Self {
        Self::with_backend(config, MicrolpBackend::new())
    }
}

impl<B: SolverBackend> StaffingPlanner<B> {
    /// 以指定求解後端創建規劃器
    pub fn with_backend(config: PlanningConfig, backend: B) -> Self {
        let orchestrator = SolverOrchestrator::new(backend, config.solver_mode);

        Self {
            config,
            orchestrator,
        }
    }

    /// 規劃配置
    pub fn config(&self) -> &PlanningConfig {
        &self.config
    }

    /// 主規劃入口
    pub fn plan(&self, records: &[DemandRecord]) -> Result<PlanningResult> {
        tracing::info!("開始排班規劃：{} 個時段", records.len());

        let start_time = std::time::Instant::now();

        // Step 1: 輸入驗證
        tracing::debug!("Step 1: 輸入驗證");
        demand::validate_horizon(records)?;

        // Step 2: 需求換算
        tracing::debug!("Step 2: 需求換算");
        let requirements = RequirementTranslator::translate(records, &self.config)?;

        // Step 3: 問題建構
        tracing::debug!("Step 3: 問題建構");
        let problem = ProblemBuilder::build(&requirements, records, &self.config)?;

        // Step 4: 求解協調
        tracing::debug!("Step 4: 求解協調");
        let outcome = self.orchestrator.solve(&problem)?;

        match outcome.status {
            SolveStatus::Infeasible => return Err(PlanningError::Infeasible(Vec::new())),
            SolveStatus::Unbounded => return Err(PlanningError::Unbounded),
            SolveStatus::Optimal | SolveStatus::Fallback => {}
        }

        // Step 5: 計劃組裝
        tracing::debug!("Step 5: 計劃組裝");
        let mut result = PlanAssembler::assemble(
            &requirements,
            records,
            &outcome.assignment,
            outcome.status,
            &outcome.cap_breaches,
            &self.config,
        )?;
        result.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!(
            "排班規劃完成，耗時 {:?}，總成本 {}，狀態 {:?}",
            start_time.elapsed(),
            result.plan.total_cost,
            result.plan.status
        );

        Ok(result)
    }
}
