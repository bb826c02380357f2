//! 計劃組裝

use rust_decimal::Decimal;
use uuid::Uuid;

use staffing_core::{
    CoverageRow, DemandRecord, PlanningConfig, PlanningError, Result, SolveStatus,
    StaffingAssignment, StaffingPlan, StaffingRequirement,
};

use crate::{PlanningResult, PlanningWarning};

/// 計劃組裝器
pub struct PlanAssembler;

impl PlanAssembler {
    /// 將求解結果映射回各時段，計算成本並產出覆蓋對照
    ///
    /// `assignment` 已由求解協調保證為整數值；`cap_breaches` 列出
    /// 進位後被上限壓回、無法滿足最低需求的時段索引，組裝時轉為
    /// 覆蓋缺口警告附在結果上，計劃本身照常回傳。
    pub fn assemble(
        requirements: &[StaffingRequirement],
        records: &[DemandRecord],
        assignment: &[f64],
        status: SolveStatus,
        cap_breaches: &[usize],
        config: &PlanningConfig,
    ) -> Result<PlanningResult> {
        if assignment.len() != requirements.len() || records.len() != requirements.len() {
            return Err(PlanningError::Solver(format!(
                "求解結果長度 {} 與時段數 {} 不符",
                assignment.len(),
                requirements.len()
            )));
        }

        let mut assignments = Vec::with_capacity(requirements.len());
        let mut coverage = Vec::with_capacity(requirements.len());
        let mut total_cost = Decimal::ZERO;

        for (index, (requirement, record)) in requirements.iter().zip(records).enumerate() {
            let planned_staff = assignment[index].round().max(0.0) as u32;
            let hourly_cost = Decimal::from(planned_staff) * record.wage;
            total_cost += hourly_cost;

            assignments.push(StaffingAssignment {
                period: requirement.period,
                planned_staff,
                hourly_cost,
            });

            coverage.push(CoverageRow {
                period: requirement.period,
                demand: requirement.demand,
                required_staff: requirement.required_staff,
                planned_staff,
                service_capacity: Decimal::from(planned_staff) * config.productivity_rate,
                gap: i64::from(planned_staff) - i64::from(requirement.required_staff),
            });
        }

        let mut result = PlanningResult {
            run_id: Uuid::new_v4(),
            plan: StaffingPlan {
                assignments,
                total_cost,
                status,
            },
            coverage,
            warnings: Vec::new(),
            calculation_time_ms: None,
        };

        for &index in cap_breaches {
            let requirement = &requirements[index];
            let planned_staff = result.plan.assignments[index].planned_staff;

            result.add_warning(PlanningWarning::warning(
                requirement.period,
                format!(
                    "人力上限迫使時段 {} 低於最低需求（計劃 {}，最低 {}）",
                    requirement.period, planned_staff, requirement.required_staff
                ),
            ));
        }

        Ok(result)
    }
}
