//! 上限與後備路徑示例

use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use staffing::{DemandRecord, PlanningConfig, SolverMode, StaffingPlanner};

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("debug").init();

    println!("=== 上限與後備路徑示例 ===\n");

    let date = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();

    let records = vec![
        DemandRecord::at(date, 9, Decimal::from(42), Decimal::from(22)),
        DemandRecord::at(date, 10, Decimal::from(67), Decimal::from(22)),
        DemandRecord::at(date, 11, Decimal::from(23), Decimal::from(22)),
    ];

    // 只走鬆弛加保守進位，全域上限 10，超編罰則 $2/人時
    let config = PlanningConfig::new(Decimal::from(7))
        .with_solver_mode(SolverMode::LinearFallbackOnly)
        .with_global_cap(10)
        .with_overstaff_penalty(Decimal::from(2));
    let planner = StaffingPlanner::new(config);

    let result = planner.plan(&records)?;

    println!("求解狀態: {:?}", result.plan.status);
    println!("總人力成本: ${}\n", result.plan.total_cost);

    for assignment in &result.plan.assignments {
        println!(
            "  {}  計劃人力 {:>2}  成本 ${}",
            assignment.period, assignment.planned_staff, assignment.hourly_cost
        );
    }

    if result.warnings.is_empty() {
        println!("\n無覆蓋缺口警告");
    } else {
        println!("\n警告:");
        for warning in &result.warnings {
            println!("  - {}", warning.message);
        }
    }

    Ok(())
}
