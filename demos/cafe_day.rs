//! 咖啡店單日排班示例

use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use staffing::{DemandRecord, PlanningConfig, StaffingPlanner};

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    println!("=== 咖啡店單日排班示例 ===\n");

    let date = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();
    let wage = Decimal::from(18);

    // 營業 08:00-21:00 的每小時來客數
    let hourly_demand: [(u8, i64); 14] = [
        (8, 35),
        (9, 52),
        (10, 41),
        (11, 46),
        (12, 88),
        (13, 76),
        (14, 30),
        (15, 24),
        (16, 28),
        (17, 39),
        (18, 61),
        (19, 44),
        (20, 18),
        (21, 6),
    ];

    let records: Vec<DemandRecord> = hourly_demand
        .iter()
        .map(|&(hour, demand)| DemandRecord::at(date, hour, Decimal::from(demand), wage))
        .collect();

    // 每人每小時可服務 8 位客人，外加 10% 服務緩衝
    let config = PlanningConfig::new(Decimal::from(8))
        .with_buffer_fraction(Decimal::new(1, 1));
    let planner = StaffingPlanner::new(config);

    let result = planner.plan(&records)?;

    println!("排班摘要:");
    println!("  總人力成本: ${}", result.plan.total_cost);
    println!("  平均每小時人力: {}", result.plan.average_staff());
    println!("  尖峰人力: {}", result.plan.peak_staff());
    println!();

    println!("需求與排班對照:");
    for row in &result.coverage {
        println!(
            "  {}  需求 {:>3}  最低人力 {}  計劃人力 {}  服務能量 {:>5}",
            row.period, row.demand, row.required_staff, row.planned_staff, row.service_capacity
        );
    }

    println!("\n輸出資料列 (JSON):");
    println!("{}", serde_json::to_string_pretty(&result.output_rows())?);

    Ok(())
}
