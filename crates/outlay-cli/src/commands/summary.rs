//! Dashboard summary command

use anyhow::Result;
use chrono::{DateTime, Utc};

use outlay_core::{summarize, ExpenseRecord};

pub fn cmd_summary(records: &[ExpenseRecord], now: DateTime<Utc>, json: bool) -> Result<()> {
    let metrics = summarize(records, now);

    if json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
        return Ok(());
    }

    // Positive change renders as "up" - more spending than last month
    let direction = if metrics.percentage_change > rust_decimal::Decimal::ZERO {
        "↑"
    } else {
        "↓"
    };

    println!();
    println!("💰 Expense Summary");
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   Total Expenses    ${:.2}  (lifetime, {} records)",
        metrics.lifetime_total, metrics.record_count
    );
    println!(
        "   This Month        ${:.2}  {} {:.1}% from last month",
        metrics.current_month_total,
        direction,
        metrics.percentage_change.abs().round_dp(1)
    );
    match &metrics.top_category {
        Some(top) => println!(
            "   Top Category      {}  (${:.2} total spent)",
            top.category, top.amount
        ),
        None => println!("   Top Category      N/A"),
    }
    println!("   Average Expense   ${:.2}", metrics.average_amount);

    Ok(())
}
