//! Monthly trend command

use anyhow::Result;
use rust_decimal::Decimal;

use outlay_core::{monthly_breakdown, ExpenseRecord};

pub fn cmd_monthly(records: &[ExpenseRecord], json: bool) -> Result<()> {
    let monthly = monthly_breakdown(records);

    if json {
        println!("{}", serde_json::to_string_pretty(&monthly)?);
        return Ok(());
    }

    println!();
    println!("📈 Monthly Spending");
    println!("   ─────────────────────────────────────────────────────────────");

    if monthly.is_empty() {
        println!("   No expense data available.");
        return Ok(());
    }

    println!("   {:16} │ {:>10}", "Month", "Amount");
    println!("   ─────────────────┼────────────");
    for bucket in &monthly {
        println!("   {:16} │ {:>10.2}", bucket.label, bucket.total);
    }

    let total: Decimal = monthly.iter().map(|m| m.total).sum();
    println!("   ─────────────────┼────────────");
    println!("   {:16} │ {:>10.2}", "Total", total);

    Ok(())
}
