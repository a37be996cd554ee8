//! Category breakdown command

use anyhow::Result;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use outlay_core::{category_breakdown, category_usage_counts, ExpenseRecord};

use super::truncate;

const BAR_WIDTH: usize = 20;

/// Bar length proportional to the largest category, matching the analytics
/// view's relative bars
fn bar(total: Decimal, max: Decimal) -> String {
    if max.is_zero() {
        return String::new();
    }
    let width = (total / max * Decimal::from(BAR_WIDTH as u64))
        .to_usize()
        .unwrap_or(0)
        .min(BAR_WIDTH);
    "█".repeat(width)
}

pub fn cmd_categories(records: &[ExpenseRecord], json: bool) -> Result<()> {
    let breakdown = category_breakdown(records);

    if json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
        return Ok(());
    }

    println!();
    println!("📊 Spending by Category");
    println!("   ─────────────────────────────────────────────────────────────");

    if breakdown.is_empty() {
        println!("   No expense data available.");
        return Ok(());
    }

    let counts = category_usage_counts(records);
    let count_for = |category: &str| {
        counts
            .iter()
            .find(|(name, _)| name.as_str() == category)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    };
    let max = breakdown[0].total;

    println!(
        "   {:20} │ {:>10} │ {:>6} │ {:>5} │",
        "Category", "Amount", "%", "Count"
    );
    println!("   ─────────────────────┼────────────┼────────┼───────┼──────────");
    for cat in &breakdown {
        println!(
            "   {:20} │ {:>10.2} │ {:>5.1}% │ {:>5} │ {}",
            truncate(&cat.category, 20),
            cat.total,
            cat.percentage.round_dp(1),
            count_for(&cat.category),
            bar(cat.total, max)
        );
    }

    Ok(())
}
