//! Expense history command

use anyhow::{Context, Result};
use chrono::NaiveDate;

use outlay_core::{recent_first, ExpenseFilter, ExpenseRecord};

use super::truncate;

pub fn cmd_list(
    records: &[ExpenseRecord],
    search: Option<&str>,
    category: Option<&str>,
    date: Option<&str>,
    limit: usize,
    json: bool,
) -> Result<()> {
    let on_date = date
        .map(|raw| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .context("Invalid --date format (use YYYY-MM-DD)")
        })
        .transpose()?;

    let filtered = ExpenseFilter::new()
        .search(search)
        .category(category)
        .on_date(on_date)
        .apply(records);
    let mut expenses = recent_first(&filtered);
    let total_matches = expenses.len();
    expenses.truncate(limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&expenses)?);
        return Ok(());
    }

    println!();
    println!("🧾 Expense History");
    println!("   ─────────────────────────────────────────────────────────────");

    if expenses.is_empty() {
        println!("   No expenses found. Try adjusting your filters.");
        return Ok(());
    }

    println!(
        "   {:10} │ {:30} │ {:16} │ {:>10}",
        "Date", "Description", "Category", "Amount"
    );
    println!("   ───────────┼────────────────────────────────┼──────────────────┼────────────");
    for expense in &expenses {
        println!(
            "   {:10} │ {:30} │ {:16} │ {:>10.2}",
            expense.date.format("%Y-%m-%d"),
            truncate(&expense.description, 30),
            truncate(&expense.category, 16),
            expense.amount
        );
    }

    println!();
    if total_matches > expenses.len() {
        println!(
            "   Showing {} of {} expenses found",
            expenses.len(),
            total_matches
        );
    } else {
        println!("   {} expenses found", total_matches);
    }

    Ok(())
}
