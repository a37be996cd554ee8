//! Expense aggregation engine
//!
//! Pure functions over an in-memory snapshot of expense records. Nothing
//! here performs I/O, reads a clock, or mutates its input; the reference
//! instant for month comparisons is always a caller-supplied argument.
//! Calendar bucketing uses the UTC calendar.
//!
//! Every derived value is recomputed from scratch on each call. Snapshots
//! are bounded by a single user's data volume, so grouping is a plain
//! first-seen linear scan - which is also what gives the tie-break rules
//! below their "earlier category wins" behavior.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::models::{
    CategoryTotal, ExpenseRecord, MonthComparison, MonthTotal, SummaryMetrics, TopCategory,
};

/// Sum of all record amounts; zero for an empty snapshot
pub fn total_amount(records: &[ExpenseRecord]) -> Decimal {
    records.iter().map(|r| r.amount).sum()
}

/// Mean record amount; zero for an empty snapshot (never a division by zero)
pub fn average_amount(records: &[ExpenseRecord]) -> Decimal {
    if records.is_empty() {
        return Decimal::ZERO;
    }
    total_amount(records) / Decimal::from(records.len() as u64)
}

/// Per-category totals in first-seen record order
fn totals_by_category(records: &[ExpenseRecord]) -> Vec<(String, Decimal)> {
    let mut totals: Vec<(String, Decimal)> = Vec::new();
    for record in records {
        match totals.iter_mut().find(|(name, _)| *name == record.category) {
            Some((_, total)) => *total += record.amount,
            None => totals.push((record.category.clone(), record.amount)),
        }
    }
    totals
}

/// Spending grouped by category (exact, case-sensitive match), sorted by
/// total descending
///
/// The sort is stable over first-seen grouping, so categories with equal
/// totals keep the order their first record appeared in.
pub fn category_breakdown(records: &[ExpenseRecord]) -> Vec<CategoryTotal> {
    let grand_total = total_amount(records);
    let mut breakdown: Vec<CategoryTotal> = totals_by_category(records)
        .into_iter()
        .map(|(category, total)| CategoryTotal {
            category,
            total,
            percentage: if grand_total.is_zero() {
                Decimal::ZERO
            } else {
                total / grand_total * Decimal::ONE_HUNDRED
            },
        })
        .collect();
    breakdown.sort_by(|a, b| b.total.cmp(&a.total));
    breakdown
}

/// Record counts per category, in first-seen record order
pub fn category_usage_counts(records: &[ExpenseRecord]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for record in records {
        match counts.iter_mut().find(|(name, _)| *name == record.category) {
            Some((_, count)) => *count += 1,
            None => counts.push((record.category.clone(), 1)),
        }
    }
    counts
}

fn month_label(year: i32, month: u32) -> String {
    // month is always 1-12 here since it comes from a valid date
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_default()
}

/// Spending grouped by UTC calendar month, sorted chronologically
pub fn monthly_breakdown(records: &[ExpenseRecord]) -> Vec<MonthTotal> {
    let mut totals: Vec<MonthTotal> = Vec::new();
    for record in records {
        let (year, month) = (record.date.year(), record.date.month());
        match totals
            .iter_mut()
            .find(|m| m.year == year && m.month == month)
        {
            Some(bucket) => bucket.total += record.amount,
            None => totals.push(MonthTotal {
                year,
                month,
                label: month_label(year, month),
                total: record.amount,
            }),
        }
    }
    totals.sort_by_key(|m| (m.year, m.month));
    totals
}

/// Current-month spending vs the immediately preceding calendar month
///
/// `now` picks the current (year, month); the prior month rolls the year
/// back across January. When the prior month had no spending the change is
/// exactly +100% regardless of the current total - the dashboard's
/// "up/down from last month" indicator depends on that sign.
pub fn month_over_month(records: &[ExpenseRecord], now: DateTime<Utc>) -> MonthComparison {
    let current = (now.year(), now.month());
    let prior = if now.month() == 1 {
        (now.year() - 1, 12)
    } else {
        (now.year(), now.month() - 1)
    };

    let total_for = |(year, month): (i32, u32)| -> Decimal {
        records
            .iter()
            .filter(|r| r.date.year() == year && r.date.month() == month)
            .map(|r| r.amount)
            .sum()
    };

    let current_total = total_for(current);
    let prior_total = total_for(prior);
    let percentage_change = if prior_total.is_zero() {
        Decimal::ONE_HUNDRED
    } else {
        (current_total - prior_total) / prior_total * Decimal::ONE_HUNDRED
    };

    MonthComparison {
        current_total,
        prior_total,
        percentage_change,
    }
}

/// The category with the highest total spend
///
/// Scans per-category totals in first-seen order; only a strictly greater
/// total displaces the leader, so on a tie the earlier category keeps the
/// spot. Returns `None` for an empty snapshot, and also when every total
/// is zero (nothing ever beats the zero threshold).
pub fn top_category(records: &[ExpenseRecord]) -> Option<TopCategory> {
    let mut leader: Option<TopCategory> = None;
    let mut max_amount = Decimal::ZERO;
    for (category, total) in totals_by_category(records) {
        if total > max_amount {
            max_amount = total;
            leader = Some(TopCategory {
                category,
                amount: total,
            });
        }
    }
    leader
}

/// The full dashboard card bundle for one snapshot
pub fn summarize(records: &[ExpenseRecord], now: DateTime<Utc>) -> SummaryMetrics {
    let comparison = month_over_month(records, now);
    SummaryMetrics {
        lifetime_total: total_amount(records),
        current_month_total: comparison.current_total,
        prior_month_total: comparison.prior_total,
        percentage_change: comparison.percentage_change,
        top_category: top_category(records),
        average_amount: average_amount(records),
        record_count: records.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn expense(category: &str, amount: Decimal, year: i32, month: u32, day: u32) -> ExpenseRecord {
        ExpenseRecord {
            id: format!("{}-{}-{}-{}", category, year, month, day),
            description: format!("{} expense", category),
            amount,
            category: category.to_string(),
            date: Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap(),
            notes: None,
            user_id: "user-1".to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    /// The three-record scenario used across the breakdown tests
    fn sample_records() -> Vec<ExpenseRecord> {
        vec![
            expense("Food", dec!(100), 2024, 3, 5),
            expense("Food", dec!(50), 2024, 3, 20),
            expense("Transportation", dec!(30), 2024, 4, 1),
        ]
    }

    #[test]
    fn test_total_amount() {
        assert_eq!(total_amount(&sample_records()), dec!(180));
        assert_eq!(total_amount(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_average_amount() {
        assert_eq!(average_amount(&sample_records()), dec!(60));
        assert_eq!(average_amount(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_category_breakdown_sorted_descending() {
        let breakdown = category_breakdown(&sample_records());
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].category, "Food");
        assert_eq!(breakdown[0].total, dec!(150));
        assert_eq!(breakdown[1].category, "Transportation");
        assert_eq!(breakdown[1].total, dec!(30));
        for pair in breakdown.windows(2) {
            assert!(pair[0].total >= pair[1].total);
        }
    }

    #[test]
    fn test_category_breakdown_partitions_total() {
        let records = sample_records();
        let sum: Decimal = category_breakdown(&records).iter().map(|c| c.total).sum();
        assert_eq!(sum, total_amount(&records));
    }

    #[test]
    fn test_category_breakdown_percentages() {
        let breakdown = category_breakdown(&sample_records());
        // 150/180 and 30/180
        let share: Decimal = breakdown.iter().map(|c| c.percentage).sum();
        assert_eq!(share.round_dp(6), dec!(100));
        assert_eq!(breakdown[0].percentage.round_dp(2), dec!(83.33));
    }

    #[test]
    fn test_category_breakdown_tie_keeps_first_seen_order() {
        let records = vec![
            expense("B", dec!(40), 2024, 1, 1),
            expense("A", dec!(40), 2024, 1, 2),
        ];
        let breakdown = category_breakdown(&records);
        assert_eq!(breakdown[0].category, "B");
        assert_eq!(breakdown[1].category, "A");
    }

    #[test]
    fn test_category_breakdown_empty() {
        assert!(category_breakdown(&[]).is_empty());
    }

    #[test]
    fn test_monthly_breakdown_chronological_with_labels() {
        let monthly = monthly_breakdown(&sample_records());
        assert_eq!(monthly.len(), 2);
        assert_eq!(monthly[0].label, "March 2024");
        assert_eq!(monthly[0].total, dec!(150));
        assert_eq!(monthly[1].label, "April 2024");
        assert_eq!(monthly[1].total, dec!(30));
    }

    #[test]
    fn test_monthly_breakdown_sorts_across_years() {
        let records = vec![
            expense("Food", dec!(10), 2024, 2, 1),
            expense("Food", dec!(20), 2023, 12, 1),
            expense("Food", dec!(30), 2024, 1, 1),
        ];
        let monthly = monthly_breakdown(&records);
        let labels: Vec<&str> = monthly.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, ["December 2023", "January 2024", "February 2024"]);
    }

    #[test]
    fn test_monthly_breakdown_partitions_total() {
        let records = sample_records();
        let sum: Decimal = monthly_breakdown(&records).iter().map(|m| m.total).sum();
        assert_eq!(sum, total_amount(&records));
        assert!(monthly_breakdown(&[]).is_empty());
    }

    #[test]
    fn test_month_over_month() {
        let records = sample_records();
        let now = Utc.with_ymd_and_hms(2024, 4, 15, 0, 0, 0).unwrap();
        let comparison = month_over_month(&records, now);
        assert_eq!(comparison.current_total, dec!(30));
        assert_eq!(comparison.prior_total, dec!(150));
        assert_eq!(comparison.percentage_change, dec!(-80));
    }

    #[test]
    fn test_month_over_month_zero_prior_is_plus_100() {
        let records = vec![expense("Food", dec!(75), 2024, 3, 10)];
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
        let comparison = month_over_month(&records, now);
        assert_eq!(comparison.prior_total, Decimal::ZERO);
        assert_eq!(comparison.percentage_change, dec!(100));

        // Still 100 when the current month is empty too
        let comparison = month_over_month(&[], now);
        assert_eq!(comparison.current_total, Decimal::ZERO);
        assert_eq!(comparison.percentage_change, dec!(100));
    }

    #[test]
    fn test_month_over_month_january_rolls_back_year() {
        let records = vec![
            expense("Food", dec!(200), 2024, 12, 20),
            expense("Food", dec!(100), 2025, 1, 5),
        ];
        let now = Utc.with_ymd_and_hms(2025, 1, 10, 0, 0, 0).unwrap();
        let comparison = month_over_month(&records, now);
        assert_eq!(comparison.current_total, dec!(100));
        assert_eq!(comparison.prior_total, dec!(200));
        assert_eq!(comparison.percentage_change, dec!(-50));
    }

    #[test]
    fn test_top_category() {
        let top = top_category(&sample_records()).unwrap();
        assert_eq!(top.category, "Food");
        assert_eq!(top.amount, dec!(150));
    }

    #[test]
    fn test_top_category_empty_and_all_zero() {
        assert!(top_category(&[]).is_none());
        // All-zero totals never beat the zero threshold
        let records = vec![
            expense("Food", dec!(0), 2024, 1, 1),
            expense("Transportation", dec!(0), 2024, 1, 2),
        ];
        assert!(top_category(&records).is_none());
    }

    #[test]
    fn test_top_category_tie_goes_to_first_seen() {
        let records = vec![
            expense("B", dec!(50), 2024, 1, 1),
            expense("A", dec!(50), 2024, 1, 2),
        ];
        let top = top_category(&records).unwrap();
        assert_eq!(top.category, "B");
    }

    #[test]
    fn test_category_usage_counts() {
        let counts = category_usage_counts(&sample_records());
        assert_eq!(counts, vec![
            ("Food".to_string(), 2),
            ("Transportation".to_string(), 1),
        ]);
    }

    #[test]
    fn test_summarize() {
        let records = sample_records();
        let now = Utc.with_ymd_and_hms(2024, 4, 15, 0, 0, 0).unwrap();
        let metrics = summarize(&records, now);
        assert_eq!(metrics.lifetime_total, dec!(180));
        assert_eq!(metrics.current_month_total, dec!(30));
        assert_eq!(metrics.prior_month_total, dec!(150));
        assert_eq!(metrics.percentage_change, dec!(-80));
        assert_eq!(metrics.average_amount, dec!(60));
        assert_eq!(metrics.record_count, 3);
        assert_eq!(metrics.top_category.unwrap().category, "Food");
    }

    #[test]
    fn test_summarize_empty_snapshot() {
        let now = Utc.with_ymd_and_hms(2024, 4, 15, 0, 0, 0).unwrap();
        let metrics = summarize(&[], now);
        assert_eq!(metrics.lifetime_total, Decimal::ZERO);
        assert_eq!(metrics.current_month_total, Decimal::ZERO);
        assert_eq!(metrics.average_amount, Decimal::ZERO);
        assert_eq!(metrics.record_count, 0);
        assert!(metrics.top_category.is_none());
    }
}
