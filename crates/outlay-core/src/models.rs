//! Data models for expense records and derived reports
//!
//! `ExpenseRecord` mirrors the snapshot wire format (camelCase JSON, the
//! shape the original store exports). The derived types are what the
//! aggregation engine produces; they serialize snake_case like the rest of
//! our own API surface.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default categories seeded for a new user
pub const DEFAULT_CATEGORIES: [&str; 8] = [
    "Food",
    "Transportation",
    "Housing",
    "Entertainment",
    "Shopping",
    "Utilities",
    "Healthcare",
    "Other",
];

/// Default payment methods seeded for a new user
pub const DEFAULT_PAYMENT_METHODS: [&str; 6] = [
    "Cash",
    "Credit Card",
    "Debit Card",
    "Bank Transfer",
    "PayPal",
    "Mobile Payment",
];

/// A single expense as recorded by the user
///
/// `date` is the economic date of the expense (when the money was spent),
/// distinct from the `created_at` bookkeeping timestamp. All calendar
/// bucketing uses the UTC calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    pub id: String,
    pub description: String,
    /// Non-negative; enforced at the record-source boundary
    pub amount: Decimal,
    pub category: String,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A user-defined expense category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A user-defined payment method
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub id: String,
    pub name: String,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Case-insensitive duplicate-name check for category/payment-method names
pub fn has_name_conflict<'a, I>(existing: I, candidate: &str) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let candidate = candidate.trim().to_lowercase();
    existing
        .into_iter()
        .any(|name| name.to_lowercase() == candidate)
}

/// Spending total for one category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
    /// Share of the grand total, 0-100 (0 when the grand total is 0)
    pub percentage: Decimal,
}

/// Spending total for one calendar month (UTC)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthTotal {
    pub year: i32,
    /// 1-12
    pub month: u32,
    /// Long month name plus year, e.g. "March 2024"
    pub label: String,
    pub total: Decimal,
}

/// The category with the highest total spend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopCategory {
    pub category: String,
    pub amount: Decimal,
}

/// Current month vs the immediately preceding month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthComparison {
    pub current_total: Decimal,
    pub prior_total: Decimal,
    /// Percent change from prior to current; exactly 100 when the prior
    /// month had no spending
    pub percentage_change: Decimal,
}

/// The dashboard summary card bundle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryMetrics {
    pub lifetime_total: Decimal,
    pub current_month_total: Decimal,
    pub prior_month_total: Decimal,
    pub percentage_change: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_category: Option<TopCategory>,
    pub average_amount: Decimal,
    pub record_count: usize,
}
