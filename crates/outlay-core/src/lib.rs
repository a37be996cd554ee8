//! Outlay Core Library
//!
//! Shared functionality for the Outlay expense tracker:
//! - Expense record model and snapshot wire format
//! - Aggregation engine (totals, category breakdowns, monthly trends,
//!   month-over-month comparison)
//! - History filtering
//! - Record source boundary (per-user snapshot fetching and validation)
//!
//! The engine is deliberately pure: every operation is a function of the
//! snapshot it is handed (plus a caller-supplied reference instant where a
//! "now" is needed), so it is trivially safe to call from anywhere and
//! trivially testable.

pub mod error;
pub mod filter;
pub mod models;
pub mod source;
pub mod summary;

pub use error::{Error, Result};
pub use filter::{recent_first, ExpenseFilter};
pub use models::{
    has_name_conflict, Category, CategoryTotal, ExpenseRecord, MonthComparison, MonthTotal,
    PaymentMethod, SummaryMetrics, TopCategory, DEFAULT_CATEGORIES, DEFAULT_PAYMENT_METHODS,
};
pub use source::{InMemorySource, JsonFileSource, RecordSource};
pub use summary::{
    average_amount, category_breakdown, category_usage_counts, month_over_month,
    monthly_breakdown, summarize, top_category, total_amount,
};
