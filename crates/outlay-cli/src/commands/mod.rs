//! CLI command implementations
//!
//! Commands are organized by view:
//! - `summary` - Dashboard summary cards
//! - `categories` - Category breakdown with usage counts
//! - `monthly` - Monthly trend table
//! - `list` - Filtered expense history
//!
//! Shared utilities (snapshot loading, date resolution) live here.

pub mod categories;
pub mod list;
pub mod monthly;
pub mod summary;

// Re-export command functions for main.rs
pub use categories::*;
pub use list::*;
pub use monthly::*;
pub use summary::*;

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};

use outlay_core::{ExpenseRecord, JsonFileSource, RecordSource};

/// Load the expense snapshot, scoped to one user when an id is given
pub fn load_records(file: &Path, user: Option<&str>) -> Result<Vec<ExpenseRecord>> {
    let source = JsonFileSource::new(file);
    let records = match user {
        Some(id) => source.fetch(id),
        None => source.fetch_all(),
    }
    .with_context(|| format!("Failed to load expense snapshot {}", file.display()))?;
    tracing::debug!(count = records.len(), "Snapshot ready");
    Ok(records)
}

/// Resolve the --as-of flag to the reference instant handed to the engine
///
/// The engine never reads a clock; "today" is decided here, at the CLI
/// boundary, and passed in.
pub fn resolve_as_of(as_of: Option<&str>) -> Result<DateTime<Utc>> {
    match as_of {
        Some(raw) => {
            let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .context("Invalid --as-of date format (use YYYY-MM-DD)")?;
            let midnight = date
                .and_hms_opt(0, 0, 0)
                .context("Invalid --as-of date")?;
            Ok(midnight.and_utc())
        }
        None => Ok(Utc::now()),
    }
}

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        format!("{}...", &s[..max.saturating_sub(3)])
    }
}
