//! Expense history filtering
//!
//! Builder for the history view's filters: free-text search, category,
//! and calendar-day match. Filters compose with AND; an unset filter
//! matches everything.

use chrono::NaiveDate;

use crate::models::ExpenseRecord;

/// Builder for filtering an expense snapshot
///
/// The lifetime `'query` covers the borrowed search and category terms.
#[derive(Debug, Default, Clone)]
pub struct ExpenseFilter<'query> {
    pub search: Option<&'query str>,
    pub category: Option<&'query str>,
    pub on_date: Option<NaiveDate>,
}

impl<'query> ExpenseFilter<'query> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive substring search over description and notes
    pub fn search(mut self, term: Option<&'query str>) -> Self {
        self.search = term;
        self
    }

    /// Exact category match
    pub fn category(mut self, category: Option<&'query str>) -> Self {
        self.category = category;
        self
    }

    /// Only expenses on this UTC calendar day
    pub fn on_date(mut self, date: Option<NaiveDate>) -> Self {
        self.on_date = date;
        self
    }

    /// Whether a single record passes every set filter
    pub fn matches(&self, record: &ExpenseRecord) -> bool {
        if let Some(term) = self.search {
            let term = term.to_lowercase();
            let in_description = record.description.to_lowercase().contains(&term);
            let in_notes = record
                .notes
                .as_deref()
                .is_some_and(|notes| notes.to_lowercase().contains(&term));
            if !in_description && !in_notes {
                return false;
            }
        }

        if let Some(category) = self.category {
            if record.category != category {
                return false;
            }
        }

        if let Some(date) = self.on_date {
            if record.date.date_naive() != date {
                return false;
            }
        }

        true
    }

    /// Apply the filter, keeping the snapshot's record order
    pub fn apply(&self, records: &[ExpenseRecord]) -> Vec<ExpenseRecord> {
        records
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect()
    }
}

/// Records sorted most-recent-first by economic date (the dashboard's
/// default ordering); stable, leaves the input untouched
pub fn recent_first(records: &[ExpenseRecord]) -> Vec<ExpenseRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}
