//! Record source boundary
//!
//! The engine never fetches anything itself - callers hand it a snapshot.
//! `RecordSource` is the "fetch records for user" capability that supplies
//! those snapshots, and it is where record validation lives: a record that
//! reaches the engine is already well-formed, so the aggregation functions
//! never re-check.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::models::ExpenseRecord;

/// A supplier of per-user expense snapshots
///
/// Implementations own the consistency of each snapshot; the engine makes
/// no guarantees across two separate fetches.
pub trait RecordSource {
    /// Fetch all expense records owned by `user_id`
    fn fetch(&self, user_id: &str) -> Result<Vec<ExpenseRecord>>;
}

/// Reject records that violate the engine's input contract
///
/// Amounts must be non-negative and ids non-empty. Malformed shapes
/// (missing fields, unparseable dates) never get this far - serde rejects
/// them during deserialization.
pub fn validate_record(record: &ExpenseRecord) -> Result<()> {
    if record.id.trim().is_empty() {
        return Err(Error::InvalidRecord("record has an empty id".to_string()));
    }
    if record.amount.is_sign_negative() && !record.amount.is_zero() {
        return Err(Error::InvalidRecord(format!(
            "record {} has negative amount {}",
            record.id, record.amount
        )));
    }
    Ok(())
}

fn validate_all(records: Vec<ExpenseRecord>) -> Result<Vec<ExpenseRecord>> {
    for record in &records {
        validate_record(record)?;
    }
    Ok(records)
}

/// In-memory record source for tests and demos
pub struct InMemorySource {
    records: Vec<ExpenseRecord>,
}

impl InMemorySource {
    pub fn new(records: Vec<ExpenseRecord>) -> Self {
        Self { records }
    }

    /// Every record regardless of owner, validated
    pub fn fetch_all(&self) -> Result<Vec<ExpenseRecord>> {
        validate_all(self.records.clone())
    }
}

impl RecordSource for InMemorySource {
    fn fetch(&self, user_id: &str) -> Result<Vec<ExpenseRecord>> {
        let records: Vec<ExpenseRecord> = self
            .records
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        validate_all(records)
    }
}

/// Record source backed by a JSON snapshot file (an array of expense
/// records in the store's export shape)
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn load(&self) -> Result<Vec<ExpenseRecord>> {
        let raw = fs::read_to_string(&self.path)?;
        let records: Vec<ExpenseRecord> = serde_json::from_str(&raw)?;
        tracing::debug!(
            path = %self.path.display(),
            count = records.len(),
            "Loaded expense snapshot"
        );
        Ok(records)
    }

    /// Every record in the snapshot regardless of owner, validated
    pub fn fetch_all(&self) -> Result<Vec<ExpenseRecord>> {
        validate_all(self.load()?)
    }
}

impl RecordSource for JsonFileSource {
    fn fetch(&self, user_id: &str) -> Result<Vec<ExpenseRecord>> {
        let records: Vec<ExpenseRecord> = self
            .load()?
            .into_iter()
            .filter(|r| r.user_id == user_id)
            .collect();
        validate_all(records)
    }
}
