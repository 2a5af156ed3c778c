use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::record::{ExpenseRecord, ValidatedExpenseInput};

/// The ordered collection of all expense records for the user, newest first.
///
/// Invariant: no two records share an `id`. The ledger hands out cloned
/// snapshots for derived views; callers never alias the stored vector.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Ledger {
    records: Vec<ExpenseRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<ExpenseRecord>) -> Self {
        Self { records }
    }

    /// Creates a record from validated input and prepends it, so insertion
    /// order is most-recently-added first.
    pub fn add(&mut self, input: ValidatedExpenseInput) -> ExpenseRecord {
        let record = ExpenseRecord::new(input);
        self.records.insert(0, record.clone());
        record
    }

    /// Removes the record with the matching id. Returns whether anything was
    /// removed; an unknown id is a no-op, not a failure.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        self.records.len() != before
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExpenseRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
