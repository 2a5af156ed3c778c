use crate::ledger::{ExpenseRecord, Ledger, ValidatedExpenseInput};
use uuid::Uuid;

use super::{KeyValueStore, Result, EXPENSES_KEY};

/// Outcome of loading the persisted ledger. A missing or unreadable blob is
/// recovered locally, so loading always yields a usable ledger; the warning
/// records what, if anything, was wrong with the stored copy.
#[derive(Debug)]
pub struct LoadReport {
    pub ledger: Ledger,
    pub warning: Option<String>,
}

/// Owns the canonical ledger and writes it back to the backend after every
/// mutation, keeping memory and storage in step within each operation.
pub struct LedgerStore {
    ledger: Ledger,
    backend: Box<dyn KeyValueStore>,
    load_warning: Option<String>,
}

impl LedgerStore {
    /// Loads the persisted ledger from the backend. Never fails: corrupt or
    /// unreadable data falls back to an empty ledger with a warning.
    pub fn open(backend: Box<dyn KeyValueStore>) -> Self {
        let report = load(backend.as_ref());
        if let Some(warning) = &report.warning {
            tracing::warn!(%warning, "starting with an empty ledger");
        }
        Self {
            ledger: report.ledger,
            backend,
            load_warning: report.warning,
        }
    }

    /// The warning produced while loading, if the stored blob was unusable.
    pub fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Assigns identity and capture time to the validated input, prepends the
    /// record, and persists the full ledger before returning it.
    ///
    /// On a write failure the in-memory ledger keeps the intended state (the
    /// record stays added) and the error surfaces to the caller; memory is
    /// never silently rolled back behind storage.
    pub fn add(&mut self, input: ValidatedExpenseInput) -> Result<ExpenseRecord> {
        let record = self.ledger.add(input);
        tracing::debug!(id = %record.id, amount = record.amount, "expense added");
        self.persist()?;
        Ok(record)
    }

    /// Removes the record with the given id, persisting when something
    /// actually changed. An unknown id returns `Ok(false)`.
    pub fn remove(&mut self, id: Uuid) -> Result<bool> {
        let removed = self.ledger.remove(id);
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.ledger.clear();
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        let json = serde_json::to_string(&self.ledger)?;
        self.backend.set(EXPENSES_KEY, &json)
    }
}

/// Reads and parses the persisted blob. Missing key means a fresh start (no
/// warning); read or parse failures are reported but recovered.
pub fn load(backend: &dyn KeyValueStore) -> LoadReport {
    let blob = match backend.get(EXPENSES_KEY) {
        Ok(Some(blob)) => blob,
        Ok(None) => {
            return LoadReport {
                ledger: Ledger::new(),
                warning: None,
            }
        }
        Err(err) => {
            return LoadReport {
                ledger: Ledger::new(),
                warning: Some(format!("could not read stored expenses: {err}")),
            }
        }
    };
    match serde_json::from_str(&blob) {
        Ok(ledger) => LoadReport {
            ledger,
            warning: None,
        },
        Err(err) => LoadReport {
            ledger: Ledger::new(),
            warning: Some(format!("stored expenses were unparseable: {err}")),
        },
    }
}
