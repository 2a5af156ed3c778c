//! The facade the presentation layer talks to: validated mutations on the
//! ledger store plus the derived views the UI renders.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::TrackerError;
use crate::ledger::{validate, Category, ExpenseRecord, Ledger};
use crate::query::{self, CategoryFilter};
use crate::store::{KeyValueStore, LedgerStore};

/// Aggregate statistics for the summary panel, relative to a reference date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub daily_total: f64,
    pub monthly_total: f64,
    pub category_totals: BTreeMap<Category, f64>,
    pub highest_category: Option<(Category, f64)>,
    pub average_daily_spend: f64,
    pub record_count: usize,
}

pub struct ExpenseTracker {
    store: LedgerStore,
}

impl ExpenseTracker {
    /// Opens the tracker over a persistence backend, loading whatever ledger
    /// it holds. A damaged blob degrades to an empty ledger; see
    /// [`load_warning`](Self::load_warning).
    pub fn open(backend: Box<dyn KeyValueStore>) -> Self {
        Self {
            store: LedgerStore::open(backend),
        }
    }

    pub fn load_warning(&self) -> Option<&str> {
        self.store.load_warning()
    }

    pub fn ledger(&self) -> &Ledger {
        self.store.ledger()
    }

    /// Validates the raw field values and, on success, records and persists
    /// the expense. Validation rejections and persistence failures come back
    /// as distinct `TrackerError` variants.
    pub fn add(
        &mut self,
        raw_title: &str,
        raw_amount: &str,
        raw_category: &str,
        raw_date: &str,
    ) -> Result<ExpenseRecord, TrackerError> {
        let input = validate(raw_title, raw_amount, raw_category, raw_date)?;
        Ok(self.store.add(input)?)
    }

    /// Deletes by id; `Ok(false)` when no record matched.
    pub fn delete(&mut self, id: Uuid) -> Result<bool, TrackerError> {
        Ok(self.store.remove(id)?)
    }

    pub fn clear(&mut self) -> Result<(), TrackerError> {
        Ok(self.store.clear()?)
    }

    /// Filtered, date-sorted snapshot of the ledger for list rendering.
    pub fn view(&self, filter: CategoryFilter) -> Vec<ExpenseRecord> {
        let filtered = query::filter_by_category(self.ledger(), filter);
        query::sorted_view(&filtered)
    }

    /// Summary statistics with `today` as the reference date: the daily total
    /// is for `today` and the monthly total for `today`'s calendar month.
    pub fn summary(&self, today: NaiveDate) -> Summary {
        let ledger = self.ledger();
        Summary {
            daily_total: query::daily_total(ledger, today),
            monthly_total: query::monthly_total(ledger, today.month(), today.year()),
            category_totals: query::category_totals(ledger),
            highest_category: query::highest_category(ledger),
            average_daily_spend: query::average_daily_spend(ledger),
            record_count: query::record_count(ledger),
        }
    }
}
