//! Expense ledger domain models and validation rules.

pub mod category;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod record;
pub mod validate;

pub use category::{Category, UnknownCategory};
pub use ledger::Ledger;
pub use record::{ExpenseRecord, ValidatedExpenseInput, UNTITLED_TITLE};
pub use validate::{normalize_title, validate};
