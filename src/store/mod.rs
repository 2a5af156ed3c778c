//! Persistence: key-value blob backends and the write-through ledger store.

pub mod json_store;
pub mod ledger_store;
pub mod memory;

use crate::errors::StoreError;

/// Blob key holding the serialized expense record array.
pub const EXPENSES_KEY: &str = "spendwise_expenses";
/// Blob key for the presentation layer's dark-mode flag, stored as a
/// boolean-in-a-string. The core never assumes it is present.
pub const DARK_MODE_KEY: &str = "spendwise_darkmode";

pub type Result<T> = std::result::Result<T, StoreError>;

/// Abstraction over key-value blob persistence backends.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

pub use json_store::JsonFileStore;
pub use ledger_store::{LedgerStore, LoadReport};
pub use memory::MemoryStore;
