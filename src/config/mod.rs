//! Presentation preferences persisted alongside the ledger.

use crate::store::{KeyValueStore, Result, DARK_MODE_KEY};

/// Display preferences owned by the presentation layer. Stored outside the
/// expense blob; a missing or garbled value falls back to the defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    pub dark_mode: bool,
}

impl Preferences {
    /// The dark-mode flag is stored as the string `"true"`/`"false"`, so
    /// anything other than `"true"` (absence included) reads as light mode.
    pub fn load(backend: &dyn KeyValueStore) -> Self {
        let dark_mode = matches!(
            backend.get(DARK_MODE_KEY),
            Ok(Some(value)) if value.trim() == "true"
        );
        Self { dark_mode }
    }

    pub fn save(&self, backend: &dyn KeyValueStore) -> Result<()> {
        backend.set(DARK_MODE_KEY, if self.dark_mode { "true" } else { "false" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn defaults_to_light_mode_when_absent() {
        let backend = MemoryStore::new();
        assert!(!Preferences::load(&backend).dark_mode);
    }

    #[test]
    fn garbled_value_reads_as_default() {
        let backend = MemoryStore::with_entry(DARK_MODE_KEY, "maybe");
        assert!(!Preferences::load(&backend).dark_mode);
    }

    #[test]
    fn save_then_load_roundtrips() {
        let backend = MemoryStore::new();
        Preferences { dark_mode: true }.save(&backend).unwrap();
        assert!(Preferences::load(&backend).dark_mode);
    }
}
