#![doc(test(attr(deny(warnings))))]

//! SpendWise Core offers the expense ledger, validation rules, and derived
//! summary views behind a single-user expense tracker, with pluggable local
//! blob persistence.

pub mod config;
pub mod errors;
pub mod ledger;
pub mod query;
pub mod store;
pub mod tracker;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("SpendWise Core tracing initialized.");
    });
}
