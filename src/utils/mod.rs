use std::sync::Once;
use std::{env, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".spendwise";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("spendwise_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

/// Returns the application data directory, defaulting to `~/.spendwise`.
/// `SPENDWISE_HOME` overrides it, which is also how tests get isolation.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("SPENDWISE_HOME") {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}
