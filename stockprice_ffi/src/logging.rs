//! One-time process setup for hosts that load the library.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "stockprice=info,stockprice_lib=info,alphavantage_api=warn";

static INIT: Once = Once::new();

/// Loads `.env` and installs a stderr subscriber. Safe to call repeatedly;
/// only the first call has any effect. A subscriber the host already set
/// is left in place.
pub fn init() {
    INIT.call_once(|| {
        let dotenv = dotenvy::dotenv();

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let installed = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok();

        match dotenv {
            Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!("Ignoring unreadable .env file: {}", e),
        }
        if !installed {
            tracing::debug!("Host already installed a tracing subscriber");
        }
    });
}
