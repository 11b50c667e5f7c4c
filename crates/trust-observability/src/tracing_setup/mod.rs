//! Tracing setup — structured logging with span definitions.

pub mod spans;

use std::sync::Once;

use tracing_subscriber::EnvFilter;
use trust_core::config::ObservabilityConfig;
use trust_core::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Filter from `TRUST_LOG`, falling back to the configured level, then `info`.
pub fn build_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the global tracing subscriber.
///
/// JSON output when `config.json_logs` is set, human-readable otherwise.
/// Idempotent, and a no-op if another global subscriber is already installed.
pub fn init_tracing(config: &ObservabilityConfig) {
    let filter = build_filter(config);
    let json = config.json_logs;

    INIT.call_once(|| {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);

        // try_init: embedding hosts may have installed their own subscriber.
        let _ = if json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
    });
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init();
    });
}
