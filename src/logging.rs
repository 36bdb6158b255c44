//! Structured logging on stderr, so stdout stays clean for reports and JSON.
//!
//! Level precedence, highest first: `DEBUG_TOGGLE_LOG`, then the configured `log_level`
//! (which `--log-level` overrides before this runs).

use crate::config::Config;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "DEBUG_TOGGLE_LOG";

fn filter_from_config(config: &Config) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber.
///
/// A second call is a no-op: the first subscriber installed stays in place.
pub fn init_logging(config: &Config) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter_from_config(config))
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
