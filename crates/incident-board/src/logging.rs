//! Tracing subscriber setup

use crate::config::BoardConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the configured log filter
pub const LOG_ENV: &str = "INCIDENT_BOARD_LOG";

/// Install the global subscriber
///
/// `INCIDENT_BOARD_LOG` wins over `config.log_filter`. Logs go to stderr so
/// command output on stdout stays machine-readable. Calling this twice is
/// harmless; the second install is ignored.
pub fn init_tracing(config: &BoardConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    let installed = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if installed.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
