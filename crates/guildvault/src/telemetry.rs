//! Logging setup.

use guildvault_error::{ConfigError, GuildVaultResult};
use tracing_subscriber::EnvFilter;

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Install the global subscriber.
///
/// Filtering follows `RUST_LOG` and falls back to `info`. Logs go to stderr
/// so a snapshot written to stdout stays clean.
pub fn init_tracing(format: LogFormat) -> GuildVaultResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| ConfigError::new(format!("Failed to install logger: {}", e)).into())
}
