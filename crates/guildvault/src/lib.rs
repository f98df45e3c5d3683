//! guildvault: back up a Discord guild's configuration.
//!
//! This crate ties the workspace together. It re-exports the building blocks
//! and adds what the `guildvault` binary needs on top: layered configuration,
//! logging setup and a one-call [`run_backup`].
//!
//! ```no_run
//! use guildvault::{GuildVaultConfig, run_backup, to_json};
//!
//! # async fn demo() -> guildvault::GuildVaultResult<()> {
//! let config = GuildVaultConfig::load(Some("guildvault.toml".as_ref()))?;
//! let snapshot = run_backup(&config).await?;
//! println!("{}", to_json(&snapshot, *config.backup().json_beautify())?);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod run;
mod settings;
mod telemetry;

pub use run::run_backup;
pub use settings::{DiscordConfig, GuildVaultConfig};
pub use telemetry::{LogFormat, init_tracing};

pub use guildvault_backup::{
    BackupOptions, BackupOptionsBuilder, BackupSection, ChannelExtractor, DoNotBackupEntry,
    ExclusionSpec, ImageMode, StandardChannelExtractor, create_snapshot, to_json,
};
pub use guildvault_core::{GuildSnapshot, Snowflake};
pub use guildvault_discord::{DiscordRestClient, HttpImageFetcher};
pub use guildvault_error::{GuildVaultError, GuildVaultErrorKind, GuildVaultResult};
pub use guildvault_interface::{GuildSource, ImageFetcher};
pub use guildvault_rate_limit::{RetryConfig, Scheduler, SchedulerConfig};
