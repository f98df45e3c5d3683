//! Argument definitions.

use crate::LogFormat;
use clap::{Args, Parser, Subcommand};
use guildvault_core::Snowflake;
use std::path::PathBuf;

/// Back up a Discord guild's configuration.
#[derive(Parser, Debug)]
#[command(name = "guildvault")]
#[command(version, about)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true, env = "GUILDVAULT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log line format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// What to do
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Capture a snapshot and write it as JSON
    Backup(BackupArgs),
    /// Load and validate the configuration, then print it
    Check(BackupArgs),
}

/// Overrides shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct BackupArgs {
    /// Guild to back up
    #[arg(long)]
    pub guild_id: Option<Snowflake>,

    /// Bot token
    #[arg(long, env = "DISCORD_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Output file; `-` writes to stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
