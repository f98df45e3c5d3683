//! Command-line interface for the guildvault binary.

mod backup;
mod commands;

pub use backup::{handle_backup_command, handle_check_command, resolve_config};
pub use commands::{BackupArgs, Cli, Commands};
