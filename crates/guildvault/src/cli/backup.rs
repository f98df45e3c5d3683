//! Subcommand handlers.

use super::BackupArgs;
use crate::{GuildVaultConfig, run_backup};
use anyhow::Context;
use guildvault_backup::to_json;
use guildvault_error::GuildVaultResult;
use std::path::Path;
use tracing::info;

/// Load configuration and apply command-line overrides on top.
pub fn resolve_config(path: Option<&Path>, args: &BackupArgs) -> GuildVaultResult<GuildVaultConfig> {
    let mut config = GuildVaultConfig::load(path)?;
    if let Some(token) = &args.token {
        config = config.with_token(token.clone());
    }
    if let Some(guild_id) = args.guild_id {
        config = config.with_guild_id(guild_id);
    }
    if let Some(output) = &args.output {
        config = config.with_output(output.clone());
    }
    Ok(config)
}

/// Run a backup and write the snapshot.
#[tracing::instrument(skip_all)]
pub async fn handle_backup_command(config: &GuildVaultConfig) -> anyhow::Result<()> {
    let snapshot = run_backup(config).await.context("Backup failed")?;
    let json = to_json(&snapshot, *config.backup().json_beautify())?;

    match config.output().as_deref() {
        Some(path) if path != Path::new("-") => {
            tokio::fs::write(path, json.as_bytes())
                .await
                .with_context(|| format!("Failed to write snapshot to {}", path.display()))?;
            info!(path = %path.display(), id = %snapshot.id(), "Snapshot written");
        }
        _ => println!("{}", json),
    }
    Ok(())
}

/// Validate the configuration and print it with secrets redacted.
pub fn handle_check_command(config: &GuildVaultConfig) -> anyhow::Result<()> {
    config.require_guild_id()?;
    config.require_token()?;
    println!("{:#?}", config);
    Ok(())
}
