//! Configuration loading and command-line overrides.

mod test_utils;

use guildvault::cli::{BackupArgs, resolve_config};
use guildvault::{GuildVaultConfig, GuildVaultErrorKind, Snowflake, run_backup};
use std::path::{Path, PathBuf};
use test_utils::{MINIMAL, config_file};

#[test]
fn test_load_from_file() {
    let file = config_file(MINIMAL);
    let config = GuildVaultConfig::load_with_env(Some(file.path()), None).unwrap();
    assert_eq!(config.require_guild_id().unwrap(), Snowflake::new(1000));
    assert_eq!(config.require_token().unwrap(), "file-token");
    assert_eq!(config.discord().api_base(), "http://127.0.0.1:9/api/v10");
}

#[test]
fn test_missing_file_is_an_error() {
    let err = GuildVaultConfig::load_with_env(Some(Path::new("/nonexistent/guildvault.toml")), None)
        .unwrap_err();
    assert!(matches!(err.kind(), GuildVaultErrorKind::Config(_)));
}

#[test]
fn test_malformed_file_is_an_error() {
    let file = config_file("guild_id = [");
    assert!(GuildVaultConfig::load_with_env(Some(file.path()), None).is_err());
}

#[test]
fn test_command_line_overrides_file() {
    let file = config_file(MINIMAL);
    let args = BackupArgs {
        guild_id: Some(Snowflake::new(7)),
        token: Some("cli-token".to_string()),
        output: Some(PathBuf::from("-")),
    };
    let config = resolve_config(Some(file.path()), &args).unwrap();
    assert_eq!(config.require_guild_id().unwrap(), Snowflake::new(7));
    assert_eq!(config.require_token().unwrap(), "cli-token");
    assert_eq!(config.output().as_deref(), Some(Path::new("-")));
}

#[tokio::test]
async fn test_backup_without_guild_id_fails_before_any_request() {
    let config = GuildVaultConfig::default().with_token("t");
    let err = run_backup(&config).await.unwrap_err();
    assert!(matches!(err.kind(), GuildVaultErrorKind::Config(_)));
}

#[tokio::test]
async fn test_backup_against_unreachable_api_fails() {
    let file = config_file(MINIMAL);
    let config = GuildVaultConfig::load_with_env(Some(file.path()), None).unwrap();
    let err = run_backup(&config).await.unwrap_err();
    assert!(matches!(err.kind(), GuildVaultErrorKind::Fetch(_)));
}
