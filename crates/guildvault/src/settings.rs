//! Layered configuration for the backup binary.
//!
//! Sources, lowest precedence first: built-in defaults, an optional TOML
//! file, then `GUILDVAULT__*` environment variables with `__` separating
//! nested keys (`GUILDVAULT__DISCORD__TOKEN`, `GUILDVAULT__GUILD_ID`).

use config::{Config, Environment, File, FileFormat, Map};
use derive_getters::Getters;
use guildvault_backup::BackupOptions;
use guildvault_core::Snowflake;
use guildvault_discord::DEFAULT_API_BASE;
use guildvault_error::{ConfigError, GuildVaultResult};
use guildvault_rate_limit::SchedulerConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Prefix of environment overrides.
pub const ENV_PREFIX: &str = "GUILDVAULT";

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

/// Remote API access.
#[derive(Clone, Deserialize, Getters)]
pub struct DiscordConfig {
    /// Bot token, without the `Bot ` prefix
    #[serde(default)]
    token: Option<String>,
    /// API root
    #[serde(default = "default_api_base")]
    api_base: String,
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_base: default_api_base(),
        }
    }
}

impl std::fmt::Debug for DiscordConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordConfig")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("api_base", &self.api_base)
            .finish()
    }
}

/// Everything a backup run needs.
#[derive(Debug, Clone, Default, Deserialize, Getters)]
#[serde(default)]
pub struct GuildVaultConfig {
    /// Remote API access
    discord: DiscordConfig,
    /// Guild to back up
    guild_id: Option<Snowflake>,
    /// Request pacing and retry
    scheduler: SchedulerConfig,
    /// What to capture
    backup: BackupOptions,
    /// Where to write the snapshot; stdout when unset
    output: Option<PathBuf>,
}

impl GuildVaultConfig {
    /// Load from an optional TOML file plus the process environment.
    ///
    /// A path that is given but missing is an error.
    #[instrument(skip_all, fields(path = ?path))]
    pub fn load(path: Option<&Path>) -> GuildVaultResult<Self> {
        Self::load_with_env(path, None)
    }

    /// Parse a TOML document, ignoring the environment.
    pub fn from_toml_str(toml: &str) -> GuildVaultResult<Self> {
        let settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;
        Self::finish(settings)
    }

    /// Load with an explicit environment map in place of the process environment.
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> GuildVaultResult<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }
        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .source(env),
            )
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to load configuration: {}", e)))?;
        Self::finish(settings)
    }

    fn finish(settings: Config) -> GuildVaultResult<Self> {
        let config: Self = settings
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Invalid configuration: {}", e)))?;
        config.scheduler.validate()?;
        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Replace the bot token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.discord.token = Some(token.into());
        self
    }

    /// Replace the guild id.
    pub fn with_guild_id(mut self, guild_id: Snowflake) -> Self {
        self.guild_id = Some(guild_id);
        self
    }

    /// Replace the output path.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// The bot token, or an error naming how to provide one.
    pub fn require_token(&self) -> GuildVaultResult<&str> {
        self.discord
            .token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                ConfigError::new(
                    "Missing bot token: set discord.token, GUILDVAULT__DISCORD__TOKEN or DISCORD_TOKEN",
                )
                .into()
            })
    }

    /// The guild id, or an error naming how to provide one.
    pub fn require_guild_id(&self) -> GuildVaultResult<Snowflake> {
        self.guild_id.ok_or_else(|| {
            ConfigError::new("Missing guild id: set guild_id or pass --guild-id").into()
        })
    }
}
