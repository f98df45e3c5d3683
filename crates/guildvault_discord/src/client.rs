//! REST client for one guild.

use crate::response::{status_error, transport_error};
use async_trait::async_trait;
use guildvault_core::{
    AutoModerationRule, Ban, Emoji, Guild, GuildChannel, Member, Message, MessageQuery, Role,
    Snowflake,
};
use guildvault_error::{FetchError, FetchErrorKind, GuildVaultResult, HttpError};
use guildvault_interface::GuildSource;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};

/// Default API root.
pub const DEFAULT_API_BASE: &str = "https://discord.com/api/v10";

/// Page size for ban and member listings.
pub const PAGE_LIMIT: usize = 1000;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Response of the active-threads listing.
#[derive(Debug, Deserialize)]
struct ActiveThreads {
    threads: Vec<GuildChannel>,
}

/// Read-only REST access to one guild, authenticated as a bot.
#[derive(Clone, derive_getters::Getters)]
pub struct DiscordRestClient {
    #[getter(skip)]
    client: Client,
    #[getter(skip)]
    token: String,
    /// API root, without a trailing slash
    base_url: String,
    /// Guild being read
    #[getter(skip)]
    guild_id: Snowflake,
}

impl std::fmt::Debug for DiscordRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordRestClient")
            .field("base_url", &self.base_url)
            .field("guild_id", &self.guild_id)
            .finish_non_exhaustive()
    }
}

impl DiscordRestClient {
    /// Create a client for `guild_id` against the public API.
    #[instrument(skip(token))]
    pub fn new(token: impl Into<String>, guild_id: Snowflake) -> GuildVaultResult<Self> {
        Self::with_base_url(token, guild_id, DEFAULT_API_BASE)
    }

    /// Create a client against a custom API root.
    #[instrument(skip(token))]
    pub fn with_base_url(
        token: impl Into<String>,
        guild_id: Snowflake,
        base_url: impl Into<String> + std::fmt::Debug,
    ) -> GuildVaultResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("guildvault/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        debug!(base_url = %base_url, "Created Discord REST client");
        Ok(Self {
            client,
            token: token.into(),
            base_url,
            guild_id,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` with `query` and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> GuildVaultResult<T> {
        let resource = format!("GET {}", path);
        let response = self
            .client
            .get(self.url(path))
            .header("Authorization", format!("Bot {}", self.token))
            .query(query)
            .send()
            .await
            .map_err(|e| transport_error(e, &resource))?;

        if !response.status().is_success() {
            return Err(status_error(response, &resource).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::new(FetchErrorKind::Decode(e.to_string()), resource).into())
    }

    /// Read an `after`-cursored listing to the end.
    async fn get_all_after<T: DeserializeOwned>(
        &self,
        path: &str,
        cursor: impl Fn(&T) -> Snowflake,
    ) -> GuildVaultResult<Vec<T>> {
        let mut all = Vec::new();
        let mut after: Option<Snowflake> = None;
        loop {
            let mut query = vec![("limit", PAGE_LIMIT.to_string())];
            if let Some(after) = after {
                query.push(("after", after.to_string()));
            }
            let page: Vec<T> = self.get_json(path, &query).await?;
            let len = page.len();
            after = page.last().map(&cursor);
            all.extend(page);
            debug!(path, page = len, total = all.len(), "Fetched page");
            if len < PAGE_LIMIT || after.is_none() {
                break;
            }
        }
        Ok(all)
    }

    fn guild_path(&self, suffix: &str) -> String {
        format!("/guilds/{}{}", self.guild_id, suffix)
    }
}

#[async_trait]
impl GuildSource for DiscordRestClient {
    fn guild_id(&self) -> Snowflake {
        self.guild_id
    }

    #[instrument(skip(self), fields(guild_id = %self.guild_id))]
    async fn fetch_guild(&self) -> GuildVaultResult<Guild> {
        self.get_json(&self.guild_path(""), &[]).await
    }

    #[instrument(skip(self), fields(guild_id = %self.guild_id))]
    async fn fetch_bans(&self) -> GuildVaultResult<Vec<Ban>> {
        self.get_all_after(&self.guild_path("/bans"), |ban: &Ban| *ban.user().id())
            .await
    }

    #[instrument(skip(self), fields(guild_id = %self.guild_id))]
    async fn fetch_members(&self) -> GuildVaultResult<Vec<Member>> {
        self.get_all_after(&self.guild_path("/members"), |m: &Member| *m.user().id())
            .await
    }

    #[instrument(skip(self), fields(guild_id = %self.guild_id))]
    async fn fetch_roles(&self) -> GuildVaultResult<Vec<Role>> {
        self.get_json(&self.guild_path("/roles"), &[]).await
    }

    #[instrument(skip(self), fields(guild_id = %self.guild_id))]
    async fn fetch_emojis(&self) -> GuildVaultResult<Vec<Emoji>> {
        self.get_json(&self.guild_path("/emojis"), &[]).await
    }

    #[instrument(skip(self), fields(guild_id = %self.guild_id))]
    async fn fetch_channels(&self) -> GuildVaultResult<Vec<GuildChannel>> {
        self.get_json(&self.guild_path("/channels"), &[]).await
    }

    #[instrument(skip(self), fields(guild_id = %self.guild_id))]
    async fn fetch_active_threads(&self) -> GuildVaultResult<Vec<GuildChannel>> {
        let active: ActiveThreads = self
            .get_json(&self.guild_path("/threads/active"), &[])
            .await?;
        Ok(active.threads)
    }

    #[instrument(skip(self), fields(limit = query.limit, before = ?query.before))]
    async fn fetch_messages(
        &self,
        channel_id: Snowflake,
        query: MessageQuery,
    ) -> GuildVaultResult<Vec<Message>> {
        let mut params = vec![("limit", query.limit.to_string())];
        if let Some(before) = query.before {
            params.push(("before", before.to_string()));
        }
        self.get_json(&format!("/channels/{}/messages", channel_id), &params)
            .await
    }

    #[instrument(skip(self), fields(guild_id = %self.guild_id))]
    async fn fetch_auto_moderation_rules(&self) -> GuildVaultResult<Vec<AutoModerationRule>> {
        self.get_json(&self.guild_path("/auto-moderation/rules"), &[])
            .await
    }
}
