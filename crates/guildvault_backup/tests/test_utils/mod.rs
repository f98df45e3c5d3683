//! Test utilities for guildvault_backup tests.
//!
//! Provides an in-memory guild, an image fetcher fake and fixture builders.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use guildvault_backup::{BackupOptions, ExtractionContext, GuildCache};
use guildvault_core::{
    AutoModerationRule, Ban, BanBuilder, ChannelType, Emoji, EmojiBuilder, Guild, GuildBuilder,
    GuildChannel, GuildChannelBuilder, Member, MemberBuilder, Message, MessageBuilder,
    MessageQuery, Role, RoleBuilder, Snowflake, User, UserBuilder,
};
use guildvault_error::{FetchError, FetchErrorKind, GuildVaultResult, ImageError};
use guildvault_interface::{GuildSource, ImageFetcher};
use guildvault_rate_limit::{RetryConfigBuilder, Scheduler, SchedulerConfigBuilder};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const GUILD_ID: u64 = 1000;

/// In-memory guild that counts every fetch.
pub struct FakeGuild {
    pub guild: Guild,
    pub bans: Vec<Ban>,
    pub members: Vec<Member>,
    pub roles: Vec<Role>,
    pub emojis: Vec<Emoji>,
    pub channels: Vec<GuildChannel>,
    pub threads: Vec<GuildChannel>,
    /// Channel history, newest first
    pub messages: HashMap<Snowflake, Vec<Message>>,
    pub rules: Vec<AutoModerationRule>,
    /// Fetch methods that fail with a permanent error
    pub failing: HashSet<&'static str>,
    calls: Mutex<HashMap<&'static str, usize>>,
    queries: Mutex<Vec<(Snowflake, MessageQuery)>>,
}

impl FakeGuild {
    pub fn new() -> Self {
        Self {
            guild: GuildBuilder::default()
                .id(Snowflake::new(GUILD_ID))
                .name("Test Guild")
                .build()
                .unwrap(),
            bans: Vec::new(),
            members: Vec::new(),
            roles: vec![role(GUILD_ID, "@everyone", 0)],
            emojis: Vec::new(),
            channels: Vec::new(),
            threads: Vec::new(),
            messages: HashMap::new(),
            rules: Vec::new(),
            failing: HashSet::new(),
            calls: Mutex::new(HashMap::new()),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Number of times `method` was called.
    pub fn calls(&self, method: &str) -> usize {
        self.calls.lock().unwrap().get(method).copied().unwrap_or(0)
    }

    /// Every message page requested, in order.
    pub fn queries(&self) -> Vec<(Snowflake, MessageQuery)> {
        self.queries.lock().unwrap().clone()
    }

    fn record(&self, method: &'static str) -> GuildVaultResult<()> {
        *self.calls.lock().unwrap().entry(method).or_insert(0) += 1;
        if self.failing.contains(method) {
            return Err(FetchError::new(FetchErrorKind::Forbidden, method).into());
        }
        Ok(())
    }
}

#[async_trait]
impl GuildSource for FakeGuild {
    fn guild_id(&self) -> Snowflake {
        Snowflake::new(GUILD_ID)
    }

    async fn fetch_guild(&self) -> GuildVaultResult<Guild> {
        self.record("fetch_guild")?;
        Ok(self.guild.clone())
    }

    async fn fetch_bans(&self) -> GuildVaultResult<Vec<Ban>> {
        self.record("fetch_bans")?;
        Ok(self.bans.clone())
    }

    async fn fetch_members(&self) -> GuildVaultResult<Vec<Member>> {
        self.record("fetch_members")?;
        Ok(self.members.clone())
    }

    async fn fetch_roles(&self) -> GuildVaultResult<Vec<Role>> {
        self.record("fetch_roles")?;
        Ok(self.roles.clone())
    }

    async fn fetch_emojis(&self) -> GuildVaultResult<Vec<Emoji>> {
        self.record("fetch_emojis")?;
        Ok(self.emojis.clone())
    }

    async fn fetch_channels(&self) -> GuildVaultResult<Vec<GuildChannel>> {
        self.record("fetch_channels")?;
        Ok(self.channels.clone())
    }

    async fn fetch_active_threads(&self) -> GuildVaultResult<Vec<GuildChannel>> {
        self.record("fetch_active_threads")?;
        Ok(self.threads.clone())
    }

    async fn fetch_messages(
        &self,
        channel_id: Snowflake,
        query: MessageQuery,
    ) -> GuildVaultResult<Vec<Message>> {
        self.record("fetch_messages")?;
        self.queries.lock().unwrap().push((channel_id, query));

        let history = self.messages.get(&channel_id).cloned().unwrap_or_default();
        let start = match query.before {
            Some(before) => history
                .iter()
                .position(|m| *m.id() == before)
                .map(|i| i + 1)
                .unwrap_or(history.len()),
            None => 0,
        };
        Ok(history
            .into_iter()
            .skip(start)
            .take(query.limit as usize)
            .collect())
    }

    async fn fetch_auto_moderation_rules(&self) -> GuildVaultResult<Vec<AutoModerationRule>> {
        self.record("fetch_auto_moderation_rules")?;
        Ok(self.rules.clone())
    }
}

/// Image fetcher returning the URL's bytes, or failing every download.
#[derive(Default)]
pub struct FakeImages {
    pub fail: bool,
    calls: AtomicUsize,
}

impl FakeImages {
    pub fn failing() -> Self {
        Self {
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageFetcher for FakeImages {
    async fn fetch_image(&self, url: &str) -> GuildVaultResult<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ImageError::new(url, "status 404").into());
        }
        Ok(url.as_bytes().to_vec())
    }
}

/// Scheduler with no spacing and no retry.
pub fn fast_scheduler() -> Scheduler {
    spaced_scheduler(0)
}

/// Scheduler spacing same-key fetches by `min_spacing_ms`, with no retry.
pub fn spaced_scheduler(min_spacing_ms: u64) -> Scheduler {
    let config = SchedulerConfigBuilder::default()
        .max_concurrent(4usize)
        .min_spacing_ms(min_spacing_ms)
        .retry(
            RetryConfigBuilder::default()
                .max_attempts(1u32)
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();
    Scheduler::new(config).unwrap()
}

/// Owns everything an [`ExtractionContext`] borrows.
pub struct Harness {
    pub source: FakeGuild,
    pub scheduler: Scheduler,
    pub images: FakeImages,
    pub options: BackupOptions,
    pub cache: GuildCache,
}

impl Harness {
    pub fn new(source: FakeGuild, options: BackupOptions) -> Self {
        let cache = GuildCache::new(source.channels.clone(), source.roles.clone());
        Self {
            source,
            scheduler: fast_scheduler(),
            images: FakeImages::default(),
            options,
            cache,
        }
    }

    pub fn ctx(&self) -> ExtractionContext<'_> {
        ExtractionContext {
            source: &self.source,
            scheduler: &self.scheduler,
            images: &self.images,
            options: &self.options,
            cache: &self.cache,
            threads: &self.source.threads,
        }
    }
}

pub fn user(id: u64, username: &str) -> User {
    UserBuilder::default()
        .id(Snowflake::new(id))
        .username(username)
        .build()
        .unwrap()
}

pub fn ban(user_id: u64, reason: Option<&str>) -> Ban {
    BanBuilder::default()
        .user(user(user_id, "banned"))
        .reason(reason.map(str::to_string))
        .build()
        .unwrap()
}

pub fn member(user_id: u64, roles: &[u64]) -> Member {
    MemberBuilder::default()
        .user(user(user_id, "member"))
        .roles(roles.iter().copied().map(Snowflake::new).collect::<Vec<_>>())
        .joined_at(Utc.timestamp_millis_opt(1_600_000_000_000).unwrap())
        .build()
        .unwrap()
}

pub fn role(id: u64, name: &str, position: i64) -> Role {
    RoleBuilder::default()
        .id(Snowflake::new(id))
        .name(name)
        .position(position)
        .build()
        .unwrap()
}

pub fn managed_role(id: u64, name: &str, position: i64) -> Role {
    RoleBuilder::default()
        .id(Snowflake::new(id))
        .name(name)
        .position(position)
        .managed(true)
        .build()
        .unwrap()
}

pub fn emoji(id: u64, name: &str) -> Emoji {
    EmojiBuilder::default()
        .id(Some(Snowflake::new(id)))
        .name(Some(name.to_string()))
        .build()
        .unwrap()
}

pub fn channel(
    id: u64,
    kind: ChannelType,
    name: &str,
    position: i64,
    parent: Option<u64>,
) -> GuildChannel {
    GuildChannelBuilder::default()
        .id(Snowflake::new(id))
        .kind(kind)
        .name(name)
        .position(position)
        .parent_id(parent.map(Snowflake::new))
        .build()
        .unwrap()
}

pub fn category(id: u64, name: &str, position: i64) -> GuildChannel {
    channel(id, ChannelType::Category, name, position, None)
}

pub fn text(id: u64, name: &str, position: i64, parent: Option<u64>) -> GuildChannel {
    channel(id, ChannelType::Text, name, position, parent)
}

pub fn message(id: u64, content: &str) -> Message {
    MessageBuilder::default()
        .id(Snowflake::new(id))
        .author(user(7, "author"))
        .content(content)
        .timestamp(Utc.timestamp_millis_opt(1_700_000_000_000).unwrap())
        .build()
        .unwrap()
}

/// `count` messages with ids `count..=1`, newest first.
pub fn history(count: u64) -> Vec<Message> {
    (1..=count)
        .rev()
        .map(|id| message(id, &format!("message {id}")))
        .collect()
}
