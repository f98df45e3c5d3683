//! Auto-moderation rule extraction.

use crate::GuildCache;
use guildvault_core::{
    ActionMetadataRecord, ActionRecord, AutoModerationAction, AutoModerationRule,
    AutoModerationRuleRecord, AutoModerationRuleRecordBuilder, ExemptEntry, Snowflake,
};
use guildvault_error::{GuildVaultResult, RecordError};
use guildvault_interface::GuildSource;
use guildvault_rate_limit::{Scheduler, jobs};
use tracing::{debug, instrument};

/// Fetch and project every auto-moderation rule.
///
/// References are resolved through `cache` without further fetches.
#[instrument(skip_all, fields(guild_id = %source.guild_id()))]
pub async fn get_auto_moderation_rules(
    source: &dyn GuildSource,
    scheduler: &Scheduler,
    cache: &GuildCache,
) -> GuildVaultResult<Vec<AutoModerationRuleRecord>> {
    let rules = scheduler
        .schedule(jobs::AUTO_MODERATION_RULES, || {
            source.fetch_auto_moderation_rules()
        })
        .await?;
    debug!(count = rules.len(), "Fetched auto-moderation rules");

    rules.iter().map(|rule| project_rule(rule, cache)).collect()
}

/// Project a rule.
///
/// An action whose alert channel no longer exists is kept without a channel
/// name. Exempt roles and channels that no longer exist are dropped.
pub fn project_rule(
    rule: &AutoModerationRule,
    cache: &GuildCache,
) -> GuildVaultResult<AutoModerationRuleRecord> {
    let actions: Vec<ActionRecord> = rule
        .actions()
        .iter()
        .map(|action| project_action(action, cache))
        .collect();

    let exempt_roles = resolve_exempt(rule.exempt_roles(), "role", |id| cache.role_name(id));
    let exempt_channels =
        resolve_exempt(rule.exempt_channels(), "channel", |id| cache.channel_name(id));

    AutoModerationRuleRecordBuilder::default()
        .name(rule.name().clone())
        .event_type(*rule.event_type())
        .trigger_type(*rule.trigger_type())
        .trigger_metadata(rule.trigger_metadata().clone())
        .actions(actions)
        .enabled(*rule.enabled())
        .exempt_roles(exempt_roles)
        .exempt_channels(exempt_channels)
        .build()
        .map_err(|e| {
            RecordError::new(format!(
                "Failed to build auto-moderation rule {}: {}",
                rule.id(),
                e
            ))
            .into()
        })
}

fn project_action(action: &AutoModerationAction, cache: &GuildCache) -> ActionRecord {
    let metadata = action.metadata();
    let channel_id = *metadata.channel_id();
    let channel_name = channel_id
        .and_then(|id| cache.channel_name(id))
        .map(str::to_string);

    if let (Some(id), None) = (channel_id, &channel_name) {
        debug!(channel_id = %id, "Keeping action with unresolved alert channel");
    }

    ActionRecord::new(
        *action.kind(),
        ActionMetadataRecord::new(
            channel_id,
            channel_name,
            *metadata.duration_seconds(),
            metadata.custom_message().clone(),
        ),
    )
}

fn resolve_exempt<'a>(
    ids: &[Snowflake],
    what: &str,
    lookup: impl Fn(Snowflake) -> Option<&'a str>,
) -> Vec<ExemptEntry> {
    ids.iter()
        .filter_map(|&id| match lookup(id) {
            Some(name) => Some(ExemptEntry::new(id, name.to_string())),
            None => {
                debug!(%id, kind = what, "Dropping exemption for deleted resource");
                None
            }
        })
        .collect()
}
