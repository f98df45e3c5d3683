//! Channel tree and channel extractor tests.

mod test_utils;

use async_trait::async_trait;
use guildvault_backup::channels::{MESSAGE_PAGE_LIMIT, fetch_message_records};
use guildvault_backup::{
    BackupOptions, BackupOptionsBuilder, ChannelExtractor, ExclusionSpec, ExtractionContext,
    ImageMode, StandardChannelExtractor, build_channel_tree, get_channels,
};
use guildvault_core::{
    AttachmentBuilder, ChannelRecord, ChannelType, GuildChannel, MediaPayload, MessageBuilder,
    PermissionOverwriteRecord, Snowflake, StageChannelRecord, TextChannelRecord, ThreadMetadata,
    VoiceChannelRecord,
};
use guildvault_error::{FetchError, FetchErrorKind, GuildVaultResult};
use std::time::Duration;
use test_utils::*;

fn names(records: &[ChannelRecord]) -> Vec<&str> {
    records.iter().map(ChannelRecord::name).collect()
}

async fn tree_of(
    channels: Vec<GuildChannel>,
    exclusion: ExclusionSpec,
) -> guildvault_core::ChannelTree {
    let mut guild = FakeGuild::new();
    guild.channels = channels;
    let harness = Harness::new(guild, BackupOptions::default());
    build_channel_tree(
        &harness.source.channels,
        &exclusion,
        &harness.ctx(),
        &StandardChannelExtractor,
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn test_excluded_category_drops_its_children() {
    let tree = tree_of(
        vec![
            category(1, "Archive", 0),
            text(2, "general-old", 0, Some(1)),
            category(3, "Main", 1),
            text(4, "general", 0, Some(3)),
        ],
        ExclusionSpec::new(["Archive"]),
    )
    .await;

    assert_eq!(tree.categories().len(), 1);
    assert_eq!(tree.categories()[0].name(), "Main");
    assert!(tree.channels().all(|c| c.name() != "general-old"));
    assert!(tree.others().is_empty());
}

#[tokio::test]
async fn test_category_excluded_by_id() {
    let tree = tree_of(
        vec![category(1, "Archive", 0), text(2, "general-old", 0, Some(1))],
        ExclusionSpec::new(["1"]),
    )
    .await;

    assert!(tree.is_empty());
}

#[tokio::test]
async fn test_excluded_second_category_scenario() {
    let tree = tree_of(
        vec![
            category(1, "A", 0),
            category(2, "B", 1),
            text(3, "a1", 0, Some(1)),
            text(4, "b1", 0, Some(2)),
        ],
        ExclusionSpec::new(["B"]),
    )
    .await;

    assert_eq!(tree.categories().len(), 1);
    let a = &tree.categories()[0];
    assert_eq!(a.name(), "A");
    assert_eq!(names(a.children()), ["a1"]);
    assert!(tree.others().is_empty());
}

#[tokio::test]
async fn test_lists_sort_by_position_with_stable_ties() {
    let tree = tree_of(
        vec![
            category(1, "second", 5),
            category(2, "first", 1),
            category(3, "tied", 5),
            text(10, "c", 2, Some(2)),
            text(11, "a", 0, Some(2)),
            text(12, "b", 0, Some(2)),
            text(20, "z", 3, None),
            text(21, "y", 1, None),
            text(22, "x", 1, None),
        ],
        ExclusionSpec::default(),
    )
    .await;

    let categories: Vec<&str> = tree.categories().iter().map(|c| c.name().as_str()).collect();
    assert_eq!(categories, ["first", "second", "tied"]);
    assert_eq!(names(tree.categories()[0].children()), ["a", "b", "c"]);
    assert_eq!(names(tree.others()), ["y", "x", "z"]);
}

#[tokio::test]
async fn test_unsupported_types_are_skipped_without_aborting() {
    let tree = tree_of(
        vec![
            category(1, "Main", 0),
            channel(2, ChannelType::Forum, "forum", 0, Some(1)),
            text(3, "general", 1, Some(1)),
            channel(4, ChannelType::Media, "media", 0, None),
            channel(5, ChannelType::Unknown(99), "future", 1, None),
            text(6, "lobby", 2, None),
        ],
        ExclusionSpec::default(),
    )
    .await;

    assert_eq!(names(tree.categories()[0].children()), ["general"]);
    assert_eq!(names(tree.others()), ["lobby"]);
}

#[tokio::test]
async fn test_threads_and_orphans() {
    let tree = tree_of(
        vec![
            category(1, "Main", 0),
            text(2, "general", 0, Some(1)),
            channel(3, ChannelType::PublicThread, "thread", 0, Some(2)),
            channel(4, ChannelType::PrivateThread, "secret", 0, None),
            text(5, "orphan", 0, Some(777)),
        ],
        ExclusionSpec::default(),
    )
    .await;

    assert_eq!(names(tree.categories()[0].children()), ["general"]);
    assert_eq!(names(tree.others()), ["orphan"]);
}

#[tokio::test]
async fn test_stage_channels_route_by_placement() {
    let tree = tree_of(
        vec![
            category(1, "Events", 0),
            channel(2, ChannelType::Stage, "town-hall", 0, Some(1)),
            channel(3, ChannelType::Stage, "podium", 0, None),
        ],
        ExclusionSpec::default(),
    )
    .await;

    assert!(matches!(
        tree.categories()[0].children()[0],
        ChannelRecord::Stage(_)
    ));
    assert!(matches!(tree.others()[0], ChannelRecord::Voice(_)));
}

#[tokio::test]
async fn test_records_are_tagged_with_source_id_and_parent() {
    let voice = channel(2, ChannelType::Voice, "lounge", 0, Some(1));
    let tree = tree_of(
        vec![category(1, "Main", 0), voice, text(3, "news", 1, Some(1))],
        ExclusionSpec::default(),
    )
    .await;

    let children = tree.categories()[0].children();
    assert_eq!(children[0].source_id().get(), 2);
    assert_eq!(children[1].source_id().get(), 3);
    match &children[0] {
        ChannelRecord::Voice(voice) => assert_eq!(voice.parent().as_deref(), Some("Main")),
        other => panic!("expected voice record, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_channels_fetches_collection_once() {
    let mut guild = FakeGuild::new();
    guild.channels = vec![category(1, "Main", 0), text(2, "general", 0, Some(1))];
    let harness = Harness::new(guild, BackupOptions::default());

    let tree = get_channels(
        &ExclusionSpec::default(),
        &harness.ctx(),
        &StandardChannelExtractor,
    )
    .await
    .unwrap();

    assert_eq!(tree.channels().count(), 1);
    assert_eq!(harness.source.calls("fetch_channels"), 1);
}

/// Fails every text capture, counts voice captures.
struct FailingText;

#[async_trait]
impl ChannelExtractor for FailingText {
    async fn text(
        &self,
        channel: &GuildChannel,
        _ctx: &ExtractionContext<'_>,
    ) -> GuildVaultResult<TextChannelRecord> {
        Err(FetchError::new(FetchErrorKind::Timeout, channel.name().clone()).into())
    }

    fn voice(&self, channel: &GuildChannel, ctx: &ExtractionContext<'_>) -> VoiceChannelRecord {
        StandardChannelExtractor.voice(channel, ctx)
    }

    async fn stage(
        &self,
        channel: &GuildChannel,
        ctx: &ExtractionContext<'_>,
    ) -> GuildVaultResult<StageChannelRecord> {
        StandardChannelExtractor.stage(channel, ctx).await
    }

    fn permissions(
        &self,
        _channel: &GuildChannel,
        _ctx: &ExtractionContext<'_>,
    ) -> Vec<PermissionOverwriteRecord> {
        Vec::new()
    }
}

#[tokio::test]
async fn test_extractor_failure_aborts_build() {
    let mut guild = FakeGuild::new();
    guild.channels = vec![
        channel(1, ChannelType::Voice, "lounge", 0, None),
        text(2, "general", 1, None),
    ];
    let harness = Harness::new(guild, BackupOptions::default());

    let result = build_channel_tree(
        &harness.source.channels,
        &ExclusionSpec::default(),
        &harness.ctx(),
        &FailingText,
    )
    .await;

    assert!(result.unwrap_err().to_string().contains("general"));
}

#[tokio::test]
async fn test_message_paging_stops_at_maximum() {
    let mut guild = FakeGuild::new();
    guild.messages.insert(Snowflake::new(50), history(500));
    let options = BackupOptionsBuilder::default()
        .max_messages_per_channel(250u32)
        .build()
        .unwrap();
    let harness = Harness::new(guild, options);

    let records = fetch_message_records(Snowflake::new(50), &harness.ctx())
        .await
        .unwrap();

    assert_eq!(records.len(), 250);
    let queries = harness.source.queries();
    let limits: Vec<u8> = queries.iter().map(|(_, q)| q.limit).collect();
    assert_eq!(limits, [MESSAGE_PAGE_LIMIT as u8, MESSAGE_PAGE_LIMIT as u8, 50]);
    assert_eq!(queries[0].1.before, None);
    assert_eq!(queries[1].1.before, Some(Snowflake::new(401)));
    assert_eq!(queries[2].1.before, Some(Snowflake::new(301)));

    // Oldest first
    assert_eq!(records.first().unwrap().source_id().get(), 251);
    assert_eq!(records.last().unwrap().source_id().get(), 500);
}

#[tokio::test]
async fn test_message_paging_stops_on_short_page() {
    let mut guild = FakeGuild::new();
    guild.messages.insert(Snowflake::new(50), history(7));
    let harness = Harness::new(guild, BackupOptions::default());

    let records = fetch_message_records(Snowflake::new(50), &harness.ctx())
        .await
        .unwrap();

    assert_eq!(records.len(), 7);
    assert_eq!(harness.source.calls("fetch_messages"), 1);
}

#[tokio::test]
async fn test_zero_maximum_fetches_nothing() {
    let mut guild = FakeGuild::new();
    guild.messages.insert(Snowflake::new(50), history(5));
    let options = BackupOptionsBuilder::default()
        .max_messages_per_channel(0u32)
        .build()
        .unwrap();
    let harness = Harness::new(guild, options);

    let records = fetch_message_records(Snowflake::new(50), &harness.ctx())
        .await
        .unwrap();

    assert!(records.is_empty());
    assert_eq!(harness.source.calls("fetch_messages"), 0);
}

#[tokio::test]
async fn test_oversized_messages_are_skipped() {
    let mut guild = FakeGuild::new();
    guild.messages.insert(
        Snowflake::new(50),
        vec![
            message(3, "short"),
            message(2, &"x".repeat(2001)),
            message(1, &"y".repeat(2000)),
        ],
    );
    let harness = Harness::new(guild, BackupOptions::default());

    let records = fetch_message_records(Snowflake::new(50), &harness.ctx())
        .await
        .unwrap();

    let ids: Vec<u64> = records.iter().map(|r| r.source_id().get()).collect();
    assert_eq!(ids, [1, 3]);
}

#[tokio::test]
async fn test_image_attachments_inline_only_when_enabled() {
    let attachment = |id: u64, name: &str| {
        AttachmentBuilder::default()
            .id(Snowflake::new(id))
            .filename(name)
            .url(format!("https://cdn.example/{name}"))
            .build()
            .unwrap()
    };
    let with_files = MessageBuilder::default()
        .id(Snowflake::new(1))
        .author(user(7, "author"))
        .attachments(vec![attachment(10, "cat.PNG"), attachment(11, "notes.txt")])
        .timestamp(*message(1, "").timestamp())
        .build()
        .unwrap();

    let mut guild = FakeGuild::new();
    guild.messages.insert(Snowflake::new(50), vec![with_files]);
    let options = BackupOptionsBuilder::default()
        .save_images(ImageMode::Base64)
        .build()
        .unwrap();
    let harness = Harness::new(guild, options);

    let records = fetch_message_records(Snowflake::new(50), &harness.ctx())
        .await
        .unwrap();

    let files = records[0].files();
    assert!(matches!(files[0].attachment(), MediaPayload::Base64(_)));
    assert_eq!(
        *files[1].attachment(),
        MediaPayload::Url("https://cdn.example/notes.txt".to_string())
    );
    assert_eq!(harness.images.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_attachment_downloads_share_one_spacing_cell() {
    let attachments: Vec<_> = (10..13)
        .map(|id| {
            AttachmentBuilder::default()
                .id(Snowflake::new(id))
                .filename(format!("{id}.png"))
                .url(format!("https://cdn.example/{id}.png"))
                .build()
                .unwrap()
        })
        .collect();
    let with_files = MessageBuilder::default()
        .id(Snowflake::new(1))
        .author(user(7, "author"))
        .attachments(attachments)
        .timestamp(*message(1, "").timestamp())
        .build()
        .unwrap();

    let mut guild = FakeGuild::new();
    guild.messages.insert(Snowflake::new(50), vec![with_files]);
    let options = BackupOptionsBuilder::default()
        .save_images(ImageMode::Base64)
        .build()
        .unwrap();
    let mut harness = Harness::new(guild, options);
    harness.scheduler = spaced_scheduler(100);
    let start = tokio::time::Instant::now();

    let records = fetch_message_records(Snowflake::new(50), &harness.ctx())
        .await
        .unwrap();

    assert_eq!(records[0].files().len(), 3);
    assert_eq!(harness.images.calls(), 3);
    assert!(start.elapsed() >= Duration::from_millis(200));
}

#[tokio::test]
async fn test_text_channel_captures_active_threads() {
    let mut guild = FakeGuild::new();
    guild.channels = vec![text(2, "general", 0, None), text(3, "random", 1, None)];
    let thread = guildvault_core::GuildChannelBuilder::default()
        .id(Snowflake::new(30))
        .kind(ChannelType::PublicThread)
        .name("help")
        .parent_id(Snowflake::new(2))
        .thread_metadata(ThreadMetadata {
            archived: false,
            auto_archive_duration: 1440,
            locked: true,
        })
        .build()
        .unwrap();
    guild.threads = vec![thread];
    guild.messages.insert(Snowflake::new(30), history(3));
    let harness = Harness::new(guild, BackupOptions::default());

    let tree = build_channel_tree(
        &harness.source.channels,
        &ExclusionSpec::default(),
        &harness.ctx(),
        &StandardChannelExtractor,
    )
    .await
    .unwrap();

    let ChannelRecord::Text(general) = &tree.others()[0] else {
        panic!("expected a text record");
    };
    assert_eq!(general.threads().len(), 1);
    let thread = &general.threads()[0];
    assert_eq!(thread.name(), "help");
    assert_eq!(*thread.auto_archive_duration(), 1440);
    assert!(*thread.locked());
    assert_eq!(thread.messages().len(), 3);

    let ChannelRecord::Text(random) = &tree.others()[1] else {
        panic!("expected a text record");
    };
    assert!(random.threads().is_empty());
}
