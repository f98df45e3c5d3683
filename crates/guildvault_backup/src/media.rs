//! Image capture.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use guildvault_core::MediaPayload;
use guildvault_error::GuildVaultResult;
use guildvault_interface::ImageFetcher;
use guildvault_rate_limit::{JobKey, Scheduler};

/// File extensions treated as images for attachment capture.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "jpe", "jif", "jfif", "jfi"];

/// Whether `file_name` has an image extension, ignoring case.
pub fn is_image_file(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|candidate| candidate.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

/// Download `url` through the scheduler and encode it inline.
pub async fn inline_image(
    url: &str,
    job: JobKey,
    scheduler: &Scheduler,
    images: &dyn ImageFetcher,
) -> GuildVaultResult<MediaPayload> {
    let bytes = scheduler.schedule(job, || images.fetch_image(url)).await?;
    Ok(MediaPayload::Base64(STANDARD.encode(bytes)))
}

/// Inline `url` when `inline` is set, otherwise keep the URL.
pub async fn capture_image(
    url: String,
    inline: bool,
    job: JobKey,
    scheduler: &Scheduler,
    images: &dyn ImageFetcher,
) -> GuildVaultResult<MediaPayload> {
    if inline {
        inline_image(&url, job, scheduler, images).await
    } else {
        Ok(MediaPayload::Url(url))
    }
}
