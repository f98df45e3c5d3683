//! Image downloads.

use async_trait::async_trait;
use guildvault_error::GuildVaultResult;

/// Downloads image bytes by URL.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    /// Fetch the raw bytes behind `url`.
    async fn fetch_image(&self, url: &str) -> GuildVaultResult<Vec<u8>>;
}
