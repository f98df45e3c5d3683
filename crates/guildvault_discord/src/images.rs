//! CDN image downloads.

use crate::response::{classify_status, transport_error};
use async_trait::async_trait;
use guildvault_error::{FetchError, GuildVaultResult, HttpError, ImageError};
use guildvault_interface::ImageFetcher;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument, warn};

const IMAGE_TIMEOUT: Duration = Duration::from_secs(60);

/// Downloads images over plain HTTP(S).
///
/// Transient failures (rate limits, 5xx, dropped connections) surface as
/// retryable fetch errors so the scheduler can try again; anything else is
/// an [`ImageError`].
#[derive(Debug, Clone)]
pub struct HttpImageFetcher {
    client: Client,
}

impl HttpImageFetcher {
    /// Create a fetcher with its own connection pool.
    pub fn new() -> GuildVaultResult<Self> {
        let client = Client::builder()
            .timeout(IMAGE_TIMEOUT)
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Reuse an existing client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    #[instrument(skip(self))]
    async fn fetch_image(&self, url: &str) -> GuildVaultResult<Vec<u8>> {
        let parsed =
            reqwest::Url::parse(url).map_err(|e| ImageError::new(url, format!("Invalid URL: {}", e)))?;
        let resource = format!("GET {}", url);
        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| transport_error(e, &resource))?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned);
            let kind = classify_status(status.as_u16(), retry_after.as_deref(), "");
            if kind.is_retryable() {
                return Err(FetchError::new(kind, resource).into());
            }
            warn!(url, status = status.as_u16(), "Image download rejected");
            return Err(ImageError::new(url, format!("HTTP {}", status)).into());
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ImageError::new(url, format!("Failed to read body: {}", e)))?;
        debug!(url, size = bytes.len(), "Downloaded image");
        Ok(bytes.to_vec())
    }
}
