//! Discord REST adapter for guildvault.
//!
//! [`DiscordRestClient`] implements [`guildvault_interface::GuildSource`] on
//! top of the v10 REST API, and [`HttpImageFetcher`] downloads CDN images for
//! inline capture. Neither applies rate limiting of its own; callers route
//! every request through the scheduler.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod images;
mod response;

pub use client::{DEFAULT_API_BASE, DiscordRestClient, PAGE_LIMIT};
pub use images::HttpImageFetcher;
pub use response::{classify_status, parse_retry_after_ms};
