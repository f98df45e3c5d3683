//! Trait definitions for guildvault.
//!
//! Extraction never talks to the network directly. It reads a guild through
//! [`GuildSource`] and downloads images through [`ImageFetcher`], so tests can
//! swap in in-memory fakes.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod image;
mod source;

pub use image::ImageFetcher;
pub use source::GuildSource;
