//! Custom emojis.

use crate::{Snowflake, cdn};
use serde::{Deserialize, Serialize};

/// A custom guild emoji.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct Emoji {
    /// Emoji id
    #[serde(default)]
    #[builder(default)]
    id: Option<Snowflake>,
    /// Emoji name
    #[serde(default)]
    #[builder(default)]
    name: Option<String>,
    /// Whether the image is animated
    #[serde(default)]
    #[builder(default)]
    animated: bool,
}

impl Emoji {
    /// CDN URL of the emoji image. Unicode emojis have none.
    pub fn image_url(&self) -> Option<String> {
        self.id.map(|id| cdn::emoji_url(id, self.animated))
    }
}
