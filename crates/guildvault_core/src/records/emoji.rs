//! Emoji records.

use crate::MediaPayload;
use serde::{Deserialize, Serialize};

/// A custom emoji with its image inline or by URL.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_new::new,
)]
pub struct EmojiRecord {
    name: String,
    #[serde(flatten)]
    image: MediaPayload,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_flattens_to_single_key() {
        let record = EmojiRecord::new("blob".into(), MediaPayload::Url("https://x/1.png".into()));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({"name": "blob", "url": "https://x/1.png"}));

        let inline = EmojiRecord::new("blob".into(), MediaPayload::Base64("AAAA".into()));
        let json = serde_json::to_value(&inline).unwrap();
        assert_eq!(json, serde_json::json!({"name": "blob", "base64": "AAAA"}));
    }
}
