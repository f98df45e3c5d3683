//! Content delivery URLs for hashed assets.

use crate::Snowflake;

/// Base URL of the asset CDN.
pub const CDN_BASE: &str = "https://cdn.discordapp.com";

fn extension(hash: &str) -> &'static str {
    if hash.starts_with("a_") { "gif" } else { "png" }
}

/// URL of a user's avatar.
pub fn avatar_url(user_id: Snowflake, hash: &str) -> String {
    format!("{CDN_BASE}/avatars/{user_id}/{hash}.{}", extension(hash))
}

/// URL of a role icon.
pub fn role_icon_url(role_id: Snowflake, hash: &str) -> String {
    format!("{CDN_BASE}/role-icons/{role_id}/{hash}.png")
}

/// URL of a custom emoji image.
pub fn emoji_url(emoji_id: Snowflake, animated: bool) -> String {
    let ext = if animated { "gif" } else { "png" };
    format!("{CDN_BASE}/emojis/{emoji_id}.{ext}")
}

/// URL of a guild icon.
pub fn guild_icon_url(guild_id: Snowflake, hash: &str) -> String {
    format!("{CDN_BASE}/icons/{guild_id}/{hash}.{}", extension(hash))
}

/// URL of a guild invite splash.
pub fn guild_splash_url(guild_id: Snowflake, hash: &str) -> String {
    format!("{CDN_BASE}/splashes/{guild_id}/{hash}.png")
}

/// URL of a guild banner.
pub fn guild_banner_url(guild_id: Snowflake, hash: &str) -> String {
    format!("{CDN_BASE}/banners/{guild_id}/{hash}.{}", extension(hash))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animated_hashes_use_gif() {
        let id = Snowflake::new(1);
        assert_eq!(
            avatar_url(id, "a_abc"),
            "https://cdn.discordapp.com/avatars/1/a_abc.gif"
        );
        assert_eq!(
            guild_icon_url(id, "abc"),
            "https://cdn.discordapp.com/icons/1/abc.png"
        );
        assert_eq!(emoji_url(id, true), "https://cdn.discordapp.com/emojis/1.gif");
    }
}
