//! Shared helpers for guildvault integration tests.

#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

/// Write `contents` to a temporary `.toml` file that lives as long as the handle.
pub fn config_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Failed to create temp config");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp config");
    file
}

pub const MINIMAL: &str = r#"
guild_id = "1000"

[discord]
token = "file-token"
api_base = "http://127.0.0.1:9/api/v10"

[scheduler]
min_spacing_ms = 0

[scheduler.retry]
max_attempts = 1
"#;
