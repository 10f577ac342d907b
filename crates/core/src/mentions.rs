//! Mention extraction from authored content markup.
//!
//! The authoring UI embeds mentions as inline spans of the form
//! `<span class="mention" data-member-id="42">@이름</span>`. Only the
//! numeric ID matters here; the surrounding markup is opaque to the
//! backend and passed through unchanged.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::DbId;

/// Regex pattern matching the mention marker's ID attribute.
pub const MENTION_PATTERN: &str = r#"data-member-id="(\d+)""#;

/// Compiled regex for mention extraction. Compiled once, reused forever.
static MENTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(MENTION_PATTERN).expect("valid regex"));

/// Extract mentioned member IDs from a content body.
///
/// Returns the IDs de-duplicated in first-occurrence order, so repeated
/// mentions of the same member notify once. Markers whose ID does not
/// parse as a database ID are skipped; legacy or adversarial content must
/// never make extraction fail.
pub fn extract_mentions(content: &str) -> Vec<DbId> {
    let mut mentions: Vec<DbId> = Vec::new();
    for captures in MENTION_RE.captures_iter(content) {
        let Ok(id) = captures[1].parse::<DbId>() else {
            continue;
        };
        if !mentions.contains(&id) {
            mentions.push(id);
        }
    }
    mentions
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
