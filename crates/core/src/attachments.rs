//! Attachment representation normalization.
//!
//! Older clients submitted attachments as bare path strings; current ones
//! send `{ "name": ..., "data": ... }` objects. Both shapes are accepted at
//! the ingestion boundary and normalized to [`Attachment`] before storage,
//! so nothing downstream ever branches on the representation.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Wire shapes
// ---------------------------------------------------------------------------

/// An attachment as submitted by a client, either legacy or structured.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawAttachment {
    /// Current shape: explicit name plus an opaque data reference.
    Inline { name: String, data: Option<String> },
    /// Legacy shape: a bare stored-file path.
    Path(String),
}

/// The normalized attachment stored with a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Display name, for legacy paths the final path segment.
    pub name: String,
    /// Opaque data reference (stored path or URL), if any.
    pub data: Option<String>,
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

impl From<RawAttachment> for Attachment {
    fn from(raw: RawAttachment) -> Self {
        match raw {
            RawAttachment::Inline { name, data } => Attachment { name, data },
            RawAttachment::Path(path) => {
                let name = path
                    .rsplit('/')
                    .next()
                    .filter(|segment| !segment.is_empty())
                    .unwrap_or(path.as_str())
                    .to_string();
                Attachment {
                    name,
                    data: Some(path),
                }
            }
        }
    }
}

/// Normalize a submitted attachment list.
pub fn normalize_attachments(raw: Vec<RawAttachment>) -> Vec<Attachment> {
    raw.into_iter().map(Attachment::from).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
