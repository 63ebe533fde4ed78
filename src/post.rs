//! Post records as delivered by the board subscription, and the composer
//! draft a user fills in before posting.
//!
//! The canvas only reads posts. Field names follow the document database's
//! camelCase wire shape; `createdAt` is kept as an opaque JSON value because
//! the subscription has already ordered the sequence by it.

#[cfg(test)]
#[path = "post_test.rs"]
mod post_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MESSAGE_MAX_CHARS, NAME_MAX_CHARS};

/// A single sticky note on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Opaque document id. Rendering key and layout entropy.
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,
    #[serde(default, rename = "photoURL", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl Post {
    /// A post with only display text; passthrough fields left empty.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            message: message.into(),
            details: None,
            created_at: None,
            author_id: None,
            photo_url: None,
        }
    }

    /// Parse a full snapshot (a JSON array of posts) from the host.
    ///
    /// # Errors
    ///
    /// Returns the serde error when the payload is not an array of posts.
    pub fn parse_snapshot(json: &str) -> Result<Vec<Post>, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Composer input for a new post, with the composer's length limits applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    name: String,
    message: String,
    details: String,
}

impl PostDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }

    /// Set the author name, truncated to [`NAME_MAX_CHARS`] UTF-16 units.
    pub fn set_name(&mut self, name: &str) {
        self.name = truncate_utf16(name, NAME_MAX_CHARS);
    }

    /// Set the headline, truncated to [`MESSAGE_MAX_CHARS`] UTF-16 units.
    pub fn set_message(&mut self, message: &str) {
        self.message = truncate_utf16(message, MESSAGE_MAX_CHARS);
    }

    /// Set the long-form details. Unbounded.
    pub fn set_details(&mut self, details: impl Into<String>) {
        self.details = details.into();
    }

    /// A magic draft needs at least a name or a headline to work from.
    #[must_use]
    pub fn can_magic_draft(&self) -> bool {
        !self.name.is_empty() || !self.message.is_empty()
    }

    /// Clear every field, as when the composer is reopened.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Keep whole characters while the UTF-16 length stays within `max`, the way a
/// browser's `maxLength` counts.
fn truncate_utf16(s: &str, max: usize) -> String {
    let mut units = 0;
    s.chars()
        .take_while(|c| {
            units += c.len_utf16();
            units <= max
        })
        .collect()
}
