//! Document records consumed by the menu merger.

use serde::{Deserialize, Serialize};

/// Slug that marks a document as the index of its directory.
pub const INDEX_SLUG: &str = "index";

/// Content document as seen by the menu builder.
///
/// Produced once per source file by content ingestion; read-only here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Stable document identifier.
    pub id: String,
    /// File stem (`index` for directory index documents).
    pub slug: String,
    /// Absolute URL path with trailing slash.
    pub path: String,
    /// Full title.
    pub title: String,
    /// Short title used in menus.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_title: Option<String>,
}

impl Document {
    /// Label for menus and navigation links: short title, else title.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.short_title.as_deref() {
            Some(short) if !short.is_empty() => short,
            _ => &self.title,
        }
    }

    /// Whether this document names and anchors a group.
    #[must_use]
    pub fn is_index(&self) -> bool {
        self.slug == INDEX_SLUG
    }
}
