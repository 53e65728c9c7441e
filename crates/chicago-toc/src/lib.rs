//! Table of contents support for Chicago Docs.
//!
//! A table of contents is a tree of [`TocNode`] headings. This crate builds
//! it from Markdown ([`extract_toc`]), cuts it down for the sidebar
//! ([`truncate_to_depth`]) and linearizes it into an anchor map
//! ([`flatten_toc`]).

mod extract;
mod slug;

use serde::{Deserialize, Serialize};

pub use extract::{MAX_HEADING_LEVEL, extract_toc};
pub use slug::Slugger;

/// Heading in a table of contents.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocNode {
    /// Heading text.
    #[serde(default)]
    pub title: String,
    /// Anchor link (`#heading-id`).
    #[serde(default)]
    pub url: String,
    /// Nested headings.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<TocNode>,
}

impl TocNode {
    /// Create a heading without children.
    #[must_use]
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            items: Vec::new(),
        }
    }
}

/// Flattened heading for anchor lookups.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub url: String,
    pub title: String,
}

/// Flatten headings depth-first, in document order.
#[must_use]
pub fn flatten_toc(items: &[TocNode]) -> Vec<TocEntry> {
    let mut entries = Vec::new();
    flatten_into(items, &mut entries);
    entries
}

fn flatten_into(items: &[TocNode], entries: &mut Vec<TocEntry>) {
    for item in items {
        entries.push(TocEntry {
            url: item.url.clone(),
            title: item.title.clone(),
        });
        flatten_into(&item.items, entries);
    }
}

/// Copy of `items` with every heading at depth `max_depth` or deeper
/// stripped of its children.
///
/// Top-level headings sit at depth 2; the page title is depth 1.
#[must_use]
pub fn truncate_to_depth(items: &[TocNode], max_depth: u8) -> Vec<TocNode> {
    let mut truncated = items.to_vec();
    truncate_in_place(&mut truncated, max_depth, 2);
    truncated
}

fn truncate_in_place(items: &mut [TocNode], max_depth: u8, depth: u8) {
    let depth_exceeded = depth >= max_depth;
    for item in items {
        if depth_exceeded {
            item.items.clear();
        } else {
            truncate_in_place(&mut item.items, max_depth, depth + 1);
        }
    }
}
