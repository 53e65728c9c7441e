//! Sidebar menu tree model.

use serde::Serialize;

/// Node of a sidebar menu tree: a document leaf or a group of documents.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Document id once attached; the slug until then.
    pub id: String,
    /// Display label. Empty means not yet named.
    pub name: String,
    /// Path segment.
    pub slug: String,
    /// Normalized absolute URL path.
    pub path: String,
    /// Whether the node is a group.
    pub is_group: bool,
    /// Children were declared explicitly; documents are never auto-appended.
    pub use_custom_list: bool,
    /// Children in declaration order, then discovery order.
    pub items: Vec<MenuItem>,
}

impl MenuItem {
    /// Leaf whose fields will be filled from a document.
    #[must_use]
    pub fn leaf(slug: &str, name: &str, path: &str) -> Self {
        Self {
            id: slug.to_owned(),
            name: name.to_owned(),
            slug: slug.to_owned(),
            path: path.to_owned(),
            ..Self::default()
        }
    }

    /// Empty, auto-populated group.
    #[must_use]
    pub fn group(slug: &str, name: &str, path: &str) -> Self {
        Self {
            id: slug.to_owned(),
            name: name.to_owned(),
            slug: slug.to_owned(),
            path: path.to_owned(),
            is_group: true,
            ..Self::default()
        }
    }

    /// Whether a display label has been assigned.
    #[must_use]
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }
}

/// Root of one declared sidebar menu.
///
/// The menu with `path == "/"` is the fallback for documents no other menu
/// claims.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarMenu {
    /// Identity key (the slug).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Path segment below the base path.
    pub slug: String,
    /// URL prefix this menu governs.
    pub path: String,
    /// Sidebar heading.
    pub sidebar_label: String,
    /// Menu switcher label.
    pub dropdown_label: String,
    /// Top-level items.
    pub items: Vec<MenuItem>,
}

impl SidebarMenu {
    /// Whether this is the fallback menu.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.path == "/"
    }
}
