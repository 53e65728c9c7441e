//! Pre-order linearization of menu trees.

use serde::Serialize;

use crate::item::{MenuItem, SidebarMenu};
use crate::path::has_fragment;

/// Navigable menu entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FlatMenuEntry {
    pub id: String,
    pub slug: String,
    pub path: String,
    pub name: String,
}

impl From<&MenuItem> for FlatMenuEntry {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id.clone(),
            slug: item.slug.clone(),
            path: item.path.clone(),
            name: item.name.clone(),
        }
    }
}

/// Flatten menu items depth-first, in declaration order.
///
/// Anchor links (paths containing `#`) are dropped together with their
/// children.
#[must_use]
pub fn flatten_menu(items: &[MenuItem]) -> Vec<FlatMenuEntry> {
    let mut entries = Vec::new();
    for item in items {
        flatten_into(item, &mut entries);
    }
    entries
}

fn flatten_into(item: &MenuItem, entries: &mut Vec<FlatMenuEntry>) {
    if has_fragment(&item.path) {
        return;
    }
    entries.push(FlatMenuEntry::from(item));
    for child in &item.items {
        flatten_into(child, entries);
    }
}

impl SidebarMenu {
    /// Flatten the whole menu, root first.
    #[must_use]
    pub fn flatten(&self) -> Vec<FlatMenuEntry> {
        if has_fragment(&self.path) {
            return Vec::new();
        }
        let mut entries = vec![FlatMenuEntry {
            id: self.id.clone(),
            slug: self.slug.clone(),
            path: self.path.clone(),
            name: self.name.clone(),
        }];
        entries.extend(flatten_menu(&self.items));
        entries
    }
}
