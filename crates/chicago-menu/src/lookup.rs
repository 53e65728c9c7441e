//! Lookups over assembled menus and menu trees.
//!
//! Groups are addressed by a route of child indices from the top-level item
//! list, which lets the merger find a node immutably and then edit it.

use crate::item::{MenuItem, SidebarMenu};
use crate::path::child_path;

/// Find the sidebar menu owning `post_path`.
///
/// The first non-root menu whose path is a prefix of `post_path` wins;
/// otherwise the root (`/`) menu is returned, if one is configured.
#[must_use]
pub fn get_sidebar_menu<'a>(menus: &'a [SidebarMenu], post_path: &str) -> Option<&'a SidebarMenu> {
    sidebar_menu_index(menus, post_path).map(|idx| &menus[idx])
}

/// Index of the sidebar menu owning `post_path`. See [`get_sidebar_menu`].
#[must_use]
pub fn sidebar_menu_index(menus: &[SidebarMenu], post_path: &str) -> Option<usize> {
    menus
        .iter()
        .position(|menu| {
            !menu.is_root() && !menu.path.is_empty() && post_path.starts_with(&menu.path)
        })
        .or_else(|| menus.iter().position(SidebarMenu::is_root))
}

/// First immediate child of a group with the given slug (not recursive).
#[must_use]
pub fn find_document_in_group<'a>(items: &'a [MenuItem], slug: &str) -> Option<&'a MenuItem> {
    document_position(items, slug).map(|pos| &items[pos])
}

/// Index of the child returned by [`find_document_in_group`].
pub(crate) fn document_position(items: &[MenuItem], slug: &str) -> Option<usize> {
    items.iter().position(|item| item.slug == slug)
}

/// Route to the group whose child path for `post_slug` equals `post_path`.
///
/// Pass an empty `post_slug` to find the group at `post_path` itself.
/// Search is depth-first in declaration order; the first match wins.
pub(crate) fn locate_group(items: &[MenuItem], post_path: &str, post_slug: &str) -> Option<Vec<usize>> {
    for (idx, item) in items.iter().enumerate() {
        if !item.is_group {
            continue;
        }
        if child_path(&item.path, post_slug) == post_path {
            return Some(vec![idx]);
        }
        if let Some(mut route) = locate_group(&item.items, post_path, post_slug) {
            route.insert(0, idx);
            return Some(route);
        }
    }
    None
}

pub(crate) fn item_at<'a>(items: &'a [MenuItem], route: &[usize]) -> Option<&'a MenuItem> {
    let (&first, rest) = route.split_first()?;
    let item = items.get(first)?;
    if rest.is_empty() {
        Some(item)
    } else {
        item_at(&item.items, rest)
    }
}

pub(crate) fn item_at_mut<'a>(items: &'a mut [MenuItem], route: &[usize]) -> Option<&'a mut MenuItem> {
    let (&first, rest) = route.split_first()?;
    let item = items.get_mut(first)?;
    if rest.is_empty() {
        Some(item)
    } else {
        item_at_mut(&mut item.items, rest)
    }
}

/// Child list at `route`; the top-level list for an empty route.
pub(crate) fn items_at_mut<'a>(items: &'a mut Vec<MenuItem>, route: &[usize]) -> Option<&'a mut Vec<MenuItem>> {
    if route.is_empty() {
        return Some(items);
    }
    item_at_mut(items, route).map(|item| &mut item.items)
}
