//! Attaching documents to assembled menu trees.
//!
//! Every step works on a copy of the item list and returns the updated copy,
//! so [`merge_documents`] is a left fold over the documents: each merge step
//! sees the tree produced by the previous one. Document order therefore
//! decides the final shape when two documents collide on the same position.

use tracing::debug;

use crate::document::Document;
use crate::item::{MenuItem, SidebarMenu};
use crate::lookup::{
    document_position, item_at, item_at_mut, items_at_mut, locate_group, sidebar_menu_index,
};
use crate::path::{child_path, normalize_path, path_segments};

/// Discover the first level of a menu declared without items.
///
/// `docs` must be the documents the menu owns; see [`merge_documents`].
///
/// Yields leaves for documents directly under the menu path, followed by
/// groups for index documents exactly one directory below it. Deeper levels
/// are filled in while merging.
#[must_use]
pub fn populate_menu_items(menu: &SidebarMenu, docs: &[Document]) -> Vec<MenuItem> {
    let base_items = docs
        .iter()
        .filter(|doc| doc.path == normalize_path(&format!("{}{}/", menu.path, doc.slug)))
        .map(|doc| MenuItem::leaf(&doc.slug, doc.display_name(), &doc.slug));

    let groups = docs.iter().filter(|doc| doc.is_index()).filter_map(|doc| {
        let relative = doc.path.strip_prefix(&menu.path)?;
        let mut segments = path_segments(relative);
        match (segments.next(), segments.next()) {
            (Some(slug), None) => Some(MenuItem::group(
                slug,
                doc.display_name(),
                &child_path(&menu.path, slug),
            )),
            _ => None,
        }
    });

    base_items.chain(groups).collect()
}

/// Name the group anchored by an index document, creating it if missing.
///
/// An existing group keeps its name if it has one. Otherwise every missing
/// group between `menu_path` and `post_path` is created: intermediate groups
/// are named after their slug and the deepest one after the document.
#[must_use]
pub fn append_index_to_menu(
    items: &[MenuItem],
    menu_path: &str,
    post_name: &str,
    post_path: &str,
) -> Vec<MenuItem> {
    let mut new_items = items.to_vec();

    if let Some(route) = locate_group(&new_items, post_path, "") {
        if let Some(group) = item_at_mut(&mut new_items, &route)
            && !group.has_name()
        {
            group.name = post_name.to_owned();
        }
        return new_items;
    }

    let Some(relative) = post_path.strip_prefix(menu_path) else {
        debug!(menu_path, post_path, "Index document outside menu path");
        return new_items;
    };

    let slugs: Vec<&str> = path_segments(relative).collect();
    let mut current_path = menu_path.to_owned();
    let mut route: Vec<usize> = Vec::new();

    for (idx, &slug) in slugs.iter().enumerate() {
        let new_path = child_path(&current_path, slug);
        if let Some(existing) = locate_group(&new_items, &new_path, "") {
            route = existing;
        } else {
            let name = if idx == slugs.len() - 1 { post_name } else { slug };
            let Some(siblings) = items_at_mut(&mut new_items, &route) else {
                break;
            };
            debug!(path = %new_path, name, "Creating menu group");
            siblings.push(MenuItem::group(slug, name, &new_path));
            route.push(siblings.len() - 1);
        }
        current_path = new_path;
    }

    new_items
}

/// Attach a non-index document to its group.
///
/// The owning group is the one whose path joined with the document slug is
/// the document path; without one, the top level is searched by slug. Groups
/// with a custom list only get their declared placeholders backfilled.
#[must_use]
pub fn append_to_menu(items: &[MenuItem], document: &Document) -> Vec<MenuItem> {
    let mut new_items = items.to_vec();

    let post_route = match locate_group(&new_items, &document.path, &document.slug) {
        Some(group_route) => {
            let Some(group) = item_at(&new_items, &group_route) else {
                return new_items;
            };
            match document_position(&group.items, &document.slug) {
                Some(pos) => Some(with_child(&group_route, pos)),
                None if group.use_custom_list => {
                    debug!(path = %document.path, group = %group.path, "Group uses a custom list, skipping");
                    None
                }
                None => {
                    let siblings = items_at_mut(&mut new_items, &group_route);
                    siblings.map(|siblings| {
                        siblings.push(MenuItem::default());
                        with_child(&group_route, siblings.len() - 1)
                    })
                }
            }
        }
        None => document_position(&new_items, &document.slug).map(|pos| vec![pos]),
    };

    match post_route.and_then(|route| item_at_mut(&mut new_items, &route)) {
        Some(post) => {
            post.id.clone_from(&document.id);
            post.slug.clone_from(&document.slug);
            if !post.has_name() {
                post.name = document.display_name().to_owned();
            }
            post.path.clone_from(&document.path);
        }
        None => debug!(path = %document.path, "Document not placed in menu"),
    }

    new_items
}

fn with_child(route: &[usize], idx: usize) -> Vec<usize> {
    let mut route = route.to_vec();
    route.push(idx);
    route
}

/// Attach every document to the menu that owns it.
///
/// Menus declared without items are populated first, from the documents
/// they own. Documents no menu claims are skipped.
#[must_use]
pub fn merge_documents(mut menus: Vec<SidebarMenu>, docs: &[Document]) -> Vec<SidebarMenu> {
    let owners: Vec<Option<usize>> = docs
        .iter()
        .map(|doc| sidebar_menu_index(&menus, &doc.path))
        .collect();

    for (idx, menu) in menus.iter_mut().enumerate() {
        if !menu.items.is_empty() {
            continue;
        }
        let owned: Vec<Document> = docs
            .iter()
            .zip(&owners)
            .filter(|(_, owner)| **owner == Some(idx))
            .map(|(doc, _)| doc.clone())
            .collect();
        menu.items = populate_menu_items(menu, &owned);
        debug!(menu = %menu.path, count = menu.items.len(), "Populated menu from content");
    }

    for (doc, owner) in docs.iter().zip(owners) {
        let Some(idx) = owner else {
            tracing::warn!(path = %doc.path, "No sidebar menu claims document");
            continue;
        };
        let menu = &mut menus[idx];
        menu.items = if doc.is_index() {
            append_index_to_menu(&menu.items, &menu.path, doc.display_name(), &doc.path)
        } else {
            append_to_menu(&menu.items, doc)
        };
    }

    menus
}
