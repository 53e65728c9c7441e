//! Menu skeleton construction from declarative configuration.
//!
//! The builders only look at configuration. Attaching documents and
//! discovering undeclared items is the job of [`crate::merge`].

use chicago_config::{MenuConfig, MenuItemConfig};

use crate::item::{MenuItem, SidebarMenu};
use crate::path::{child_path, normalize_path};

/// Build the root of a sidebar menu.
///
/// Labels default to the menu name only when unset; an explicit empty label
/// is kept.
#[must_use]
pub fn build_menu_root(menu: &MenuConfig, base_path: &str) -> SidebarMenu {
    let name = menu.name.clone().unwrap_or_default();
    let slug = menu.slug.clone().unwrap_or_default();
    let path = normalize_path(&format!("{base_path}/{slug}/"));

    SidebarMenu {
        id: slug.clone(),
        sidebar_label: menu.sidebar_label.clone().unwrap_or_else(|| name.clone()),
        dropdown_label: menu.dropdown_label.clone().unwrap_or_else(|| name.clone()),
        items: build_menu_items(&menu.items, &path),
        name,
        slug,
        path,
    }
}

/// Build a menu node from its declaration.
///
/// Group paths are derived from `parent_path`; leaf paths are taken verbatim
/// from the declared slug until a document backfills them.
#[must_use]
pub fn build_menu_item(item: &MenuItemConfig, parent_path: &str) -> MenuItem {
    match item {
        MenuItemConfig::Leaf { slug, name } => {
            MenuItem::leaf(slug, name.as_deref().unwrap_or_default(), slug)
        }
        MenuItemConfig::Group { slug, name, items } => {
            let path = child_path(parent_path, slug);
            MenuItem {
                id: slug.clone(),
                name: name.clone().unwrap_or_default(),
                slug: slug.clone(),
                use_custom_list: !items.is_empty(),
                is_group: true,
                items: build_menu_items(items, &path),
                path,
            }
        }
    }
}

fn build_menu_items(items: &[MenuItemConfig], parent_path: &str) -> Vec<MenuItem> {
    items
        .iter()
        .map(|item| build_menu_item(item, parent_path))
        .collect()
}

/// Build every configured sidebar menu, in declaration order.
#[must_use]
pub fn assemble_menus(menus: &[MenuConfig], base_path: &str) -> Vec<SidebarMenu> {
    let assembled: Vec<_> = menus
        .iter()
        .map(|menu| build_menu_root(menu, base_path))
        .collect();
    tracing::debug!(count = assembled.len(), "Assembled sidebar menus");
    assembled
}
