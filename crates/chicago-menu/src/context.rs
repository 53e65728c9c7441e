//! Per-document navigation derived from merged menus.
//!
//! [`MenuNavigator`] flattens each menu once and indexes documents by path,
//! so building the context for every page is linear in the menu size.

use std::collections::HashMap;

use serde::Serialize;

use crate::document::Document;
use crate::flatten::FlatMenuEntry;
use crate::item::SidebarMenu;
use crate::lookup::sidebar_menu_index;
use crate::path::path_segments;

/// Breadcrumb navigation item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BreadcrumbItem {
    /// Link target path.
    pub path: String,
    /// Display name.
    pub name: String,
}

/// Link to a neighbouring document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PostLink {
    /// Document path.
    pub path: String,
    /// Short title, else title.
    pub label: String,
}

/// Navigation for a single document.
///
/// All fields are absent when the document is not placed in its menu.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PageNavigation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breadcrumb: Option<Vec<BreadcrumbItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<PostLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PostLink>,
}

/// Navigation lookups over merged menus.
pub struct MenuNavigator<'a> {
    menus: &'a [SidebarMenu],
    flattened: Vec<Vec<FlatMenuEntry>>,
    docs_by_path: HashMap<&'a str, &'a Document>,
}

impl<'a> MenuNavigator<'a> {
    /// Index merged menus and the documents they reference.
    ///
    /// When several documents share a path, the first one wins.
    #[must_use]
    pub fn new(menus: &'a [SidebarMenu], docs: &'a [Document]) -> Self {
        let mut docs_by_path = HashMap::with_capacity(docs.len());
        for doc in docs {
            docs_by_path.entry(doc.path.as_str()).or_insert(doc);
        }

        Self {
            menus,
            flattened: menus.iter().map(SidebarMenu::flatten).collect(),
            docs_by_path,
        }
    }

    /// Sidebar menu owning `path`.
    #[must_use]
    pub fn menu_for(&self, path: &str) -> Option<&'a SidebarMenu> {
        sidebar_menu_index(self.menus, path).map(|idx| &self.menus[idx])
    }

    /// Breadcrumb and sequential links for a document.
    #[must_use]
    pub fn navigation(&self, doc: &Document) -> PageNavigation {
        let Some(menu_idx) = sidebar_menu_index(self.menus, &doc.path) else {
            return PageNavigation::default();
        };
        let flat = &self.flattened[menu_idx];
        let Some(index) = flat.iter().position(|entry| entry.path == doc.path) else {
            return PageNavigation::default();
        };

        let breadcrumb = path_segments(&doc.path)
            .filter_map(|slug| flat.iter().find(|entry| entry.slug == slug))
            .map(|entry| BreadcrumbItem {
                path: entry.path.clone(),
                name: entry.name.clone(),
            })
            .collect();

        let previous = index
            .checked_sub(1)
            .and_then(|prev| self.link_to(&flat[prev].path));
        let next = flat.get(index + 1).and_then(|entry| self.link_to(&entry.path));

        PageNavigation {
            breadcrumb: Some(breadcrumb),
            previous,
            next,
        }
    }

    fn link_to(&self, path: &str) -> Option<PostLink> {
        self.docs_by_path.get(path).map(|doc| PostLink {
            path: doc.path.clone(),
            label: doc.display_name().to_owned(),
        })
    }
}
