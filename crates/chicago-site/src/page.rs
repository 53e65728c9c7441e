//! Per-page output entries.

use chicago_config::Config;
use chicago_content::DocRecord;
use chicago_menu::{MenuNavigator, PageNavigation};
use chicago_toc::{TocEntry, TocNode, flatten_toc, truncate_to_depth};
use serde::Serialize;

/// Everything a page template needs for one document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEntry {
    pub id: String,
    pub slug: String,
    pub path: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Path of the sidebar menu owning this page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_path: Option<String>,
    pub show_breadcrumb: bool,
    pub show_post_nav: bool,
    pub show_sidebar: bool,
    #[serde(rename = "showTOC")]
    pub show_toc: bool,
    #[serde(flatten)]
    pub navigation: PageNavigation,
    /// Table of contents cut to the sidebar depth.
    pub nested: Vec<TocNode>,
    /// Every heading, in document order.
    pub header_flat_map: Vec<TocEntry>,
}

impl PageEntry {
    /// Build the entry for `record`.
    ///
    /// Display flags left unset in frontmatter take the theme defaults.
    #[must_use]
    pub fn new(record: &DocRecord, navigator: &MenuNavigator<'_>, config: &Config) -> Self {
        let document = &record.document;
        let display = &config.display;

        Self {
            id: document.id.clone(),
            slug: document.slug.clone(),
            path: document.path.clone(),
            title: document.title.clone(),
            short_title: document.short_title.clone(),
            description: record.description.clone(),
            menu_path: navigator
                .menu_for(&document.path)
                .map(|menu| menu.path.clone()),
            show_breadcrumb: record
                .show_breadcrumb
                .unwrap_or(display.always_show_breadcrumb),
            show_post_nav: record.show_post_nav.unwrap_or(display.always_show_post_nav),
            show_sidebar: record.show_sidebar.unwrap_or(display.always_show_sidebar),
            show_toc: record.show_toc.unwrap_or(display.always_show_toc),
            navigation: navigator.navigation(document),
            nested: truncate_to_depth(&record.toc, config.sidebar_depth),
            header_flat_map: flatten_toc(&record.toc),
        }
    }
}
