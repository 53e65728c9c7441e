//! Sidebar menu trees and page navigation for Chicago Docs.
//!
//! This crate provides:
//! - [`assemble_menus`]: menu skeletons from declarative configuration
//! - [`merge_documents`]: attaching content documents to those skeletons,
//!   discovering undeclared items and creating missing groups
//! - [`flatten_menu`] and [`MenuNavigator`]: linear menu order for
//!   breadcrumbs and previous/next links
//!
//! # Quick Start
//!
//! ```
//! use chicago_config::MenuConfig;
//! use chicago_menu::{Document, MenuNavigator, assemble_menus, merge_documents};
//!
//! let config = vec![MenuConfig {
//!     name: Some("Guides".to_owned()),
//!     slug: Some("guides".to_owned()),
//!     ..MenuConfig::default()
//! }];
//! let docs = vec![Document {
//!     id: "intro".to_owned(),
//!     slug: "intro".to_owned(),
//!     path: "/guides/intro/".to_owned(),
//!     title: "Intro".to_owned(),
//!     short_title: None,
//! }];
//!
//! let menus = merge_documents(assemble_menus(&config, "/"), &docs);
//! assert_eq!(menus[0].items[0].path, "/guides/intro/");
//!
//! let navigator = MenuNavigator::new(&menus, &docs);
//! let nav = navigator.navigation(&docs[0]);
//! assert!(nav.previous.is_none());
//! ```

mod builder;
mod context;
mod document;
mod flatten;
mod item;
mod lookup;
mod merge;
mod path;

pub use builder::{assemble_menus, build_menu_item, build_menu_root};
pub use context::{BreadcrumbItem, MenuNavigator, PageNavigation, PostLink};
pub use document::{Document, INDEX_SLUG};
pub use flatten::{FlatMenuEntry, flatten_menu};
pub use item::{MenuItem, SidebarMenu};
pub use lookup::{find_document_in_group, get_sidebar_menu, sidebar_menu_index};
pub use merge::{append_index_to_menu, append_to_menu, merge_documents, populate_menu_items};
pub use path::{has_fragment, normalize_path};
