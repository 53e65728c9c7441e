//! Declarative sidebar menu configuration.
//!
//! Menus are declared in `chicago.toml` as `[[sidebar_menus]]` tables. Each
//! item is either a leaf (a document reference by slug) or a group (a
//! directory of documents, marked with `is_group = true`):
//!
//! ```toml
//! [[sidebar_menus]]
//! name = "Guides"
//! slug = "guides"
//! items = [
//!   { slug = "intro" },
//!   { slug = "setup", name = "Setup", is_group = true, items = [{ slug = "install" }] },
//! ]
//! ```

use serde::{Deserialize, Serialize};

/// Top-level sidebar menu declaration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Display name.
    pub name: Option<String>,
    /// Path segment below the base path. Empty for the root menu.
    pub slug: Option<String>,
    /// Sidebar heading override. `Some("")` is kept as an explicit blank.
    pub sidebar_label: Option<String>,
    /// Dropdown label override. `Some("")` is kept as an explicit blank.
    pub dropdown_label: Option<String>,
    /// Declared items. Empty means the first level is discovered from content.
    pub items: Vec<MenuItemConfig>,
}

/// Declared menu item.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "RawMenuItem")]
pub enum MenuItemConfig {
    /// Reference to a single document.
    Leaf {
        /// Document slug, or an absolute URL for external/anchor links.
        slug: String,
        /// Display name overriding the document title.
        name: Option<String>,
    },
    /// Directory of documents anchored by an index document.
    Group {
        /// Directory name.
        slug: String,
        /// Display name. Filled from the index document when unset.
        name: Option<String>,
        /// Explicit child list. Non-empty disables auto-population.
        items: Vec<MenuItemConfig>,
    },
}

impl MenuItemConfig {
    /// Create a leaf declaration.
    #[must_use]
    pub fn leaf(slug: impl Into<String>) -> Self {
        Self::Leaf {
            slug: slug.into(),
            name: None,
        }
    }

    /// Create a group declaration.
    #[must_use]
    pub fn group(slug: impl Into<String>, name: Option<&str>, items: Vec<Self>) -> Self {
        Self::Group {
            slug: slug.into(),
            name: name.map(str::to_owned),
            items,
        }
    }
}

/// Shape of a menu item as written in TOML, before variant selection.
#[derive(Deserialize)]
struct RawMenuItem {
    #[serde(default)]
    slug: String,
    name: Option<String>,
    #[serde(default)]
    is_group: bool,
    #[serde(default)]
    items: Vec<MenuItemConfig>,
}

impl From<RawMenuItem> for MenuItemConfig {
    fn from(raw: RawMenuItem) -> Self {
        if raw.is_group {
            Self::Group {
                slug: raw.slug,
                name: raw.name,
                items: raw.items,
            }
        } else {
            Self::Leaf {
                slug: raw.slug,
                name: raw.name,
            }
        }
    }
}

/// Entry of the header navigation menu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainMenuEntry {
    /// Display name.
    pub name: String,
    /// Link target.
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Deserialize)]
    struct Wrapper {
        sidebar_menus: Vec<MenuConfig>,
    }

    #[test]
    fn test_parse_leaf_and_group() {
        let toml = r#"
[[sidebar_menus]]
name = "Guides"
slug = "guides"
items = [
  { slug = "intro" },
  { slug = "setup", name = "Setup", is_group = true, items = [{ slug = "install" }] },
]
"#;
        let parsed: Wrapper = toml::from_str(toml).unwrap();
        let menu = &parsed.sidebar_menus[0];

        assert_eq!(menu.name.as_deref(), Some("Guides"));
        assert_eq!(
            menu.items,
            vec![
                MenuItemConfig::leaf("intro"),
                MenuItemConfig::group("setup", Some("Setup"), vec![MenuItemConfig::leaf("install")]),
            ]
        );
    }

    #[test]
    fn test_leaf_ignores_declared_items() {
        let toml = r#"
[[sidebar_menus]]
slug = "api"
items = [{ slug = "client", items = [{ slug = "nested" }] }]
"#;
        let parsed: Wrapper = toml::from_str(toml).unwrap();
        assert_eq!(parsed.sidebar_menus[0].items, vec![MenuItemConfig::leaf("client")]);
    }

    #[test]
    fn test_explicit_blank_label_preserved() {
        let toml = r#"
[[sidebar_menus]]
name = "Guides"
sidebar_label = ""
"#;
        let parsed: Wrapper = toml::from_str(toml).unwrap();
        let menu = &parsed.sidebar_menus[0];
        assert_eq!(menu.sidebar_label.as_deref(), Some(""));
        assert!(menu.dropdown_label.is_none());
        assert!(menu.items.is_empty());
    }
}
