//! Documentation content loading for Chicago Docs.
//!
//! [`scan_docs`] walks the docs directory and produces a [`DocRecord`] per
//! Markdown or MDX file: the [`Document`] used for menu merging, the display
//! flags from its frontmatter and its table of contents.

mod frontmatter;
mod scanner;

use std::path::PathBuf;

use chicago_menu::Document;
use chicago_toc::TocNode;

pub use scanner::scan_docs;

/// A loaded documentation page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocRecord {
    /// Identity and titles used for menus and navigation.
    pub document: Document,
    pub description: Option<String>,
    /// Per-page overrides; `None` defers to the theme display options.
    pub show_breadcrumb: Option<bool>,
    pub show_post_nav: Option<bool>,
    pub show_sidebar: Option<bool>,
    pub show_toc: Option<bool>,
    /// Full heading tree, all levels.
    pub toc: Vec<TocNode>,
    /// Source file on disk.
    pub source_path: PathBuf,
}

/// Content loading error.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Source file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Frontmatter is not valid YAML.
    #[error("Invalid frontmatter in {}: {message}", path.display())]
    Frontmatter { path: PathBuf, message: String },
    /// Directory walk failed.
    #[error("Failed to walk docs directory: {0}")]
    Walk(#[from] ignore::Error),
}
