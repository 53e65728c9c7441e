//! Site assembly for Chicago Docs.
//!
//! This crate provides:
//! - [`build_site`]: load documents, merge them into the configured sidebar
//!   menus and compute per-page navigation
//! - [`SiteBundle`]: the serializable result, written as `site.json`
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use chicago_config::Config;
//! use chicago_site::build_site;
//!
//! let config = Config::load(None, None)?;
//! let bundle = build_site(&config)?;
//! bundle.write_to(&config.build_dir())?;
//! # Ok(())
//! # }
//! ```

mod bundle;
mod page;

use std::path::PathBuf;

use chicago_content::ContentError;

pub use bundle::{BUNDLE_FILE, SiteBundle, SiteConfig, build_site, ensure_content_dirs};
pub use page::PageEntry;

/// Site build error.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Documents could not be loaded.
    #[error(transparent)]
    Content(#[from] ContentError),
    /// Filesystem operation failed.
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Bundle could not be serialized.
    #[error("Failed to serialize site bundle: {0}")]
    Serialize(#[from] serde_json::Error),
}
