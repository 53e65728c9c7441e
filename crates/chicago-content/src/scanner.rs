//! Documentation source discovery.
//!
//! Walks the docs directory with `ignore`, so `.gitignore` rules and hidden
//! files are respected, and turns each Markdown or MDX file into a
//! [`DocRecord`].

use std::fs;
use std::path::{Component, Path};

use chicago_config::Config;
use chicago_menu::{Document, INDEX_SLUG, normalize_path};
use chicago_toc::{MAX_HEADING_LEVEL, extract_toc};
use ignore::WalkBuilder;
use sha2::{Digest, Sha256};

use crate::frontmatter::{parse_frontmatter, split_frontmatter};
use crate::{ContentError, DocRecord};

const SOURCE_EXTENSIONS: [&str; 2] = ["md", "mdx"];
const UNTITLED: &str = "Untitled";

/// Load every document under the configured docs directory.
///
/// Records are returned in file path order. A missing docs directory yields
/// no documents.
///
/// # Errors
///
/// Returns [`ContentError`] when walking fails, a file cannot be read, or its
/// frontmatter is not valid YAML.
pub fn scan_docs(config: &Config) -> Result<Vec<DocRecord>, ContentError> {
    let root = &config.docs_path;
    if !root.exists() {
        tracing::debug!(path = %root.display(), "Docs directory missing, no documents");
        return Ok(Vec::new());
    }

    let walker = WalkBuilder::new(root)
        .follow_links(true)
        .sort_by_file_path(|a, b| a.cmp(b))
        .build();

    let mut records = Vec::new();
    for entry in walker {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_some_and(|t| t.is_file()) || !is_source_file(path) {
            continue;
        }
        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        records.push(load_document(path, relative, &config.base_path)?);
    }

    tracing::debug!(count = records.len(), path = %root.display(), "Scanned documents");
    Ok(records)
}

fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

fn load_document(path: &Path, relative: &Path, base_path: &str) -> Result<DocRecord, ContentError> {
    let content = fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let (yaml, body) = split_frontmatter(&content);
    let frontmatter = yaml
        .map(parse_frontmatter)
        .transpose()
        .map_err(|e| ContentError::Frontmatter {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .unwrap_or_default();

    let relative_str = relative_url(relative);
    let slug = relative
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let short_title = frontmatter.short_title.filter(|s| !s.is_empty());
    let title = frontmatter
        .title
        .filter(|s| !s.is_empty())
        .or_else(|| short_title.clone())
        .unwrap_or_else(|| UNTITLED.to_owned());

    Ok(DocRecord {
        document: Document {
            id: document_id(&relative_str),
            path: doc_path(&relative_str, base_path),
            slug,
            title,
            short_title,
        },
        description: frontmatter.description,
        show_breadcrumb: frontmatter.show_breadcrumb,
        show_post_nav: frontmatter.show_post_nav,
        show_sidebar: frontmatter.show_sidebar,
        show_toc: frontmatter.show_toc,
        toc: extract_toc(body, MAX_HEADING_LEVEL),
        source_path: path.to_path_buf(),
    })
}

/// Relative path with `/` separators regardless of platform.
fn relative_url(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// URL path of a document from its `/`-separated path relative to the docs root.
///
/// The extension is dropped and `index` files collapse onto their directory.
/// The result is prefixed with `base_path` and always ends with `/`.
pub(crate) fn doc_path(relative: &str, base_path: &str) -> String {
    let without_ext = relative
        .rsplit_once('.')
        .filter(|(_, ext)| !ext.contains('/'))
        .map_or(relative, |(stem, _)| stem);
    let (dir, stem) = without_ext.rsplit_once('/').unwrap_or(("", without_ext));

    let file_path = if stem == INDEX_SLUG {
        format!("/{dir}/")
    } else {
        format!("/{dir}/{stem}/")
    };
    normalize_path(&format!("{base_path}/{file_path}"))
}

/// Stable document id derived from the relative source path.
fn document_id(relative: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(relative.as_bytes());
    hex::encode(hasher.finalize())
}
