//! Site bundle assembly and output.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chicago_config::{Config, ThemeOptions};
use chicago_content::{DocRecord, scan_docs};
use chicago_menu::{Document, MenuNavigator, SidebarMenu, assemble_menus, merge_documents};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::SiteError;
use crate::page::PageEntry;

/// File name of the written bundle.
pub const BUNDLE_FILE: &str = "site.json";

/// Theme options published with the bundle.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    #[serde(flatten)]
    pub theme: ThemeOptions,
    /// SHA-256 of the serialized theme options.
    pub content_digest: String,
}

/// Complete build output: options, merged menus and pages.
#[derive(Clone, Debug, Serialize)]
pub struct SiteBundle {
    pub config: SiteConfig,
    pub menus: Vec<SidebarMenu>,
    pub pages: Vec<PageEntry>,
}

impl SiteBundle {
    /// Assemble the bundle from already loaded documents.
    pub fn from_records(config: &Config, records: &[DocRecord]) -> Result<Self, SiteError> {
        let docs: Vec<Document> = records.iter().map(|r| r.document.clone()).collect();
        let menus = merge_documents(
            assemble_menus(&config.sidebar_menus, &config.base_path),
            &docs,
        );

        let pages = {
            let navigator = MenuNavigator::new(&menus, &docs);
            records
                .iter()
                .map(|record| PageEntry::new(record, &navigator, config))
                .collect()
        };

        let theme = config.theme_options();
        let content_digest = content_digest(&theme)?;

        Ok(Self {
            config: SiteConfig {
                theme,
                content_digest,
            },
            menus,
            pages,
        })
    }

    /// Write the bundle as pretty JSON into `output_dir`.
    ///
    /// Returns the path of the written file.
    pub fn write_to(&self, output_dir: &Path) -> Result<PathBuf, SiteError> {
        fs::create_dir_all(output_dir).map_err(|source| SiteError::Io {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let path = output_dir.join(BUNDLE_FILE);
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json).map_err(|source| SiteError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::info!(path = %path.display(), pages = self.pages.len(), "Wrote site bundle");
        Ok(path)
    }
}

/// Create the docs, assets and pages directories when missing.
///
/// Returns the directories that were created.
pub fn ensure_content_dirs(config: &Config) -> Result<Vec<PathBuf>, SiteError> {
    let mut created = Vec::new();
    for dir in config.content_dirs() {
        if dir.exists() {
            continue;
        }
        tracing::info!("Creating the {} directory", dir.display());
        fs::create_dir_all(dir).map_err(|source| SiteError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        created.push(dir.to_path_buf());
    }
    Ok(created)
}

/// Build the site for `config`.
///
/// Creates missing content directories, loads every document and merges it
/// into the configured sidebar menus.
pub fn build_site(config: &Config) -> Result<SiteBundle, SiteError> {
    let start = Instant::now();
    ensure_content_dirs(config)?;

    let records = scan_docs(config)?;
    let bundle = SiteBundle::from_records(config, &records)?;

    tracing::info!(
        pages = bundle.pages.len(),
        menus = bundle.menus.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Site built"
    );
    Ok(bundle)
}

fn content_digest(theme: &ThemeOptions) -> Result<String, serde_json::Error> {
    let bytes = serde_json::to_vec(theme)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chicago_config::{MenuConfig, MenuItemConfig};
    use pretty_assertions::assert_eq;

    fn write(dir: &Path, relative: &str, content: &str) {
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn config_in(root: &Path) -> Config {
        let mut config = Config::from_toml_str("", root).unwrap();
        config.sidebar_menus = vec![MenuConfig {
            name: Some("Guides".to_owned()),
            slug: Some("guides".to_owned()),
            items: vec![
                MenuItemConfig::leaf("intro"),
                MenuItemConfig::group("setup", None, Vec::new()),
            ],
            ..MenuConfig::default()
        }];
        config
    }

    #[test]
    fn test_ensure_content_dirs_creates_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        fs::create_dir_all(&config.docs_path).unwrap();

        let created = ensure_content_dirs(&config).unwrap();

        assert_eq!(created, vec![config.assets_path.clone(), config.pages_path.clone()]);
        assert!(config.pages_path.is_dir());
        assert!(ensure_content_dirs(&config).unwrap().is_empty());
    }

    #[test]
    fn test_build_site_merges_documents() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let docs = &config.docs_path;
        write(docs, "guides/intro.md", "---\ntitle: Introduction\nshortTitle: Intro\n---\n# Hi\n");
        write(docs, "guides/setup/index.md", "---\ntitle: Setup\n---\n");
        write(docs, "guides/setup/install.md", "---\ntitle: Install\n---\n## Steps\n");

        let bundle = build_site(&config).unwrap();

        let menu = &bundle.menus[0];
        assert_eq!(menu.path, "/guides/");
        assert_eq!(menu.items[0].name, "Intro");
        assert_eq!(menu.items[0].path, "/guides/intro/");
        let setup = &menu.items[1];
        assert_eq!(setup.name, "Setup");
        assert_eq!(setup.items[0].path, "/guides/setup/install/");

        let install = bundle
            .pages
            .iter()
            .find(|page| page.slug == "install")
            .unwrap();
        assert_eq!(install.menu_path.as_deref(), Some("/guides/"));
        assert_eq!(install.navigation.previous.as_ref().unwrap().path, "/guides/setup/");
        assert!(install.navigation.next.is_none());
        assert_eq!(install.header_flat_map[0].url, "#steps");
    }

    #[test]
    fn test_write_to_produces_json() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        write(&config.docs_path, "guides/intro.md", "# Intro\n");
        let bundle = build_site(&config).unwrap();

        let out = dir.path().join("out");
        let path = bundle.write_to(&out).unwrap();

        assert_eq!(path, out.join(BUNDLE_FILE));
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["config"]["basePath"], "/");
        assert_eq!(json["config"]["contentDigest"].as_str().unwrap().len(), 64);
        assert_eq!(json["menus"][0]["sidebarLabel"], "Guides");
        assert_eq!(json["pages"][0]["path"], "/guides/intro/");
        assert_eq!(json["pages"][0]["showTOC"], true);
    }

    #[test]
    fn test_content_digest_tracks_options() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path());
        let first = SiteBundle::from_records(&config, &[]).unwrap();
        config.sidebar_depth = 2;
        let second = SiteBundle::from_records(&config, &[]).unwrap();

        assert_ne!(first.config.content_digest, second.config.content_digest);
        assert_eq!(
            first.config.content_digest,
            SiteBundle::from_records(&config_in(dir.path()), &[])
                .unwrap()
                .config
                .content_digest
        );
    }
}
