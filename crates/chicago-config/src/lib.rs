//! Configuration management for Chicago Docs.
//!
//! Parses `chicago.toml` theme options with serde and provides
//! auto-discovery of config files in parent directories. Every option has a
//! default, so an empty (or absent) file yields a working configuration.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! Path options support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields: `base_path`, `docs_path`, `assets_path`, `pages_path`.

mod expand;
mod menu;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use menu::{MainMenuEntry, MenuConfig, MenuItemConfig};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "chicago.toml";

/// Default sidebar table-of-contents depth.
const DEFAULT_SIDEBAR_DEPTH: u8 = 3;

/// Deepest heading level a table of contents can reach.
const MAX_HEADING_DEPTH: u8 = 6;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub docs_path: Option<PathBuf>,
    /// Override URL base path.
    pub base_path: Option<String>,
}

/// Theme options as parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ThemeOptionsRaw {
    assets_path: Option<String>,
    base_path: Option<String>,
    base_path_label: Option<String>,
    docs_path: Option<String>,
    pages_path: Option<String>,
    main_menu: Vec<MainMenuEntry>,
    sidebar_depth: Option<u8>,
    sidebar_menus: Vec<MenuConfig>,
    allow_docs_search: Option<bool>,
    always_show_breadcrumb: Option<bool>,
    always_show_post_nav: Option<bool>,
    always_show_sidebar: Option<bool>,
    always_show_toc: Option<bool>,
    primary_results_only: Option<bool>,
    sidebar_allow_multiple_open: Option<bool>,
    sidebar_allow_toc: Option<bool>,
    skip_mdx_config: Option<bool>,
    toggle_theme: Option<bool>,
}

/// Resolved theme configuration.
///
/// Built once at startup and passed by reference to every component.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding static assets.
    pub assets_path: PathBuf,
    /// URL prefix for every generated document path.
    pub base_path: String,
    /// Label for the base path link in the header.
    pub base_path_label: Option<String>,
    /// Directory holding documentation sources.
    pub docs_path: PathBuf,
    /// Directory holding standalone MDX pages.
    pub pages_path: PathBuf,
    /// Project directory for generated data (`.chicago/`).
    pub project_dir: PathBuf,
    /// Header navigation.
    pub main_menu: Vec<MainMenuEntry>,
    /// Depth the sidebar table of contents is truncated to.
    pub sidebar_depth: u8,
    /// Sidebar menu declarations.
    pub sidebar_menus: Vec<MenuConfig>,
    /// Display toggles.
    pub display: DisplayOptions,
    /// Path to the config file (set after loading).
    pub config_path: Option<PathBuf>,
}

/// Boolean display toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayOptions {
    pub allow_docs_search: bool,
    pub always_show_breadcrumb: bool,
    pub always_show_post_nav: bool,
    pub always_show_sidebar: bool,
    #[serde(rename = "alwaysShowTOC")]
    pub always_show_toc: bool,
    pub primary_results_only: bool,
    pub sidebar_allow_multiple_open: bool,
    #[serde(rename = "sidebarAllowTOC")]
    pub sidebar_allow_toc: bool,
    #[serde(rename = "skipMDXConfig")]
    pub skip_mdx_config: bool,
    pub toggle_theme: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            allow_docs_search: true,
            always_show_breadcrumb: true,
            always_show_post_nav: true,
            always_show_sidebar: true,
            always_show_toc: true,
            primary_results_only: false,
            sidebar_allow_multiple_open: true,
            sidebar_allow_toc: true,
            skip_mdx_config: false,
            toggle_theme: true,
        }
    }
}

/// Serializable view of the theme options, published alongside the site.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeOptions {
    pub assets_path: String,
    pub base_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_path_label: Option<String>,
    pub docs_path: String,
    pub pages_path: String,
    pub main_menu: Vec<MainMenuEntry>,
    pub sidebar_depth: u8,
    #[serde(flatten)]
    pub display: DisplayOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Option name (e.g., "`docs_path`").
        field: String,
        /// Error message (e.g., "${`DOCS_DIR`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `chicago.toml` in current directory and parents.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the options are invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Parse configuration from TOML content, resolving paths against `base`.
    ///
    /// # Errors
    ///
    /// Returns error if parsing, expansion, or validation fails.
    pub fn from_toml_str(content: &str, base: &Path) -> Result<Self, ConfigError> {
        let mut raw: ThemeOptionsRaw = toml::from_str(content)?;
        raw.expand_env_vars()?;
        let config = Self::resolve(raw, base);
        config.validate()?;
        Ok(config)
    }

    /// Serializable snapshot of the theme options.
    #[must_use]
    pub fn theme_options(&self) -> ThemeOptions {
        ThemeOptions {
            assets_path: self.assets_path.display().to_string(),
            base_path: self.base_path.clone(),
            base_path_label: self.base_path_label.clone(),
            docs_path: self.docs_path.display().to_string(),
            pages_path: self.pages_path.display().to_string(),
            main_menu: self.main_menu.clone(),
            sidebar_depth: self.sidebar_depth,
            display: self.display,
        }
    }

    /// Directories the site expects to exist before building.
    #[must_use]
    pub fn content_dirs(&self) -> [&Path; 3] {
        [&self.docs_path, &self.assets_path, &self.pages_path]
    }

    /// Default build output directory (`.chicago/build/`).
    #[must_use]
    pub fn build_dir(&self) -> PathBuf {
        self.project_dir.join("build")
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_path.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "base_path must start with '/', got '{}'",
                self.base_path
            )));
        }

        if self.sidebar_depth > MAX_HEADING_DEPTH {
            return Err(ConfigError::Validation(format!(
                "sidebar_depth cannot exceed {MAX_HEADING_DEPTH}"
            )));
        }

        let mut root_menus = 0;
        for menu in &self.sidebar_menus {
            let slug = menu.slug.as_deref().unwrap_or_default();
            if slug.contains('/') {
                return Err(ConfigError::Validation(format!(
                    "sidebar_menus slug '{slug}' cannot contain '/'"
                )));
            }
            if slug.is_empty() {
                root_menus += 1;
            }
        }
        if root_menus > 1 {
            return Err(ConfigError::Validation(
                "only one sidebar menu may omit its slug".to_owned(),
            ));
        }

        Ok(())
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(docs_path) = &settings.docs_path {
            self.docs_path.clone_from(docs_path);
        }
        if let Some(base_path) = &settings.base_path {
            self.base_path = resolve_base_path(Some(base_path));
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    fn default_with_base(base: &Path) -> Self {
        Self::resolve(ThemeOptionsRaw::default(), base)
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config_dir = path.parent().unwrap_or(Path::new("."));
        let mut config = Self::from_toml_str(&content, config_dir)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Apply defaults and resolve relative paths against `config_dir`.
    fn resolve(raw: ThemeOptionsRaw, config_dir: &Path) -> Self {
        let resolve = |path: Option<&str>, default: &str| {
            config_dir.join(path.filter(|p| !p.is_empty()).unwrap_or(default))
        };
        let defaults = DisplayOptions::default();

        Self {
            assets_path: resolve(raw.assets_path.as_deref(), "src/assets"),
            base_path: resolve_base_path(raw.base_path.as_deref()),
            base_path_label: raw.base_path_label,
            docs_path: resolve(raw.docs_path.as_deref(), "src/docs"),
            pages_path: resolve(raw.pages_path.as_deref(), "src/mdxPages"),
            project_dir: config_dir.join(".chicago"),
            main_menu: raw.main_menu,
            sidebar_depth: raw
                .sidebar_depth
                .filter(|&depth| depth > 0)
                .unwrap_or(DEFAULT_SIDEBAR_DEPTH),
            sidebar_menus: raw.sidebar_menus,
            display: DisplayOptions {
                allow_docs_search: raw.allow_docs_search.unwrap_or(defaults.allow_docs_search),
                always_show_breadcrumb: raw
                    .always_show_breadcrumb
                    .unwrap_or(defaults.always_show_breadcrumb),
                always_show_post_nav: raw
                    .always_show_post_nav
                    .unwrap_or(defaults.always_show_post_nav),
                always_show_sidebar: raw
                    .always_show_sidebar
                    .unwrap_or(defaults.always_show_sidebar),
                always_show_toc: raw.always_show_toc.unwrap_or(defaults.always_show_toc),
                primary_results_only: raw
                    .primary_results_only
                    .unwrap_or(defaults.primary_results_only),
                sidebar_allow_multiple_open: raw
                    .sidebar_allow_multiple_open
                    .unwrap_or(defaults.sidebar_allow_multiple_open),
                sidebar_allow_toc: raw.sidebar_allow_toc.unwrap_or(defaults.sidebar_allow_toc),
                skip_mdx_config: raw.skip_mdx_config.unwrap_or(defaults.skip_mdx_config),
                toggle_theme: raw.toggle_theme.unwrap_or(defaults.toggle_theme),
            },
            config_path: None,
        }
    }
}

impl ThemeOptionsRaw {
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        expand::expand_opt(&mut self.base_path, "base_path")?;
        expand::expand_opt(&mut self.docs_path, "docs_path")?;
        expand::expand_opt(&mut self.assets_path, "assets_path")?;
        expand::expand_opt(&mut self.pages_path, "pages_path")?;
        Ok(())
    }
}

/// An unset or empty base path means the site root.
fn resolve_base_path(base_path: Option<&str>) -> String {
    match base_path {
        Some(path) if !path.is_empty() => path.to_owned(),
        _ => "/".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/site"));
        assert_eq!(config.base_path, "/");
        assert_eq!(config.docs_path, PathBuf::from("/site/src/docs"));
        assert_eq!(config.assets_path, PathBuf::from("/site/src/assets"));
        assert_eq!(config.pages_path, PathBuf::from("/site/src/mdxPages"));
        assert_eq!(config.build_dir(), PathBuf::from("/site/.chicago/build"));
        assert_eq!(config.sidebar_depth, 3);
        assert!(config.sidebar_menus.is_empty());
        assert_eq!(config.display, DisplayOptions::default());
        assert!(config.display.allow_docs_search);
        assert!(!config.display.primary_results_only);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = Config::from_toml_str("", Path::new("/site")).unwrap();
        assert_eq!(config.base_path, "/");
        assert_eq!(config.sidebar_depth, 3);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
base_path = "/docs"
base_path_label = "Docs"
docs_path = "content"
sidebar_depth = 4
always_show_toc = false
toggle_theme = false

[[main_menu]]
name = "Guides"
path = "/docs/guides/"

[[sidebar_menus]]
name = "Guides"
slug = "guides"
"#;
        let config = Config::from_toml_str(toml, Path::new("/site")).unwrap();

        assert_eq!(config.base_path, "/docs");
        assert_eq!(config.base_path_label.as_deref(), Some("Docs"));
        assert_eq!(config.docs_path, PathBuf::from("/site/content"));
        assert_eq!(config.sidebar_depth, 4);
        assert!(!config.display.always_show_toc);
        assert!(!config.display.toggle_theme);
        assert!(config.display.always_show_sidebar);
        assert_eq!(
            config.main_menu,
            vec![MainMenuEntry {
                name: "Guides".to_owned(),
                path: "/docs/guides/".to_owned(),
            }]
        );
        assert_eq!(config.sidebar_menus.len(), 1);
    }

    #[test]
    fn test_empty_values_fall_back_to_defaults() {
        let toml = r#"
base_path = ""
docs_path = ""
sidebar_depth = 0
"#;
        let config = Config::from_toml_str(toml, Path::new("/site")).unwrap();
        assert_eq!(config.base_path, "/");
        assert_eq!(config.docs_path, PathBuf::from("/site/src/docs"));
        assert_eq!(config.sidebar_depth, 3);
    }

    #[test]
    fn test_validate_base_path_must_be_absolute() {
        let err = Config::from_toml_str("base_path = \"docs\"", Path::new("/site")).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("base_path"));
    }

    #[test]
    fn test_validate_sidebar_depth_limit() {
        let err = Config::from_toml_str("sidebar_depth = 9", Path::new("/site")).unwrap_err();
        assert!(err.to_string().contains("sidebar_depth"));
    }

    #[test]
    fn test_validate_menu_slug_without_separator() {
        let toml = r#"
[[sidebar_menus]]
slug = "guides/advanced"
"#;
        let err = Config::from_toml_str(toml, Path::new("/site")).unwrap_err();
        assert!(err.to_string().contains("guides/advanced"));
    }

    #[test]
    fn test_validate_single_root_menu() {
        let toml = r#"
[[sidebar_menus]]
name = "Main"

[[sidebar_menus]]
name = "Other"
"#;
        let err = Config::from_toml_str(toml, Path::new("/site")).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_parse_error() {
        let err = Config::from_toml_str("sidebar_depth = \"deep\"", Path::new("/")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_expand_env_vars_in_paths() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("CHICAGO_TEST_BASE", "/handbook");
        }
        let toml = r#"
base_path = "${CHICAGO_TEST_BASE}"
docs_path = "${CHICAGO_TEST_DOCS_UNSET:-handbook}"
"#;
        let config = Config::from_toml_str(toml, Path::new("/site")).unwrap();
        assert_eq!(config.base_path, "/handbook");
        assert_eq!(config.docs_path, PathBuf::from("/site/handbook"));
        unsafe {
            std::env::remove_var("CHICAGO_TEST_BASE");
        }
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default_with_base(Path::new("/site"));
        config.apply_cli_settings(&CliSettings {
            docs_path: Some(PathBuf::from("/elsewhere")),
            base_path: Some(String::new()),
        });
        assert_eq!(config.docs_path, PathBuf::from("/elsewhere"));
        assert_eq!(config.base_path, "/");
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let err = Config::load(Some(Path::new("/nonexistent/chicago.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_from_file_records_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chicago.toml");
        std::fs::write(&path, "base_path = \"/docs\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.base_path, "/docs");
        assert_eq!(config.config_path, Some(path));
        assert_eq!(config.docs_path, dir.path().join("src/docs"));
    }

    #[test]
    fn test_theme_options_serialization() {
        let config = Config::default_with_base(Path::new("/site"));
        let json = serde_json::to_value(config.theme_options()).unwrap();
        assert_eq!(json["basePath"], "/");
        assert_eq!(json["alwaysShowTOC"], true);
        assert_eq!(json["sidebarDepth"], 3);
        assert_eq!(json["docsPath"], "/site/src/docs");
        assert!(json.get("basePathLabel").is_none());
    }
}
