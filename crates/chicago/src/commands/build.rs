//! `chicago build` command implementation.

use std::path::PathBuf;

use chicago_config::{CliSettings, Config};
use chicago_site::build_site;
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover chicago.toml).
    #[arg(short, long)]
    pub(crate) config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long, env = "CHICAGO_DOCS_DIR")]
    pub(crate) docs_dir: Option<PathBuf>,

    /// URL prefix for every page (overrides config).
    #[arg(long)]
    pub(crate) base_path: Option<String>,

    /// Output directory for site.json (default: .chicago/build/).
    #[arg(short, long)]
    pub(crate) output_dir: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            docs_path: self.docs_dir,
            base_path: self.base_path,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let output_dir = self.output_dir.unwrap_or_else(|| config.build_dir());

        if let Some(path) = &config.config_path {
            output.info(&format!("Config: {}", path.display()));
        }
        output.info(&format!("Docs: {}", config.docs_path.display()));
        output.info(&format!("Output: {}", output_dir.display()));

        let bundle = build_site(&config)?;
        if bundle.pages.is_empty() {
            output.warning(&format!(
                "No documents found in {}",
                config.docs_path.display()
            ));
        }

        let path = bundle.write_to(&output_dir)?;
        output.success(&format!(
            "Built {} pages into {}",
            bundle.pages.len(),
            path.display()
        ));
        Ok(())
    }
}
