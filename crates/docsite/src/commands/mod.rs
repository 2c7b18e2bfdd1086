//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod show;
pub(crate) mod sidebar;

use std::path::PathBuf;

use chrono::Datelike;
use clap::Args;
use docsite_config::{BuildContext, SiteConfiguration};

use crate::error::CliError;

pub(crate) use show::ShowArgs;

/// Arguments shared by every command, accepted before or after the command name.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover docsite.toml).
    #[arg(short, long, global = true, env = "DOCSITE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Year used in the footer copyright line (default: current year).
    #[arg(long, global = true)]
    pub year: Option<i32>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl ConfigArgs {
    /// Build context for assembly, reading the clock only when no year is given.
    fn build_context(&self) -> BuildContext {
        BuildContext::new(self.year.unwrap_or_else(|| chrono::Local::now().year()))
    }

    /// Locate, load and validate the site configuration.
    pub(crate) fn load(&self) -> Result<SiteConfiguration, CliError> {
        let path = docsite_config::locate(self.config.as_deref())?;
        tracing::info!(path = %path.display(), "Using configuration file");
        let config = SiteConfiguration::load_from_file(&path, &self.build_context())?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(config: Option<PathBuf>, year: Option<i32>) -> ConfigArgs {
        ConfigArgs {
            config,
            year,
            verbose: false,
        }
    }

    #[test]
    fn test_build_context_uses_explicit_year() {
        assert_eq!(args(None, Some(2024)).build_context().year, 2024);
    }

    #[test]
    fn test_load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = args(Some(dir.path().join("docsite.toml")), Some(2026))
            .load()
            .unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docsite.toml");
        std::fs::write(
            &path,
            "[metadata]\ntitle = \"EienJS\"\ncanonical_site_url = \"https://eienjs.com\"\n",
        )
        .unwrap();

        let config = args(Some(path), Some(2026)).load().unwrap();
        assert_eq!(config.footer().copyright, "© 2026 EienJS");
    }
}
