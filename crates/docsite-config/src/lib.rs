//! Documentation site configuration.
//!
//! Parses `docsite.toml` (or `docsite.yaml` / `docsite.json`) with serde,
//! validates it, and produces one immutable [`SiteConfiguration`] for the
//! rendering pipeline. Config files are auto-discovered in parent
//! directories when no explicit path is given.
//!
//! ## Pipeline
//!
//! 1. Parse into [`RawSiteConfig`], where every field is optional.
//! 2. Expand environment variables in URL fields.
//! 3. Assemble: validate every node, apply defaults, build the sidebar tree.
//!
//! Any violation aborts loading with a [`SchemaError`] naming the offending
//! node, e.g. `sidebar[1].items[2]: missing label`.
//!
//! ## Environment Variable Expansion
//!
//! URL values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `metadata.canonical_site_url`
//! - `edit_link.base_url`
//! - every `social` URL

mod error;
mod expand;
mod format;
mod locale;
mod navigation;
pub mod raw;
mod site;
mod social;
mod validate;

use std::path::{Path, PathBuf};

pub use error::{ConfigError, SchemaError};
pub use format::ConfigFormat;
pub use locale::{LocaleEntry, Locales, ROOT_LOCALE};
pub use navigation::{Leaves, NavItem, NavigationTree};
pub use raw::RawSiteConfig;
pub use site::{BuildContext, EditLink, FeatureToggles, Footer, SiteConfiguration, SiteMetadata};
pub use social::{SocialLinks, SocialPlatform};

/// Configuration filenames to search for, in order of preference.
pub const CONFIG_FILENAMES: [&str; 4] =
    ["docsite.toml", "docsite.yaml", "docsite.yml", "docsite.json"];

impl SiteConfiguration {
    /// Load configuration from a file.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for a config file in the current directory and parents.
    ///
    /// # Errors
    ///
    /// Returns error if no config file is found, reading or parsing fails,
    /// an environment variable is unset, or validation fails.
    pub fn load(config_path: Option<&Path>, ctx: &BuildContext) -> Result<Self, ConfigError> {
        let path = locate(config_path)?;
        Self::load_from_file(&path, ctx)
    }

    /// Load configuration from a specific file.
    ///
    /// The format is chosen by file extension.
    pub fn load_from_file(path: &Path, ctx: &BuildContext) -> Result<Self, ConfigError> {
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), %format, "Loading site configuration");
        Self::from_content(&content, format, ctx)
    }

    /// Parse, expand and assemble configuration content.
    pub fn from_content(
        content: &str,
        format: ConfigFormat,
        ctx: &BuildContext,
    ) -> Result<Self, ConfigError> {
        let mut raw = format.parse(content)?;
        expand::expand_urls(&mut raw)?;
        Ok(Self::assemble(&raw, ctx)?)
    }
}

/// Resolve the configuration file to load.
///
/// An explicit path must exist. Without one, the current directory and its
/// parents are searched for any of [`CONFIG_FILENAMES`].
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file does not exist or discovery
/// finds nothing.
pub fn locate(config_path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = config_path {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        return Ok(path.to_path_buf());
    }

    let cwd = std::env::current_dir()?;
    discover_config(&cwd).ok_or_else(|| ConfigError::NotFound(cwd.join(CONFIG_FILENAMES[0])))
}

/// Search for a config file in `start` and its parents.
#[must_use]
pub fn discover_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in CONFIG_FILENAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                tracing::debug!(path = %candidate.display(), "Discovered config file");
                return Some(candidate);
            }
        }
        if !current.pop() {
            return None;
        }
    }
}
