//! Assembled site configuration.
//!
//! [`SiteConfiguration::assemble`] merges metadata, locales, social links, the
//! edit-link template, feature toggles and the normalized sidebar into one
//! immutable value. The current year for the footer is supplied through
//! [`BuildContext`] rather than read from the clock here.

use serde::Serialize;

use crate::SchemaError;
use crate::locale::Locales;
use crate::navigation::NavigationTree;
use crate::raw::{RawEditLink, RawFooter, RawMetadata, RawSiteConfig};
use crate::social::SocialLinks;
use crate::validate::{require_entries, require_http_url, require_non_empty};

const DEFAULT_FAVICON: &str = "/favicon.svg";

/// Values the assembler takes from the build environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildContext {
    /// Year interpolated into the footer copyright line.
    pub year: i32,
}

impl BuildContext {
    /// Build context for the given year.
    #[must_use]
    pub fn new(year: i32) -> Self {
        Self { year }
    }
}

/// Site metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SiteMetadata {
    /// Site title, never empty.
    pub title: String,
    /// Short tagline shown under the title.
    pub tagline: String,
    /// Description used in page meta tags.
    pub description: String,
    /// Favicon path, relative to the public directory.
    pub favicon_path: String,
    /// Logo image path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_ref: Option<String>,
    /// Absolute URL the site is deployed at.
    pub canonical_site_url: String,
}

impl SiteMetadata {
    fn from_raw(raw: &RawMetadata) -> Result<Self, SchemaError> {
        let title = require_non_empty(raw.title.as_deref(), "metadata.title")?;
        let canonical_site_url = require_non_empty(
            raw.canonical_site_url.as_deref(),
            "metadata.canonical_site_url",
        )?;
        let canonical_site_url =
            require_http_url(&canonical_site_url, "metadata.canonical_site_url")?;

        let favicon_path = match raw.favicon_path.as_deref() {
            Some(path) => require_non_empty(Some(path), "metadata.favicon_path")?,
            None => DEFAULT_FAVICON.to_owned(),
        };
        let logo_ref = raw
            .logo_ref
            .as_ref()
            .map(|logo| require_non_empty(logo.path(), "metadata.logo_ref"))
            .transpose()?;

        Ok(Self {
            title,
            tagline: trimmed_or_empty(raw.tagline.as_deref()),
            description: trimmed_or_empty(raw.description.as_deref()),
            favicon_path,
            logo_ref,
            canonical_site_url,
        })
    }
}

/// "Edit this page" link configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EditLink {
    /// URL that content source paths are appended to.
    pub base_url: String,
}

impl EditLink {
    fn from_raw(raw: &RawEditLink) -> Result<Self, SchemaError> {
        let base_url = require_non_empty(raw.base_url.as_deref(), "edit_link.base_url")?;
        Ok(Self {
            base_url: require_http_url(&base_url, "edit_link.base_url")?,
        })
    }

    /// Edit URL for a content source path (relative to the repository root).
    #[must_use]
    pub fn url_for(&self, source_path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            source_path.trim_start_matches('/')
        )
    }
}

/// Feature toggles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureToggles {
    /// Show the "last updated" date on pages.
    pub show_last_updated: bool,
    /// Show previous/next page links.
    pub pagination_enabled: bool,
}

impl Default for FeatureToggles {
    fn default() -> Self {
        Self {
            show_last_updated: false,
            pagination_enabled: true,
        }
    }
}

/// Footer copyright line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Footer {
    /// Copyright holder; defaults to the site title.
    pub organization: String,
    /// Text after the holder; defaults to the tagline.
    pub message: String,
    /// Rendered line, e.g. `© 2026 EienJS - Made with ❤️ and open source mind`.
    pub copyright: String,
}

impl Footer {
    fn from_raw(raw: &RawFooter, metadata: &SiteMetadata, ctx: &BuildContext) -> Self {
        let organization = raw
            .organization
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(metadata.title.as_str())
            .to_owned();
        let message = raw
            .message
            .as_deref()
            .map_or(metadata.tagline.as_str(), str::trim)
            .to_owned();

        let copyright = if message.is_empty() {
            format!("© {} {organization}", ctx.year)
        } else {
            format!("© {} {organization} - {message}", ctx.year)
        };

        Self {
            organization,
            message,
            copyright,
        }
    }
}

/// Validated, normalized site configuration.
///
/// Built once by [`SiteConfiguration::assemble`] and never mutated afterwards;
/// it can be shared freely between threads.
///
/// Serializes to a document that loads back to an equal value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SiteConfiguration {
    plugins: Vec<String>,
    custom_stylesheets: Vec<String>,
    metadata: SiteMetadata,
    locales: Locales,
    social: SocialLinks,
    #[serde(skip_serializing_if = "Option::is_none")]
    edit_link: Option<EditLink>,
    feature_toggles: FeatureToggles,
    footer: Footer,
    sidebar: NavigationTree,
}

impl SiteConfiguration {
    /// Validate a raw configuration and apply defaults.
    ///
    /// # Errors
    ///
    /// Returns the first [`SchemaError`] found, in this order: metadata,
    /// locales, social links, edit link, stylesheets, plugins, sidebar.
    pub fn assemble(raw: &RawSiteConfig, ctx: &BuildContext) -> Result<Self, SchemaError> {
        let metadata = SiteMetadata::from_raw(&raw.metadata)?;
        let locales = Locales::from_raw(raw.locales.as_ref())?;
        let social = SocialLinks::from_raw(raw.social.as_ref())?;
        let edit_link = raw.edit_link.as_ref().map(EditLink::from_raw).transpose()?;
        let custom_stylesheets = require_entries(&raw.custom_stylesheets, "custom_stylesheets")?;
        let plugins = require_entries(&raw.plugins, "plugins")?;
        let sidebar = NavigationTree::from_raw(&raw.sidebar)?;

        let defaults = FeatureToggles::default();
        let feature_toggles = FeatureToggles {
            show_last_updated: raw
                .feature_toggles
                .show_last_updated
                .unwrap_or(defaults.show_last_updated),
            pagination_enabled: raw
                .feature_toggles
                .pagination_enabled
                .unwrap_or(defaults.pagination_enabled),
        };
        let footer = Footer::from_raw(&raw.footer, &metadata, ctx);

        tracing::debug!(
            title = %metadata.title,
            locales = locales.len(),
            groups = sidebar.len(),
            "Assembled site configuration"
        );

        Ok(Self {
            plugins,
            custom_stylesheets,
            metadata,
            locales,
            social,
            edit_link,
            feature_toggles,
            footer,
            sidebar,
        })
    }

    /// Site metadata.
    #[must_use]
    pub fn metadata(&self) -> &SiteMetadata {
        &self.metadata
    }

    /// Locale table (always contains `root`).
    #[must_use]
    pub fn locales(&self) -> &Locales {
        &self.locales
    }

    /// Social links.
    #[must_use]
    pub fn social(&self) -> &SocialLinks {
        &self.social
    }

    /// Edit-link configuration, if edit links are enabled.
    #[must_use]
    pub fn edit_link(&self) -> Option<&EditLink> {
        self.edit_link.as_ref()
    }

    /// Sidebar navigation tree.
    #[must_use]
    pub fn navigation(&self) -> &NavigationTree {
        &self.sidebar
    }

    /// Feature toggles.
    #[must_use]
    pub fn feature_toggles(&self) -> FeatureToggles {
        self.feature_toggles
    }

    /// Footer copyright line.
    #[must_use]
    pub fn footer(&self) -> &Footer {
        &self.footer
    }

    /// Stylesheets injected into every page, in order.
    #[must_use]
    pub fn custom_stylesheets(&self) -> &[String] {
        &self.custom_stylesheets
    }

    /// Theme plugin names, in order.
    #[must_use]
    pub fn plugins(&self) -> &[String] {
        &self.plugins
    }
}

fn trimmed_or_empty(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_owned()
}
