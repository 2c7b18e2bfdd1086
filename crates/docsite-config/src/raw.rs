//! Raw configuration as authored.
//!
//! Every field is optional and loosely typed so that shape problems surface
//! as [`SchemaError`](crate::SchemaError)s with a node path during assembly
//! rather than as opaque deserializer messages. Keys are snake_case; the
//! camelCase spellings of the original site declaration are accepted as
//! aliases.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Raw site configuration as parsed from a configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawSiteConfig {
    /// Site metadata.
    pub metadata: RawMetadata,
    /// Locale table. `None` when the key is absent.
    pub locales: Option<BTreeMap<String, RawLocale>>,
    /// Social links in either keyed-mapping or list form.
    pub social: Option<RawSocial>,
    /// "Edit this page" configuration.
    #[serde(alias = "editLink")]
    pub edit_link: Option<RawEditLink>,
    /// Sidebar declaration.
    #[serde(alias = "navigation")]
    pub sidebar: Vec<RawNavNode>,
    /// Feature toggles.
    #[serde(alias = "featureToggles")]
    pub feature_toggles: RawFeatureToggles,
    /// Extra stylesheets injected into every page.
    #[serde(alias = "customStylesheets", alias = "customCss")]
    pub custom_stylesheets: Vec<String>,
    /// Theme plugins, by package name.
    pub plugins: Vec<String>,
    /// Footer text parts.
    pub footer: RawFooter,
}

/// Raw site metadata.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawMetadata {
    pub title: Option<String>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    #[serde(alias = "faviconPath", alias = "favicon")]
    pub favicon_path: Option<String>,
    #[serde(alias = "logoRef", alias = "logo")]
    pub logo_ref: Option<RawLogo>,
    #[serde(alias = "canonicalSiteUrl", alias = "site")]
    pub canonical_site_url: Option<String>,
}

/// Logo reference: a bare path or a `{ src = "..." }` table.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawLogo {
    Path(String),
    Asset {
        #[serde(default)]
        src: Option<String>,
    },
}

impl RawLogo {
    pub(crate) fn path(&self) -> Option<&str> {
        match self {
            Self::Path(path) => Some(path),
            Self::Asset { src } => src.as_deref(),
        }
    }
}

/// Raw locale descriptor.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawLocale {
    pub label: Option<String>,
    #[serde(alias = "languageTag")]
    pub lang: Option<String>,
}

/// Social links in one of the two accepted shapes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawSocial {
    /// `[{ icon = "github", label = "Github", href = "https://..." }]`
    List(Vec<RawSocialLink>),
    /// `{ github = "https://..." }`
    Map(BTreeMap<String, String>),
}

/// One entry of list-form social links.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawSocialLink {
    pub icon: Option<String>,
    pub label: Option<String>,
    pub href: Option<String>,
}

/// Raw edit-link configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawEditLink {
    #[serde(alias = "baseUrl")]
    pub base_url: Option<String>,
}

/// Raw feature toggles.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawFeatureToggles {
    #[serde(alias = "showLastUpdated", alias = "lastUpdated")]
    pub show_last_updated: Option<bool>,
    #[serde(alias = "paginationEnabled", alias = "pagination")]
    pub pagination_enabled: Option<bool>,
}

/// Raw footer text parts.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawFooter {
    pub organization: Option<String>,
    pub message: Option<String>,
}

/// One sidebar node before its variant is known.
///
/// The variant is decided by which of `slug`, `link` and `items`/`children`
/// is present; see [`NavigationTree::from_raw`](crate::NavigationTree::from_raw).
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawNavNode {
    pub label: Option<String>,
    pub slug: Option<String>,
    pub link: Option<String>,
    pub items: Option<Vec<RawNavNode>>,
    pub children: Option<Vec<RawNavNode>>,
    pub collapsed: Option<bool>,
}
