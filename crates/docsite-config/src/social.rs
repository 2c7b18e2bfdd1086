//! Social links shown in the site header.
//!
//! Two authoring shapes are accepted and coerced to one keyed mapping:
//!
//! ```toml
//! [social]
//! github = "https://github.com/eienjs"
//! ```
//!
//! ```toml
//! [[social]]
//! icon = "github"
//! label = "Github"
//! href = "https://github.com/eienjs"
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::SchemaError;
use crate::raw::RawSocial;
use crate::validate::{require_http_url, require_non_empty};

/// Platforms with a social icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SocialPlatform {
    Github,
    Gitlab,
    Bitbucket,
    Codeberg,
    Discord,
    Mastodon,
    Bluesky,
    X,
    Linkedin,
    Youtube,
    Slack,
    Matrix,
    StackOverflow,
    Npm,
    Rss,
}

impl SocialPlatform {
    /// Every platform, in declaration order.
    pub const ALL: [Self; 15] = [
        Self::Github,
        Self::Gitlab,
        Self::Bitbucket,
        Self::Codeberg,
        Self::Discord,
        Self::Mastodon,
        Self::Bluesky,
        Self::X,
        Self::Linkedin,
        Self::Youtube,
        Self::Slack,
        Self::Matrix,
        Self::StackOverflow,
        Self::Npm,
        Self::Rss,
    ];

    /// Configuration key of the platform.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Gitlab => "gitlab",
            Self::Bitbucket => "bitbucket",
            Self::Codeberg => "codeberg",
            Self::Discord => "discord",
            Self::Mastodon => "mastodon",
            Self::Bluesky => "bluesky",
            Self::X => "x",
            Self::Linkedin => "linkedin",
            Self::Youtube => "youtube",
            Self::Slack => "slack",
            Self::Matrix => "matrix",
            Self::StackOverflow => "stackoverflow",
            Self::Npm => "npm",
            Self::Rss => "rss",
        }
    }

    /// Parse a platform key, case-insensitively. `twitter` maps to [`Self::X`].
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim().to_ascii_lowercase();
        if key == "twitter" {
            return Some(Self::X);
        }
        Self::ALL.into_iter().find(|p| p.as_str() == key)
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated social links, one URL per platform.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SocialLinks(BTreeMap<SocialPlatform, String>);

impl SocialLinks {
    /// Validate raw social links in either shape.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaError`] for an unknown platform, a platform listed
    /// twice, or a URL that is not an absolute http(s) URL.
    pub(crate) fn from_raw(raw: Option<&RawSocial>) -> Result<Self, SchemaError> {
        let mut links = BTreeMap::new();

        match raw {
            None => {}
            Some(RawSocial::Map(map)) => {
                for (key, url) in map {
                    let path = format!("social.{key}");
                    let platform = parse_platform(key, &path)?;
                    if links.insert(platform, require_http_url(url, &path)?).is_some() {
                        return Err(duplicate(platform, &path));
                    }
                }
            }
            Some(RawSocial::List(list)) => {
                for (i, link) in list.iter().enumerate() {
                    let path = format!("social[{i}]");
                    let icon_path = format!("{path}.icon");
                    let icon = require_non_empty(link.icon.as_deref(), &icon_path)?;
                    let platform = parse_platform(&icon, &icon_path)?;
                    let href_path = format!("{path}.href");
                    let href = require_non_empty(link.href.as_deref(), &href_path)?;
                    let url = require_http_url(&href, &href_path)?;
                    if links.insert(platform, url).is_some() {
                        return Err(duplicate(platform, &path));
                    }
                }
            }
        }

        Ok(Self(links))
    }

    /// URL for a platform.
    #[must_use]
    pub fn get(&self, platform: SocialPlatform) -> Option<&str> {
        self.0.get(&platform).map(String::as_str)
    }

    /// Iterate over links in platform order.
    pub fn iter(&self) -> impl Iterator<Item = (SocialPlatform, &str)> {
        self.0.iter().map(|(platform, url)| (*platform, url.as_str()))
    }

    /// Number of links.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no links.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for SocialLinks {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(platform, url)| (platform.as_str(), url)))
    }
}

fn parse_platform(key: &str, path: &str) -> Result<SocialPlatform, SchemaError> {
    SocialPlatform::from_key(key).ok_or_else(|| {
        SchemaError::new(path, format!("unknown social platform '{key}'"))
    })
}

fn duplicate(platform: SocialPlatform, path: &str) -> SchemaError {
    SchemaError::new(path, format!("duplicate social link for '{platform}'"))
}
