//! Configuration file formats.

use std::fmt;
use std::path::Path;

use crate::raw::RawSiteConfig;
use crate::{ConfigError, SiteConfiguration};

/// Supported configuration file formats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConfigFormat {
    #[default]
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Detect the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Parse configuration content.
    ///
    /// Empty content parses to an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the content is malformed.
    pub fn parse(self, content: &str) -> Result<RawSiteConfig, ConfigError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(RawSiteConfig::default());
        }

        let result = match self {
            Self::Toml => {
                toml::from_str::<RawSiteConfig>(content).map_err(|e| toml_message(content, &e))
            }
            Self::Yaml => serde_yaml::from_str(trimmed).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(trimmed).map_err(|e| e.to_string()),
        };
        result.map_err(|message| ConfigError::Parse {
            format: self,
            message,
        })
    }

    /// Serialize an assembled configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Serialize` if the serializer rejects the value.
    pub fn serialize(self, config: &SiteConfiguration) -> Result<String, ConfigError> {
        let result = match self {
            Self::Toml => toml::to_string_pretty(config).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::to_string(config).map_err(|e| e.to_string()),
            Self::Json => serde_json::to_string_pretty(config).map_err(|e| e.to_string()),
        };
        result.map_err(|message| ConfigError::Serialize {
            format: self,
            message,
        })
    }
}

/// Location and message of a TOML error, without the parser's own
/// "TOML parse error" heading.
fn toml_message(content: &str, error: &toml::de::Error) -> String {
    let Some(span) = error.span() else {
        return error.message().to_owned();
    };
    let before = content.get(..span.start).unwrap_or(content);
    let line = before.matches('\n').count() + 1;
    let column = before.rsplit('\n').next().map_or(0, |l| l.chars().count()) + 1;
    format!("line {line}, column {column}: {}", error.message())
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Toml => "TOML",
            Self::Yaml => "YAML",
            Self::Json => "JSON",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("docsite.toml")),
            Some(ConfigFormat::Toml)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("conf/docsite.YML")),
            Some(ConfigFormat::Yaml)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("docsite.json")),
            Some(ConfigFormat::Json)
        );
        assert_eq!(ConfigFormat::from_path(Path::new("astro.config.mjs")), None);
        assert_eq!(ConfigFormat::from_path(Path::new("docsite")), None);
    }

    #[test]
    fn test_parse_empty_content() {
        for format in [ConfigFormat::Toml, ConfigFormat::Yaml, ConfigFormat::Json] {
            let raw = format.parse("  \n").unwrap();
            assert!(raw.metadata.title.is_none());
        }
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r"
metadata:
  title: EienJS
sidebar:
  - label: Getting Started
    items:
      - label: Manifest
        slug: getting-started/manifest
";
        let raw = ConfigFormat::Yaml.parse(yaml).unwrap();
        assert_eq!(raw.metadata.title.as_deref(), Some("EienJS"));
        assert_eq!(raw.sidebar[0].items.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_parse_error_names_format() {
        let err = ConfigFormat::Toml.parse("[metadata\ntitle = 1").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Parse {
                format: ConfigFormat::Toml,
                ..
            }
        ));
        assert!(err.to_string().starts_with("TOML parse error: line 1, column "));
        assert_eq!(err.to_string().matches("parse error").count(), 1);
    }
}
