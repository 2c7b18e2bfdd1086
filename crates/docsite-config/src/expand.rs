//! Environment variable expansion for configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use crate::ConfigError;
use crate::raw::{RawSiteConfig, RawSocial};

/// Expand environment variable references in a string.
///
/// Returns the original string unchanged if no `${}` patterns are present.
/// Bare `$VAR` syntax is not expanded (only `${VAR}` with braces).
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        match std::env::var(var) {
            Ok(val) => Ok(Some(val)),
            Err(_) => Err(LookupError {
                var_name: var.to_owned(),
            }),
        }
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

/// Error returned when environment variable lookup fails.
struct LookupError {
    var_name: String,
}

/// Expand `${VAR}` references in every URL field of a raw configuration.
///
/// Expanded fields:
/// - `metadata.canonical_site_url`
/// - `edit_link.base_url`
/// - every social link URL
pub(crate) fn expand_urls(raw: &mut RawSiteConfig) -> Result<(), ConfigError> {
    if let Some(ref url) = raw.metadata.canonical_site_url {
        raw.metadata.canonical_site_url = Some(expand_env(url, "metadata.canonical_site_url")?);
    }

    if let Some(ref mut edit_link) = raw.edit_link
        && let Some(ref url) = edit_link.base_url
    {
        edit_link.base_url = Some(expand_env(url, "edit_link.base_url")?);
    }

    match raw.social {
        Some(RawSocial::Map(ref mut links)) => {
            for (key, url) in links.iter_mut() {
                *url = expand_env(url, &format!("social.{key}"))?;
            }
        }
        Some(RawSocial::List(ref mut links)) => {
            for (i, link) in links.iter_mut().enumerate() {
                if let Some(ref href) = link.href {
                    link.href = Some(expand_env(href, &format!("social[{i}].href"))?);
                }
            }
        }
        None => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::{RawEditLink, RawSocialLink};

    #[test]
    fn test_expand_simple_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("DOCSITE_TEST_VAR_SIMPLE", "hello");
        }
        let result = expand_env("${DOCSITE_TEST_VAR_SIMPLE}", "test.field").unwrap();
        assert_eq!(result, "hello");
        unsafe {
            std::env::remove_var("DOCSITE_TEST_VAR_SIMPLE");
        }
    }

    #[test]
    fn test_expand_with_default_uses_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DOCSITE_UNSET_VAR_TEST");
        }
        let result = expand_env(
            "${DOCSITE_UNSET_VAR_TEST:-https://example.com}",
            "test.field",
        )
        .unwrap();
        assert_eq!(result, "https://example.com");
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DOCSITE_MISSING_VAR_TEST");
        }
        let err = expand_env("${DOCSITE_MISSING_VAR_TEST}", "test.field").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("DOCSITE_MISSING_VAR_TEST"));
        assert!(err.to_string().contains("test.field"));
    }

    #[test]
    fn test_bare_dollar_not_expanded() {
        let result = expand_env("https://example.com/$path", "test.url").unwrap();
        assert_eq!(result, "https://example.com/$path");
    }

    #[test]
    fn test_expand_urls_covers_edit_link_and_social() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("DOCSITE_TEST_ORG", "eienjs");
        }

        let mut raw = RawSiteConfig {
            edit_link: Some(RawEditLink {
                base_url: Some("https://github.com/${DOCSITE_TEST_ORG}/docs/edit/main".to_owned()),
            }),
            social: Some(RawSocial::List(vec![RawSocialLink {
                icon: Some("github".to_owned()),
                label: Some("Github".to_owned()),
                href: Some("https://github.com/${DOCSITE_TEST_ORG}".to_owned()),
            }])),
            ..RawSiteConfig::default()
        };
        expand_urls(&mut raw).unwrap();

        assert_eq!(
            raw.edit_link.unwrap().base_url.as_deref(),
            Some("https://github.com/eienjs/docs/edit/main")
        );
        let Some(RawSocial::List(links)) = raw.social else {
            panic!("expected list-form social links");
        };
        assert_eq!(links[0].href.as_deref(), Some("https://github.com/eienjs"));

        unsafe {
            std::env::remove_var("DOCSITE_TEST_ORG");
        }
    }

    #[test]
    fn test_expand_urls_reports_social_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DOCSITE_MISSING_SOCIAL");
        }

        let mut raw = RawSiteConfig {
            social: Some(RawSocial::Map(
                [("discord".to_owned(), "${DOCSITE_MISSING_SOCIAL}".to_owned())]
                    .into_iter()
                    .collect(),
            )),
            ..RawSiteConfig::default()
        };
        let err = expand_urls(&mut raw).unwrap_err();
        assert!(err.to_string().contains("social.discord"));
    }
}
