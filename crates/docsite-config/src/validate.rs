//! Field-level validation helpers shared by the assembler.

use crate::SchemaError;

/// Require a string field to be present and non-blank.
///
/// Returns the trimmed value.
pub(crate) fn require_non_empty(value: Option<&str>, path: &str) -> Result<String, SchemaError> {
    let Some(value) = value else {
        return Err(SchemaError::new(path, "missing required field"));
    };
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SchemaError::new(path, "cannot be empty"));
    }
    Ok(trimmed.to_owned())
}

/// Require a URL field to be an absolute `http://` or `https://` URL with a host.
///
/// Returns the trimmed value as authored (not the re-serialized URL, which
/// would add a trailing slash to bare origins).
pub(crate) fn require_http_url(value: &str, path: &str) -> Result<String, SchemaError> {
    let trimmed = value.trim();
    let parsed = url::Url::parse(trimmed)
        .map_err(|e| SchemaError::new(path, format!("malformed URL '{trimmed}': {e}")))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(SchemaError::new(
            path,
            format!(
                "malformed URL '{trimmed}': scheme '{}' not supported, must be http or https",
                parsed.scheme()
            ),
        ));
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(SchemaError::new(
            path,
            format!("malformed URL '{trimmed}': missing host"),
        ));
    }

    Ok(trimmed.to_owned())
}

/// Check whether a string parses as an absolute URL of any scheme.
pub(crate) fn is_absolute_url(value: &str) -> bool {
    url::Url::parse(value).is_ok()
}

/// Check that a language tag has the shape of a BCP-47 tag.
///
/// Only the surface syntax is checked: `-`-separated subtags of 1 to 8 ASCII
/// alphanumerics, the first one alphabetic.
pub(crate) fn is_language_tag(tag: &str) -> bool {
    let mut subtags = tag.split('-');
    let Some(primary) = subtags.next() else {
        return false;
    };
    let subtag_ok =
        |s: &str| (1..=8).contains(&s.len()) && s.chars().all(|c| c.is_ascii_alphanumeric());
    subtag_ok(primary) && primary.chars().all(|c| c.is_ascii_alphabetic()) && subtags.all(subtag_ok)
}

/// Require every entry of a path list to be non-blank, trimming each.
pub(crate) fn require_entries(values: &[String], path: &str) -> Result<Vec<String>, SchemaError> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| require_non_empty(Some(value), &format!("{path}[{i}]")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_empty_trims() {
        let value = require_non_empty(Some("  EienJS "), "metadata.title").unwrap();
        assert_eq!(value, "EienJS");
    }

    #[test]
    fn test_require_non_empty_missing_and_blank() {
        let err = require_non_empty(None, "metadata.title").unwrap_err();
        assert_eq!(err.path(), "metadata.title");
        assert!(err.message().contains("missing"));

        let err = require_non_empty(Some("   "), "metadata.title").unwrap_err();
        assert!(err.message().contains("empty"));
    }

    #[test]
    fn test_require_http_url_accepts_https_origin() {
        let url = require_http_url("https://eienjs.com", "metadata.canonical_site_url").unwrap();
        assert_eq!(url, "https://eienjs.com");
    }

    #[test]
    fn test_require_http_url_rejects_relative() {
        let err = require_http_url("not-a-url", "social.github").unwrap_err();
        assert_eq!(err.path(), "social.github");
        assert!(err.message().contains("malformed URL"));
    }

    #[test]
    fn test_require_http_url_rejects_other_scheme() {
        let err = require_http_url("ftp://eienjs.com", "edit_link.base_url").unwrap_err();
        assert!(err.message().contains("http or https"));
    }

    #[test]
    fn test_is_absolute_url() {
        assert!(is_absolute_url("https://example.com/a"));
        assert!(is_absolute_url("mailto:team@example.com"));
        assert!(!is_absolute_url("/packages/jsend"));
        assert!(!is_absolute_url("packages/jsend"));
    }

    #[test]
    fn test_is_language_tag() {
        assert!(is_language_tag("en"));
        assert!(is_language_tag("zh-Hans"));
        assert!(is_language_tag("pt-BR"));
        assert!(!is_language_tag(""));
        assert!(!is_language_tag("en_US"));
        assert!(!is_language_tag("1en"));
        assert!(!is_language_tag("en-"));
    }

    #[test]
    fn test_require_entries_reports_index() {
        let err = require_entries(
            &["./a.css".to_owned(), " ".to_owned()],
            "custom_stylesheets",
        )
        .unwrap_err();
        assert_eq!(err.path(), "custom_stylesheets[1]");
    }
}
