//! Locale table.
//!
//! The `root` locale is the default, unprefixed one. It is always present
//! after assembly: when the configuration supplies no locale table, or a
//! table without `root`, an English root locale is synthesized.

use std::collections::BTreeMap;

use serde::Serialize;
use serde::ser::SerializeMap;

use crate::SchemaError;
use crate::raw::RawLocale;
use crate::validate::{is_language_tag, require_non_empty};

/// Key of the default locale.
pub const ROOT_LOCALE: &str = "root";

const DEFAULT_LABEL: &str = "English";
const DEFAULT_LANG: &str = "en";

/// One locale of the site.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LocaleEntry {
    /// Locale key (URL prefix; `root` for the unprefixed default).
    #[serde(skip)]
    pub key: String,
    /// Human-readable name shown in the language picker.
    pub label: String,
    /// BCP-47 language tag.
    pub lang: String,
}

impl LocaleEntry {
    fn default_root() -> Self {
        Self {
            key: ROOT_LOCALE.to_owned(),
            label: DEFAULT_LABEL.to_owned(),
            lang: DEFAULT_LANG.to_owned(),
        }
    }

    /// Whether this is the default, unprefixed locale.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.key == ROOT_LOCALE
    }
}

/// Locale table keyed by locale key, with a guaranteed `root` entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Locales {
    root: LocaleEntry,
    others: BTreeMap<String, LocaleEntry>,
}

impl Default for Locales {
    fn default() -> Self {
        Self {
            root: LocaleEntry::default_root(),
            others: BTreeMap::new(),
        }
    }
}

impl Locales {
    /// Validate a raw locale table, synthesizing the root locale if missing.
    ///
    /// Non-root locales without `lang` use their key as the language tag.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaError`] for an invalid key, a missing or blank label,
    /// a root locale without `lang`, or a malformed language tag.
    pub(crate) fn from_raw(raw: Option<&BTreeMap<String, RawLocale>>) -> Result<Self, SchemaError> {
        let Some(raw) = raw else {
            return Ok(Self::default());
        };

        let mut root = None;
        let mut others = BTreeMap::new();

        for (key, locale) in raw {
            let entry = normalize_entry(key, locale)?;
            if entry.is_root() {
                root = Some(entry);
            } else {
                others.insert(entry.key.clone(), entry);
            }
        }

        let root = root.unwrap_or_else(|| {
            tracing::warn!(
                locales = ?others.keys().collect::<Vec<_>>(),
                "Locale table has no root locale, defaulting to {DEFAULT_LABEL} ({DEFAULT_LANG})"
            );
            LocaleEntry::default_root()
        });

        Ok(Self { root, others })
    }

    /// The default locale.
    #[must_use]
    pub fn root(&self) -> &LocaleEntry {
        &self.root
    }

    /// Look up a locale by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&LocaleEntry> {
        if key == ROOT_LOCALE {
            Some(&self.root)
        } else {
            self.others.get(key)
        }
    }

    /// Iterate over all locales, root first, then by key.
    pub fn iter(&self) -> impl Iterator<Item = &LocaleEntry> {
        std::iter::once(&self.root).chain(self.others.values())
    }

    /// Number of locales, including root.
    #[must_use]
    pub fn len(&self) -> usize {
        1 + self.others.len()
    }

    /// Always `false`: the root locale is always present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether the site has locales besides root.
    #[must_use]
    pub fn is_multilingual(&self) -> bool {
        !self.others.is_empty()
    }
}

impl Serialize for Locales {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for entry in self.iter() {
            map.serialize_entry(&entry.key, entry)?;
        }
        map.end()
    }
}

fn normalize_entry(key: &str, locale: &RawLocale) -> Result<LocaleEntry, SchemaError> {
    let path = format!("locales.{key}");

    if key.trim().is_empty() {
        return Err(SchemaError::new("locales", "locale key cannot be empty"));
    }
    if key.contains('/') || key.chars().any(char::is_whitespace) {
        return Err(SchemaError::new(
            &path,
            format!("locale key '{key}' cannot contain '/' or whitespace"),
        ));
    }

    let label = require_non_empty(locale.label.as_deref(), &format!("{path}.label"))?;

    let lang = match locale.lang.as_deref() {
        Some(lang) => lang.trim().to_owned(),
        None if key == ROOT_LOCALE => {
            return Err(SchemaError::new(
                format!("{path}.lang"),
                "root locale requires a language tag",
            ));
        }
        None => key.to_owned(),
    };
    if !is_language_tag(&lang) {
        return Err(SchemaError::new(
            format!("{path}.lang"),
            format!("'{lang}' is not a valid language tag"),
        ));
    }

    Ok(LocaleEntry {
        key: key.to_owned(),
        label,
        lang,
    })
}
