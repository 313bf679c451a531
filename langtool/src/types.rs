//! Core types for langtool.
//! API payloads decode into these; the reconciler and renderers operate on them.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Error;

lazy_static! {
    // IETF-style locale tag as the API accepts it: 'en', 'fr', 'pt-br', 'zh-hans'.
    static ref CULTURE_CODE_REGEX: Regex =
        Regex::new(r"(?i)^[a-z]{2}(-[a-z0-9]{2,3})?$").unwrap();
    // Two to five dotted numeric components: '1.0' through '1.2.3.4.5'.
    static ref VERSION_REGEX: Regex =
        Regex::new(r"^\d+\.\d+(\.\d+)?(\.\d+)?(\.\d+)?$").unwrap();
}

/// An application registered with the Language API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Application {
    pub id: i64,
    pub code: String,
    pub name: String,
}

/// A section grouping entries within an application.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Section {
    pub id: i64,
    pub code: String,
    pub name: String,
}

/// A language the API can serve translations for.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Language {
    pub id: i64,
    pub culture_code: String,
    pub name: String,
}

/// A source-language (English) localizable string record.
///
/// `text` is the English default. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Entry {
    pub id: i64,
    pub section: String,
    pub code: String,
    pub text: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
}

/// A target-culture rendering of an [`Entry`]'s text.
///
/// `entry_id` is a foreign key into [`Entry`] and is not guaranteed unique;
/// `text` may be null server-side and such rows are discarded before
/// reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Translation {
    pub entry_id: i64,
    #[serde(default)]
    pub text: Option<String>,
    pub language: String,
}

/// Inclusion policy for the entry/translation join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeMode {
    /// Emit every entry, with translated text where available.
    #[default]
    All,
    /// Emit only entries that have a translation.
    TranslatedOnly,
    /// Emit only entries that lack a translation.
    UntranslatedOnly,
}

impl MergeMode {
    /// Human-readable note describing the filter mode, embedded in every
    /// output format.
    pub fn note(&self, culture: &str) -> &'static str {
        match self {
            MergeMode::UntranslatedOnly => "Untranslated only",
            MergeMode::TranslatedOnly => "Translated only",
            MergeMode::All if culture.eq_ignore_ascii_case("en") => "",
            MergeMode::All => "Translation and English defaults",
        }
    }
}

/// Recognized server-side filter dimensions for entry and translation
/// fetches.
///
/// Dimensions combine with logical AND; multiple values within one dimension
/// combine with logical OR.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    pub applications: Vec<String>,
    pub sections: Vec<String>,
    pub keys: Vec<String>,
    pub version: Option<String>,
    pub default_text_contains: Option<String>,
    pub translated_text_contains: Option<String>,
}

/// The unit the validator, hasher, and renderers operate on: one entry with
/// its translation resolved under the selected [`MergeMode`].
///
/// `text` is never absent; when policy excludes a record it is omitted from
/// the dataset instead.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconciledRecord {
    pub id: i64,
    pub section: String,
    pub code: String,
    /// Translated text if a translation exists, else the English default.
    pub text: String,
    /// Always the English source string.
    pub default_text: String,
    pub notes: Option<String>,
    pub context: Option<String>,
    /// Culture code of the translation, or `"en"` when untranslated.
    pub language: String,
}

impl ReconciledRecord {
    /// Merged translator-facing comment from `notes` and `context`, used by
    /// the android and ios renderers.
    pub fn comment(&self) -> Option<String> {
        let notes = self.notes.as_deref().unwrap_or("").trim();
        let context = self.context.as_deref().unwrap_or("").trim();
        match (notes.is_empty(), context.is_empty()) {
            (true, true) => None,
            (false, true) => Some(notes.to_string()),
            (true, false) => Some(context.to_string()),
            (false, false) => Some(format!("{notes}.  {context}")),
        }
    }
}

/// Immutable context handed to every renderer.
#[derive(Debug, Clone)]
pub struct RenderReport<'a> {
    pub records: &'a [ReconciledRecord],
    pub culture: &'a str,
    /// Display name of the target culture, when the language list knows it.
    pub language_name: Option<&'a str>,
    pub applications: &'a [String],
    pub sections: &'a [String],
    pub note: &'a str,
    pub hash: &'a str,
    pub generated: DateTime<Utc>,
}

/// Validates a culture code such as `fr` or `pt-br` (case-insensitive).
pub fn validate_culture(code: &str) -> Result<(), Error> {
    if CULTURE_CODE_REGEX.is_match(code) {
        Ok(())
    } else {
        Err(Error::config(format!(
            "{code} is not a valid culture code"
        )))
    }
}

/// Validates a dotted version filter such as `1.0` or `2.1.3.4`.
pub fn validate_version(version: &str) -> Result<(), Error> {
    if VERSION_REGEX.is_match(version) {
        Ok(())
    } else {
        Err(Error::config(format!(
            "{version} is not a valid version number"
        )))
    }
}

/// Builds a lookup from lowercase culture code to [`Language`].
pub fn language_map(languages: Vec<Language>) -> HashMap<String, Language> {
    languages
        .into_iter()
        .map(|language| (language.culture_code.to_lowercase(), language))
        .collect()
}
