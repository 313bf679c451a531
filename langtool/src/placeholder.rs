//! Format placeholder extraction and validation.
//!
//! A placeholder is `%`, an optional positional index (`1$`), an optional
//! width, an optional `.precision`, and a conversion character drawn from the
//! union of the common C-style and iOS/Android specifier sets. Validation
//! compares only placeholder counts between the English default and the
//! resolved text; positions and conversion types are not checked.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Error;
use crate::types::ReconciledRecord;

lazy_static! {
    static ref PLACEHOLDER_REGEX: Regex =
        Regex::new(r"%(\d+\$)?(\d+)?(\.\d+)?[dfnxs@DuUXoOeEgGcCSaAF]").unwrap();
}

/// Result of inspecting one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderCheck {
    /// Placeholders found in the English default text, in order.
    pub placeholders: Vec<String>,
    /// Whether the resolved text mirrors the default's placeholder count.
    pub ok: bool,
}

/// All non-overlapping placeholder matches in `text`, left to right.
pub fn extract(text: &str) -> Vec<String> {
    PLACEHOLDER_REGEX
        .find_iter(text)
        .map(|found| found.as_str().to_string())
        .collect()
}

/// Inspects one record. A record whose default text has no placeholders is
/// always valid; otherwise the resolved text must contain the same number of
/// placeholders.
pub fn check(record: &ReconciledRecord) -> PlaceholderCheck {
    let placeholders = extract(&record.default_text);
    if placeholders.is_empty() {
        return PlaceholderCheck {
            placeholders,
            ok: true,
        };
    }

    let matches = extract(&record.text);
    let ok = !matches.is_empty() && matches.len() == placeholders.len();
    PlaceholderCheck { placeholders, ok }
}

/// Whether the record's default text contains at least one placeholder.
/// Drives the placeholders-only audit filter, independent of validity.
pub fn has_placeholders(record: &ReconciledRecord) -> bool {
    !extract(&record.default_text).is_empty()
}

/// All-or-nothing gate over the full dataset: if any record fails the count
/// check, the whole operation fails and no output is produced.
pub fn validate(records: &[ReconciledRecord]) -> Result<(), Error> {
    let codes: Vec<String> = records
        .iter()
        .filter(|record| !check(record).ok)
        .map(|record| record.code.clone())
        .collect();

    if codes.is_empty() {
        Ok(())
    } else {
        Err(Error::PlaceholderMismatch {
            count: codes.len(),
            codes,
        })
    }
}
