//! Joins fetched entries with fetched translations under a merge policy.
//!
//! Missing translations are a normal, expected case handled by policy, not a
//! failure; this module has no error conditions.

use std::collections::HashMap;

use crate::types::{Entry, MergeMode, ReconciledRecord, Translation};

/// Builds the entry-id lookup used by the join.
///
/// Null-text rows are discarded. Duplicate `EntryId`s are possible (the
/// server defines no ordering), and the last one encountered wins — an
/// intentional, documented tie-break.
pub fn translation_map(translations: Vec<Translation>) -> HashMap<i64, Translation> {
    let mut map = HashMap::with_capacity(translations.len());
    for translation in translations {
        if translation.text.is_none() {
            continue;
        }
        map.insert(translation.entry_id, translation);
    }
    map
}

/// Produces the reconciled dataset for one invocation.
///
/// The input ordering of `entries` is preserved; sorting them (by code, then
/// section) is the fetcher's responsibility.
pub fn reconcile(
    entries: &[Entry],
    translations: Vec<Translation>,
    mode: MergeMode,
) -> Vec<ReconciledRecord> {
    let map = translation_map(translations);

    entries
        .iter()
        .filter_map(|entry| {
            let translation = map.get(&entry.id);
            match mode {
                MergeMode::All => Some(to_record(entry, translation)),
                MergeMode::TranslatedOnly => {
                    translation.map(|translation| to_record(entry, Some(translation)))
                }
                MergeMode::UntranslatedOnly => match translation {
                    None => Some(to_record(entry, None)),
                    Some(_) => None,
                },
            }
        })
        .collect()
}

fn to_record(entry: &Entry, translation: Option<&Translation>) -> ReconciledRecord {
    let mut record = ReconciledRecord {
        id: entry.id,
        section: entry.section.clone(),
        // Codes occasionally arrive with embedded spaces; strip them all.
        code: entry.code.replace(' ', ""),
        text: entry.text.clone(),
        default_text: entry.text.clone(),
        notes: entry.notes.clone(),
        context: entry.context.clone(),
        language: "en".to_string(),
    };

    if let Some(translation) = translation {
        if let Some(text) = &translation.text {
            record.text = text.clone();
        }
        record.language = translation.language.clone();
    }

    record
}
