//! Content digest over a reconciled dataset, used to detect whether output
//! has changed between runs. Change detection only; collision resistance is
//! not required.

use sha2::{Digest, Sha256};

use crate::types::ReconciledRecord;

/// Feeds each `(code, text)` pair into a SHA-256 digest in order and returns
/// the lowercase hex digest. Absent text is skipped rather than an error, for
/// compatibility with an earlier dataset shape that could omit it.
pub fn digest_pairs<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
{
    let mut hasher = Sha256::new();
    for (code, text) in pairs {
        hasher.update(code.as_bytes());
        if let Some(text) = text {
            hasher.update(text.as_bytes());
        }
    }
    format!("{:x}", hasher.finalize())
}

/// Digest of a final, ordered dataset: each record's code followed by its
/// resolved text.
pub fn hash_records(records: &[ReconciledRecord]) -> String {
    digest_pairs(
        records
            .iter()
            .map(|record| (record.code.as_str(), Some(record.text.as_str()))),
    )
}
