//! JSON output: a single document with explicit `hash` and `data` fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::{ReconciledRecord, RenderReport};

/// The rendered document shape. `data` is the array of reconciled records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub generated: DateTime<Utc>,
    pub culture: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub language: Option<String>,
    pub note: String,
    pub hash: String,
    pub data: Vec<ReconciledRecord>,
}

pub fn render(report: &RenderReport<'_>) -> Result<String, Error> {
    let document = Document {
        generated: report.generated,
        culture: report.culture.to_string(),
        language: report.language_name.map(str::to_string),
        note: report.note.to_string(),
        hash: report.hash.to_string(),
        data: report.records.to_vec(),
    };

    Ok(serde_json::to_string_pretty(&document)?)
}

/// Reads the `hash` field back out of previously rendered output.
pub fn extract_hash(content: &str) -> Option<String> {
    let document: serde_json::Value = serde_json::from_str(content).ok()?;
    document
        .get("hash")?
        .as_str()
        .map(str::to_string)
}
