//! Line-oriented plain-text output.
//!
//! Header lines carry the culture, filter codes, generation timestamp, hash,
//! and the filter-mode note; then one `code<TAB>text` line per record and a
//! trailing item-count line.

use crate::error::Error;
use crate::formats::code_list;
use crate::types::RenderReport;

pub fn render(report: &RenderReport<'_>) -> Result<String, Error> {
    let mut out = String::new();

    out.push_str(&format!(
        "Translation to {} for apps {}, sections {}\n",
        report.culture,
        code_list(report.applications),
        code_list(report.sections)
    ));
    out.push_str(&format!("Generated: {}\n", report.generated.to_rfc3339()));
    out.push_str(&format!("Hash: {}\n", report.hash));
    if !report.note.is_empty() {
        out.push_str(report.note);
        out.push('\n');
    }
    out.push('\n');

    for record in report.records {
        out.push_str(&format!("{}\t{}\n", record.code, record.text));
    }

    out.push('\n');
    out.push_str(&format!("{} items\n", report.records.len()));

    Ok(out)
}

/// Finds the `Hash:` header line in previously rendered output.
pub fn extract_hash(content: &str) -> Option<String> {
    content.lines().find_map(|line| {
        line.strip_prefix("Hash: ")
            .map(|hash| hash.trim().to_string())
    })
}
