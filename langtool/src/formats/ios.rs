//! iOS `.strings` output.
//!
//! A structured header comment block followed by `"code" = "text";` pairs,
//! each preceded by a section/comment line.

use crate::error::Error;
use crate::formats::code_list;
use crate::types::RenderReport;

pub fn render(report: &RenderReport<'_>) -> Result<String, Error> {
    let mut out = String::new();

    out.push_str(&format!(
        "/* Translation to {} for apps {}, sections {} */\n",
        report.culture,
        code_list(report.applications),
        code_list(report.sections)
    ));
    out.push_str(&format!(
        "/* Generated: {} */\n",
        report.generated.to_rfc3339()
    ));
    out.push_str(&format!("/* By: langtool v{} */\n", env!("CARGO_PKG_VERSION")));
    match report.language_name {
        Some(name) => out.push_str(&format!(
            "/* Language: {} ({name}) */\n",
            report.culture
        )),
        None => out.push_str(&format!("/* Language: {} */\n", report.culture)),
    }
    out.push_str(&format!("/* Hash: {} */\n", report.hash));
    if !report.note.is_empty() {
        out.push_str(&format!("/* {} */\n", report.note));
    }
    out.push('\n');

    for record in report.records {
        out.push_str(&format!(
            "/* Section: {}. Comment: {} */\n",
            record.section,
            record.comment().unwrap_or_default()
        ));
        out.push_str(&format!(
            "\"{}\" = \"{}\";\n",
            escape(&record.code),
            escape(&record.text)
        ));
    }

    Ok(out)
}

/// Finds the `/* Hash: .. */` header comment in previously rendered output.
pub fn extract_hash(content: &str) -> Option<String> {
    content.lines().find_map(|line| {
        line.trim()
            .strip_prefix("/* Hash: ")
            .and_then(|rest| rest.strip_suffix(" */"))
            .map(|hash| hash.trim().to_string())
    })
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
