//! All supported output formats for rendered translation datasets.
//!
//! This module provides the [`OutputFormat`] enum for generic format handling
//! and re-exports each format's `render` / `extract_hash` pair. Every format
//! embeds the resolved dataset, the content hash, the filter-mode note, the
//! target culture, and a generation timestamp.

pub mod android;
pub mod ios;
pub mod json;
pub mod text;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::Error;
use crate::types::RenderReport;

/// Represents all supported output formats for generic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Line-oriented plain text, one `code<TAB>text` line per record.
    #[default]
    Text,
    /// A single JSON document with explicit `hash` and `data` fields.
    Json,
    /// Android `strings.xml` resource document.
    Android,
    /// iOS `.strings` file.
    Ios,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Android => write!(f, "android"),
            OutputFormat::Ios => write!(f, "ios"),
        }
    }
}

/// Accepts `"text"`, `"json"`, `"android"`, and `"ios"`, case-insensitively.
impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "android" => Ok(OutputFormat::Android),
            "ios" => Ok(OutputFormat::Ios),
            other => Err(Error::config(format!("unsupported output format {other}"))),
        }
    }
}

impl OutputFormat {
    /// Returns the typical file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Android => "xml",
            OutputFormat::Ios => "strings",
        }
    }

    /// Synthesizes an output file name from the `+`-joined filter codes, the
    /// target culture, and the format's extension.
    pub fn default_file_name(
        &self,
        applications: &[String],
        sections: &[String],
        culture: &str,
    ) -> String {
        let stem = applications
            .iter()
            .chain(sections.iter())
            .cloned()
            .collect::<Vec<_>>()
            .join("+");
        let stem = if stem.is_empty() {
            String::from("Translations")
        } else {
            stem
        };
        format!("{stem}-{culture}.{}", self.extension())
    }

    /// Serializes the report into this format.
    pub fn render(&self, report: &RenderReport<'_>) -> Result<String, Error> {
        match self {
            OutputFormat::Text => text::render(report),
            OutputFormat::Json => json::render(report),
            OutputFormat::Android => android::render(report),
            OutputFormat::Ios => ios::render(report),
        }
    }

    /// Recovers the embedded content hash from previously rendered output.
    pub fn extract_hash(&self, content: &str) -> Option<String> {
        match self {
            OutputFormat::Text => text::extract_hash(content),
            OutputFormat::Json => json::extract_hash(content),
            OutputFormat::Android => android::extract_hash(content),
            OutputFormat::Ios => ios::extract_hash(content),
        }
    }
}

// Renders filter codes the way the headers embed them: ["app1","app2"].
pub(crate) fn code_list(codes: &[String]) -> String {
    let quoted: Vec<String> = codes.iter().map(|code| format!("\"{code}\"")).collect();
    format!("[{}]", quoted.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from_str(" Android ").unwrap(),
            OutputFormat::Android
        );
        assert_eq!(OutputFormat::from_str("ios").unwrap(), OutputFormat::Ios);
        assert!(OutputFormat::from_str("yaml").is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for format in [
            OutputFormat::Text,
            OutputFormat::Json,
            OutputFormat::Android,
            OutputFormat::Ios,
        ] {
            let parsed = OutputFormat::from_str(&format.to_string()).unwrap();
            assert_eq!(parsed, format);
        }
    }

    #[test]
    fn test_extensions() {
        assert_eq!(OutputFormat::Text.extension(), "txt");
        assert_eq!(OutputFormat::Json.extension(), "json");
        assert_eq!(OutputFormat::Android.extension(), "xml");
        assert_eq!(OutputFormat::Ios.extension(), "strings");
    }

    #[test]
    fn test_default_file_name_joins_filter_codes() {
        let apps = vec!["app1".to_string(), "app2".to_string()];
        let sections = vec!["menu".to_string()];

        assert_eq!(
            OutputFormat::Android.default_file_name(&apps, &sections, "fr"),
            "app1+app2+menu-fr.xml"
        );
        assert_eq!(
            OutputFormat::Text.default_file_name(&[], &sections, "pt-br"),
            "menu-pt-br.txt"
        );
    }

    #[test]
    fn test_default_file_name_without_filters() {
        assert_eq!(
            OutputFormat::Ios.default_file_name(&[], &[], "en"),
            "Translations-en.strings"
        );
    }

    #[test]
    fn test_code_list() {
        assert_eq!(code_list(&[]), "[]");
        assert_eq!(
            code_list(&["app1".to_string(), "app2".to_string()]),
            "[\"app1\",\"app2\"]"
        );
    }
}
