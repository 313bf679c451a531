//! Android `strings.xml` output.
//!
//! One `<string>` element per record carrying the code, section, and an
//! optional translator comment; the root `<resources>` element carries the
//! culture, generation timestamp, note, and content hash.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::error::Error;
use crate::types::RenderReport;

pub fn render(report: &RenderReport<'_>) -> Result<String, Error> {
    let mut buffer = Vec::new();
    let mut xml_writer = Writer::new(&mut buffer);

    xml_writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    xml_writer.write_event(Event::Text(BytesText::new("\n")))?;

    let mut resources = BytesStart::new("resources");
    resources.push_attribute(("language", report.culture));
    resources.push_attribute(("utcdategenerated", report.generated.to_rfc3339().as_str()));
    resources.push_attribute(("note", report.note));
    resources.push_attribute(("hash", report.hash));
    xml_writer.write_event(Event::Start(resources))?;
    xml_writer.write_event(Event::Text(BytesText::new("\n")))?;

    let generator = format!(" By: langtool v{} ", env!("CARGO_PKG_VERSION"));
    xml_writer.write_event(Event::Comment(BytesText::new(&generator)))?;
    xml_writer.write_event(Event::Text(BytesText::new("\n")))?;

    for record in report.records {
        let mut element = BytesStart::new("string");
        element.push_attribute(("name", record.code.as_str()));
        element.push_attribute(("section", record.section.as_str()));
        if let Some(comment) = record.comment() {
            element.push_attribute(("comment", comment.as_str()));
        }

        xml_writer.write_event(Event::Start(element))?;
        // Android resource convention: quote the value so surrounding
        // whitespace survives, and escape bare apostrophes.
        let value = format!("\"{}\"", record.text.replace('\'', "\\'"));
        xml_writer.write_event(Event::Text(BytesText::new(&value)))?;
        xml_writer.write_event(Event::End(BytesEnd::new("string")))?;
        xml_writer.write_event(Event::Text(BytesText::new("\n")))?;
    }

    xml_writer.write_event(Event::End(BytesEnd::new("resources")))?;
    xml_writer.write_event(Event::Text(BytesText::new("\n")))?;

    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Reads the `hash` attribute back off the root `<resources>` element.
pub fn extract_hash(content: &str) -> Option<String> {
    let mut reader = Reader::from_str(content);
    loop {
        match reader.read_event() {
            Ok(Event::Start(ref element)) if element.name().as_ref() == b"resources" => {
                return element
                    .attributes()
                    .flatten()
                    .find(|attribute| attribute.key.as_ref() == b"hash")
                    .and_then(|attribute| attribute.unescape_value().ok())
                    .map(|value| value.into_owned());
            }
            Ok(Event::Eof) => return None,
            Ok(_) => {}
            Err(_) => return None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::hash_records;
    use crate::types::ReconciledRecord;
    use chrono::{TimeZone, Utc};

    fn record(code: &str, text: &str) -> ReconciledRecord {
        ReconciledRecord {
            id: 1,
            section: "General".to_string(),
            code: code.to_string(),
            text: text.to_string(),
            default_text: text.to_string(),
            notes: None,
            context: None,
            language: "fr".to_string(),
        }
    }

    fn report<'a>(records: &'a [ReconciledRecord], hash: &'a str) -> RenderReport<'a> {
        RenderReport {
            records,
            culture: "fr",
            language_name: Some("French"),
            applications: &[],
            sections: &[],
            note: "Translation and English defaults",
            hash,
            generated: Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_render_document_shape() {
        let records = vec![record("Greeting", "Bonjour")];
        let xml = render(&report(&records, "deadbeef")).unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
        assert!(xml.contains("language=\"fr\""));
        assert!(xml.contains("utcdategenerated=\"2026-08-07T12:00:00+00:00\""));
        assert!(xml.contains("hash=\"deadbeef\""));
        assert!(xml.contains(
            "<string name=\"Greeting\" section=\"General\">&quot;Bonjour&quot;</string>"
        ));
        assert!(xml.trim_end().ends_with("</resources>"));
    }

    #[test]
    fn test_render_escapes_apostrophes_and_markup() {
        let records = vec![record("Warning", "Don't use <b> & co")];
        let xml = render(&report(&records, "deadbeef")).unwrap();

        assert!(xml.contains("Don\\&apos;t"));
        assert!(xml.contains("&lt;b&gt;"));
        assert!(xml.contains("&amp;"));
    }

    #[test]
    fn test_render_includes_comment_attribute() {
        let mut with_notes = record("Greeting", "Bonjour");
        with_notes.notes = Some("Landing page".to_string());
        let records = vec![with_notes];

        let xml = render(&report(&records, "deadbeef")).unwrap();
        assert!(xml.contains("comment=\"Landing page\""));
    }

    #[test]
    fn test_extract_hash_round_trip() {
        let records = vec![record("Greeting", "Bonjour")];
        let digest = hash_records(&records);
        let xml = render(&report(&records, &digest)).unwrap();
        assert_eq!(extract_hash(&xml).as_deref(), Some(digest.as_str()));
    }

    #[test]
    fn test_extract_hash_missing() {
        assert!(extract_hash("<resources></resources>").is_none());
        assert!(extract_hash("not xml at all").is_none());
    }
}
