//! DOCX text extraction: paragraphs of `word/document.xml`, one per line.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;
use zip::ZipArchive;

use crate::documents::DocumentError;

const DOCUMENT_PART: &str = "word/document.xml";

pub fn extract_text(bytes: &[u8]) -> Result<String, DocumentError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| DocumentError::Malformed(format!("not a DOCX archive: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| DocumentError::Malformed(format!("{DOCUMENT_PART}: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| DocumentError::Malformed(format!("{DOCUMENT_PART}: {e}")))?;

    let text = paragraphs_text(&xml)?;
    debug!("Extracted {} chars from DOCX", text.len());
    Ok(text)
}

/// Concatenates `<w:t>` runs; paragraph ends and `<w:br/>` become newlines,
/// `<w:tab/>` a tab.
fn paragraphs_text(xml: &str) -> Result<String, DocumentError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_run_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_run_text = true,
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_run_text = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:tab" => text.push('\t'),
                b"w:br" | b"w:p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Text(t)) if in_run_text => {
                let unescaped = t
                    .unescape()
                    .map_err(|e| DocumentError::Malformed(format!("{DOCUMENT_PART}: {e}")))?;
                text.push_str(&unescaped);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(DocumentError::Malformed(format!(
                    "{DOCUMENT_PART} at byte {}: {e}",
                    reader.buffer_position()
                )))
            }
        }
    }

    Ok(text.trim_end_matches('\n').to_string())
}
