//! Plain-text extraction from Office Open XML word-processing documents.
//!
//! A DOCX file is a ZIP container; the body lives in `word/document.xml`.
//! The XML is streamed with quick-xml and only run text is kept: `<w:t>`
//! content, `<w:tab/>` as a tab, `<w:br/>`/`<w:cr/>` as a newline, and a
//! newline at the end of every `<w:p>` paragraph. Styling and properties
//! are discarded.

use std::io::{Cursor, Read};

use quick_xml::Reader;
use quick_xml::events::Event;
use zip::result::ZipError;

use crate::DecodeError;

/// Path of the main document part inside the container.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Extract the paragraph text of a DOCX file, in document order.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String, DecodeError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| match e {
            ZipError::FileNotFound => DecodeError::MissingPart(DOCUMENT_PART),
            other => DecodeError::Zip(other),
        })?
        .read_to_string(&mut xml)?;

    document_xml_to_text(&xml)
}

/// Collect run text from a `document.xml` body.
pub(crate) fn document_xml_to_text(xml: &str) -> Result<String, DecodeError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut text = String::new();
    // `<w:tab/>` also appears in paragraph properties as a tab stop; only
    // the one inside a run is content.
    let mut in_run = false;
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"r" => in_run = true,
                b"t" => in_text = true,
                _ => {}
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"r" => in_run = false,
                b"t" => in_text = false,
                b"p" => text.push('\n'),
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"tab" if in_run => text.push('\t'),
                b"br" | b"cr" if in_run => text.push('\n'),
                b"p" => text.push('\n'),
                _ => {}
            },
            Event::Text(e) if in_text => {
                let unescaped = e.unescape().map_err(quick_xml::Error::from)?;
                text.push_str(&unescaped);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}
