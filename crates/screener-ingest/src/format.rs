use std::path::Path;

use screener_core::DocumentFormat;
use screener_core::document::{
    DOCX_MEDIA_TYPE, LEGACY_WORD_MEDIA_TYPE, PDF_MEDIA_TYPE, TEXT_MEDIA_TYPE,
};

/// Media types that say nothing about the content; dispatch falls back to
/// the file extension when one of these (or nothing) is declared.
const GENERIC_MEDIA_TYPES: &[&str] = &[
    "application/octet-stream",
    "binary/octet-stream",
    "application/zip",
];

/// Outcome of format detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    Supported(DocumentFormat),
    /// Legacy binary Word document (`.doc`). No decoder exists for it.
    LegacyWord,
    /// Neither the media type nor the extension names a known format.
    /// Carries whatever was inspected, for the error message.
    Unrecognized(String),
}

/// Decide the document format from the declared media type, falling back to
/// the file extension when the media type is absent or generic.
pub fn detect_format(media_type: Option<&str>, file_name: &str) -> Detection {
    let declared = media_type.map(normalize_media_type).filter(|m| !is_generic(m));

    match declared {
        Some(media_type) => from_media_type(&media_type),
        None => from_extension(file_name),
    }
}

/// Lowercase, drop parameters (`; charset=utf-8`) and surrounding whitespace.
fn normalize_media_type(media_type: &str) -> String {
    media_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase()
}

fn is_generic(media_type: &str) -> bool {
    media_type.is_empty() || GENERIC_MEDIA_TYPES.contains(&media_type)
}

fn from_media_type(media_type: &str) -> Detection {
    match media_type {
        PDF_MEDIA_TYPE => Detection::Supported(DocumentFormat::Pdf),
        DOCX_MEDIA_TYPE => Detection::Supported(DocumentFormat::Docx),
        TEXT_MEDIA_TYPE => Detection::Supported(DocumentFormat::PlainText),
        LEGACY_WORD_MEDIA_TYPE => Detection::LegacyWord,
        other => Detection::Unrecognized(format!("media type {other}")),
    }
}

fn from_extension(file_name: &str) -> Detection {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "pdf" => Detection::Supported(DocumentFormat::Pdf),
        "docx" => Detection::Supported(DocumentFormat::Docx),
        "txt" => Detection::Supported(DocumentFormat::PlainText),
        "doc" => Detection::LegacyWord,
        "" => Detection::Unrecognized("no media type or file extension".to_string()),
        other => Detection::Unrecognized(format!("extension .{other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_type_decides_when_specific() {
        assert_eq!(
            detect_format(Some("application/pdf"), "resume.txt"),
            Detection::Supported(DocumentFormat::Pdf)
        );
        assert_eq!(
            detect_format(Some("Text/Plain; charset=utf-8"), "resume"),
            Detection::Supported(DocumentFormat::PlainText)
        );
        assert_eq!(
            detect_format(Some(DOCX_MEDIA_TYPE), "x.bin"),
            Detection::Supported(DocumentFormat::Docx)
        );
    }

    #[test]
    fn generic_media_type_falls_back_to_extension() {
        for media_type in [None, Some(""), Some("application/octet-stream")] {
            assert_eq!(
                detect_format(media_type, "CV.DOCX"),
                Detection::Supported(DocumentFormat::Docx)
            );
        }
    }

    #[test]
    fn legacy_word_by_media_type_or_extension() {
        assert_eq!(
            detect_format(Some("application/msword"), "cv.docx"),
            Detection::LegacyWord
        );
        assert_eq!(detect_format(None, "cv.doc"), Detection::LegacyWord);
    }

    #[test]
    fn unknown_specific_media_type_is_rejected() {
        assert!(matches!(
            detect_format(Some("image/png"), "cv.pdf"),
            Detection::Unrecognized(_)
        ));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        assert_eq!(
            detect_format(None, "cv.odt"),
            Detection::Unrecognized("extension .odt".to_string())
        );
        assert!(matches!(detect_format(None, "README"), Detection::Unrecognized(_)));
    }
}
