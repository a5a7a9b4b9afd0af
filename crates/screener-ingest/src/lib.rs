use thiserror::Error;

pub mod docx;
pub mod format;

pub use format::{Detection, detect_format};
// Re-export domain types for convenience
pub use screener_core::{BackendError, DocumentFormat, ParsedProfile, PdfBackend, RawDocument};

use screener_parsing::ResumeExtractor;
use screener_parsing::text_processing::expand_ligatures;

/// Formats accepted for upload, in the order they are presented to users.
pub const SUPPORTED_FORMATS: [DocumentFormat; 3] = [
    DocumentFormat::Pdf,
    DocumentFormat::Docx,
    DocumentFormat::PlainText,
];

/// Caller-visible extraction failures.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The format is unknown, explicitly excluded (legacy `.doc`), or has no
    /// decoder compiled in.
    #[error("unsupported format for {file_name}: {reason}")]
    UnsupportedFormat { file_name: String, reason: String },
    /// The format was recognized but the content could not be decoded.
    #[error("failed to decode {file_name} as {format}: {source}")]
    DecodeFailure {
        file_name: String,
        format: DocumentFormat,
        #[source]
        source: DecodeError,
    },
}

impl IngestError {
    pub fn file_name(&self) -> &str {
        match self {
            Self::UnsupportedFormat { file_name, .. } | Self::DecodeFailure { file_name, .. } => {
                file_name
            }
        }
    }
}

/// Underlying cause of a [`IngestError::DecodeFailure`].
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error(transparent)]
    Pdf(#[from] BackendError),
    #[error("invalid DOCX container: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("DOCX container has no {0}")]
    MissingPart(&'static str),
    #[error("malformed DOCX XML: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("failed to read document part: {0}")]
    Io(#[from] std::io::Error),
    #[error("text is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Format-dispatching text extractor.
///
/// Holds the PDF backend; DOCX and plain text are decoded in-crate. Each
/// call is independent and returns either the full text or an error, never
/// partial text.
pub struct TextExtractor {
    pdf_backend: Option<Box<dyn PdfBackend>>,
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor {
    /// Extractor with the default PDF backend, when compiled in.
    pub fn new() -> Self {
        Self {
            pdf_backend: default_pdf_backend(),
        }
    }

    /// Extractor using `backend` for PDF input.
    pub fn with_pdf_backend(backend: impl PdfBackend + 'static) -> Self {
        Self {
            pdf_backend: Some(Box::new(backend)),
        }
    }

    /// Decode a document into plain text.
    pub fn extract(&self, doc: &RawDocument) -> Result<String, IngestError> {
        let format = match detect_format(doc.media_type.as_deref(), &doc.file_name) {
            Detection::Supported(format) => format,
            Detection::LegacyWord => {
                return Err(unsupported(
                    doc,
                    "legacy Word (.doc) documents are not supported; convert to DOCX or PDF",
                ));
            }
            Detection::Unrecognized(what) => {
                return Err(unsupported(doc, format!("unrecognized {what}")));
            }
        };

        tracing::debug!(file = %doc.file_name, %format, size = doc.size(), "extracting text");

        let decoded = match format {
            DocumentFormat::Pdf => {
                let Some(backend) = self.pdf_backend.as_deref() else {
                    return Err(unsupported(
                        doc,
                        "PDF support not compiled in (enable the `pdf` feature of screener-ingest)",
                    ));
                };
                decode_pdf(backend, &doc.bytes)
            }
            DocumentFormat::Docx => docx::extract_docx_text(&doc.bytes),
            DocumentFormat::PlainText => decode_plain_text(&doc.bytes),
        };

        decoded.map_err(|source| IngestError::DecodeFailure {
            file_name: doc.file_name.clone(),
            format,
            source,
        })
    }
}

fn unsupported(doc: &RawDocument, reason: impl Into<String>) -> IngestError {
    IngestError::UnsupportedFormat {
        file_name: doc.file_name.clone(),
        reason: reason.into(),
    }
}

#[cfg(feature = "pdf")]
fn default_pdf_backend() -> Option<Box<dyn PdfBackend>> {
    Some(Box::new(screener_pdf_mupdf::MupdfBackend::new()))
}

#[cfg(not(feature = "pdf"))]
fn default_pdf_backend() -> Option<Box<dyn PdfBackend>> {
    None
}

/// Pages are joined with a newline in the order the backend returns them.
fn decode_pdf(backend: &dyn PdfBackend, bytes: &[u8]) -> Result<String, DecodeError> {
    let pages = backend.extract_pages(bytes)?;
    tracing::debug!(pages = pages.len(), "decoded PDF");
    Ok(expand_ligatures(&pages.join("\n")))
}

/// Verbatim: no trimming, no newline or BOM normalization.
fn decode_plain_text(bytes: &[u8]) -> Result<String, DecodeError> {
    Ok(String::from_utf8(bytes.to_vec())?)
}

/// Extract the text of a document with the default backends.
pub fn extract_text(doc: &RawDocument) -> Result<String, IngestError> {
    TextExtractor::new().extract(doc)
}

/// Extract and parse a resume document into a [`ParsedProfile`].
///
/// Only the extraction step can fail; parsing always yields a profile.
pub fn parse_document(doc: &RawDocument) -> Result<ParsedProfile, IngestError> {
    parse_document_with(doc, &TextExtractor::new(), &ResumeExtractor::new())
}

/// [`parse_document`] with an explicit extractor and parser configuration.
pub fn parse_document_with(
    doc: &RawDocument,
    extractor: &TextExtractor,
    parser: &ResumeExtractor,
) -> Result<ParsedProfile, IngestError> {
    let text = extractor.extract(doc)?;
    Ok(parser.parse_text(&text))
}
