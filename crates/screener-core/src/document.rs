use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const PDF_MEDIA_TYPE: &str = "application/pdf";
pub const DOCX_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const TEXT_MEDIA_TYPE: &str = "text/plain";
/// Legacy binary Word format. Recognized only so it can be rejected explicitly.
pub const LEGACY_WORD_MEDIA_TYPE: &str = "application/msword";

/// Document formats the text extractor can decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentFormat {
    pub fn media_type(&self) -> &'static str {
        match self {
            Self::Pdf => PDF_MEDIA_TYPE,
            Self::Docx => DOCX_MEDIA_TYPE,
            Self::PlainText => TEXT_MEDIA_TYPE,
        }
    }

    /// Canonical file extension, including the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => ".pdf",
            Self::Docx => ".docx",
            Self::PlainText => ".txt",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF Document",
            Self::Docx => "Word Document",
            Self::PlainText => "Text File",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pdf => "PDF",
            Self::Docx => "DOCX",
            Self::PlainText => "plain text",
        };
        f.write_str(name)
    }
}

/// An uploaded document as handed over by the caller.
///
/// The extractor only borrows it; nothing in the pipeline mutates the bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    pub bytes: Vec<u8>,
    /// Declared media type, if the upload carried one.
    pub media_type: Option<String>,
    /// Original file name, used for extension sniffing and error messages.
    pub file_name: String,
}

impl RawDocument {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            media_type: None,
            file_name: file_name.into(),
        }
    }

    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    /// Read a document from disk. The media type is left unset so dispatch
    /// falls back to the file extension.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::new(file_name, bytes))
    }

    /// Size of the content in bytes.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}
