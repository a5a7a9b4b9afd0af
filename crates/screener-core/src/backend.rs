use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    OpenError(String),
    #[error("failed to extract text: {0}")]
    ExtractionError(String),
}

/// Trait for PDF text extraction backends.
///
/// Implementors decode the raw bytes of a PDF and return the text of each
/// page in physical page order. Joining pages and everything downstream
/// (segmentation, entity extraction) lives in `screener-ingest` and
/// `screener-parsing`.
///
/// A backend must be atomic: if any page cannot be read it returns an error
/// rather than the pages decoded so far.
pub trait PdfBackend: Send + Sync {
    /// Extract the text of every page, one string per page.
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>, BackendError>;
}
