pub mod export;
pub mod types;

pub use export::{ExportError, export_reports, render};
pub use types::{CandidateReport, ExportFormat};
