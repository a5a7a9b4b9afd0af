use serde::{Deserialize, Serialize};

pub mod backend;
pub mod config_file;
pub mod document;

// Re-export for convenience
pub use backend::{BackendError, PdfBackend};
pub use document::{DocumentFormat, RawDocument};

/// One position held by the candidate, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    /// Empty when no company line was recognized.
    pub company: String,
    /// Free text, e.g. "2019-2022" or "Jan 2020 - Present".
    pub duration: String,
}

/// One qualification, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub year: String,
}

/// Structured profile produced from a resume.
///
/// Every field is always present. A field the heuristics could not find is
/// left empty; absence is never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Canonical vocabulary names, without duplicates.
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
}

impl ParsedProfile {
    /// True when nothing at all was recognized.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.phone.is_empty()
            && self.location.is_empty()
            && self.skills.is_empty()
            && self.experience.is_empty()
            && self.education.is_empty()
    }
}
