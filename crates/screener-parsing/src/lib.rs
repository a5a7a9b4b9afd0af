pub mod config;
pub mod education;
pub mod entities;
pub mod experience;
pub mod extractor;
pub mod section;
pub mod skills;
pub mod text_processing;

pub use config::{ListOverride, ParsingConfig, ParsingConfigBuilder};
pub use entities::Entities;
pub use extractor::ResumeExtractor;
pub use section::{SectionKind, SectionSegmenter, SectionState, SectionTag, SegmentedText};
// Re-export domain types from core (canonical definitions live there)
pub use screener_core::{EducationEntry, ExperienceEntry, ParsedProfile};

/// Parse already-extracted resume text into a [`ParsedProfile`].
///
/// Pipeline:
/// 1. Split into lines and tag Skills / Experience / Education sections
/// 2. Find name, email, phone and location anywhere in the text
/// 3. Match the skill vocabulary in the skills section and the whole text
/// 4. Build experience entries from the experience section
/// 5. Build education entries from the education section
pub fn parse_resume_text(text: &str) -> ParsedProfile {
    ResumeExtractor::new().parse_text(text)
}
