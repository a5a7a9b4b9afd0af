use screener_core::{EducationEntry, ExperienceEntry, ParsedProfile};

use crate::config::ParsingConfig;
use crate::entities::{self, Entities};
use crate::section::{self, SectionKind, SegmentedText};
use crate::{education, experience, skills};

/// A configurable resume parsing pipeline.
///
/// Holds a [`ParsingConfig`] and exposes each pipeline step as a method.
/// The default constructor uses built-in defaults; use [`ResumeExtractor::with_config`]
/// to supply custom vocabularies and patterns.
pub struct ResumeExtractor {
    config: ParsingConfig,
}

impl Default for ResumeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeExtractor {
    /// Create an extractor with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParsingConfig::default(),
        }
    }

    /// Create an extractor with a custom configuration.
    pub fn with_config(config: ParsingConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the current config.
    pub fn config(&self) -> &ParsingConfig {
        &self.config
    }

    /// Split text into lines tagged by section (step 1).
    pub fn segment<'a>(&self, text: &'a str) -> SegmentedText<'a> {
        section::segment_with_config(text, &self.config)
    }

    /// Find contact fields in the full text (step 2).
    pub fn extract_entities(&self, text: &str) -> Entities {
        entities::extract_entities_with_config(text, &self.config)
    }

    /// Match the skill vocabulary (step 3).
    pub fn match_skills(&self, skill_lines: &[&str], text: &str) -> Vec<String> {
        skills::match_skills_with_config(skill_lines, text, &self.config)
    }

    /// Build experience entries from experience-section lines (step 4).
    pub fn parse_experience(&self, lines: &[&str]) -> Vec<ExperienceEntry> {
        experience::parse_experience_with_config(lines, &self.config)
    }

    /// Build education entries from education-section lines (step 5).
    pub fn parse_education(&self, lines: &[&str]) -> Vec<EducationEntry> {
        education::parse_education_with_config(lines, &self.config)
    }

    /// Run the full pipeline on already-extracted text.
    ///
    /// Never fails: anything the heuristics miss is left empty.
    pub fn parse_text(&self, text: &str) -> ParsedProfile {
        let segmented = self.segment(text);
        let Entities {
            name,
            email,
            phone,
            location,
        } = self.extract_entities(text);

        let skills = self.match_skills(&segmented.section_lines(SectionKind::Skills), text);
        let experience = self.parse_experience(&segmented.section_lines(SectionKind::Experience));
        let education = self.parse_education(&segmented.section_lines(SectionKind::Education));

        tracing::debug!(
            lines = segmented.len(),
            skills = skills.len(),
            experience = experience.len(),
            education = education.len(),
            "parsed resume text"
        );

        ParsedProfile {
            name,
            email,
            phone,
            location,
            skills,
            experience,
            education,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Jane Doe\njane.doe@example.com\nSkills\nJavaScript, React, Docker\nExperience\nSoftware Engineer at Acme Corp - 2019-2022\nEducation\nBachelor of Science from MIT - 2015";

    #[test]
    fn test_extractor_full_pipeline_from_text() {
        let profile = ResumeExtractor::new().parse_text(SAMPLE);

        assert_eq!(profile.name, "Jane Doe");
        assert_eq!(profile.email, "jane.doe@example.com");
        assert_eq!(profile.phone, "");
        assert_eq!(profile.location, "");
        for skill in ["JavaScript", "React", "Docker"] {
            assert!(profile.skills.contains(&skill.to_string()), "missing {skill}");
        }
        assert_eq!(
            profile.experience,
            vec![ExperienceEntry {
                title: "Software Engineer".into(),
                company: "Acme Corp".into(),
                duration: "2019-2022".into(),
            }]
        );
        assert_eq!(profile.education.len(), 1);
        assert!(profile.education[0].degree.starts_with("Bachelor of Science"));
        assert_eq!(profile.education[0].institution, "MIT");
        assert_eq!(profile.education[0].year, "2015");
    }

    #[test]
    fn test_extractor_empty_text() {
        let profile = ResumeExtractor::new().parse_text("");
        assert_eq!(profile, ParsedProfile::default());
    }

    #[test]
    fn test_extractor_section_scoping() {
        // A title-like line outside the experience section is not an entry.
        let text = "Data Engineer\nEducation\nBachelor of Arts\nSoftware Developer";
        let profile = ResumeExtractor::new().parse_text(text);
        assert!(profile.experience.is_empty());
        assert_eq!(profile.education.len(), 1);
    }

    #[test]
    fn test_extractor_with_custom_config() {
        let config = crate::ParsingConfigBuilder::new()
            .add_skill("Rust".to_string())
            .build()
            .unwrap();
        let extractor = ResumeExtractor::with_config(config);
        let profile = extractor.parse_text("Skills\nRust, SQL");
        assert_eq!(profile.skills, vec!["SQL", "Rust"]);
    }
}
