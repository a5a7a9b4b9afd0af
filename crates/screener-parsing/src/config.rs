use regex::Regex;

use screener_core::config_file::ParsingSection;

use crate::section::SectionKind;
use crate::{education, entities, experience, section, skills};

/// Controls how a list of patterns/values is overridden from its defaults.
#[derive(Debug, Clone, Default)]
pub enum ListOverride<T> {
    /// Use the built-in defaults.
    #[default]
    Default,
    /// Completely replace the defaults with these values.
    Replace(Vec<T>),
    /// Append these values to the defaults.
    Extend(Vec<T>),
}

impl<T: Clone> ListOverride<T> {
    /// Resolve this override against the given defaults.
    pub fn resolve(&self, defaults: &[T]) -> Vec<T> {
        match self {
            ListOverride::Default => defaults.to_vec(),
            ListOverride::Replace(v) => v.clone(),
            ListOverride::Extend(v) => {
                let mut result = defaults.to_vec();
                result.extend(v.iter().cloned());
                result
            }
        }
    }
}

impl ListOverride<String> {
    /// Resolve against a table of static defaults.
    pub fn resolve_static(&self, defaults: &[&str]) -> Vec<String> {
        let owned: Vec<String> = defaults.iter().map(|s| s.to_string()).collect();
        self.resolve(&owned)
    }

    fn push(&mut self, value: String) {
        match self {
            ListOverride::Extend(v) | ListOverride::Replace(v) => v.push(value),
            ListOverride::Default => *self = ListOverride::Extend(vec![value]),
        }
    }
}

/// Keyword lists for one section kind.
#[derive(Debug, Clone, Default)]
pub(crate) struct SectionKeywordOverrides {
    pub(crate) headers: ListOverride<String>,
    pub(crate) terminators: ListOverride<String>,
}

/// Configuration for the resume parsing pipeline.
///
/// Regex fields are `Option<Regex>`, `None` meaning "use the built-in default".
/// Use [`ParsingConfigBuilder`] to construct with string patterns.
#[derive(Debug, Clone)]
pub struct ParsingConfig {
    // ── section.rs ──
    pub(crate) skills_section: SectionKeywordOverrides,
    pub(crate) experience_section: SectionKeywordOverrides,
    pub(crate) education_section: SectionKeywordOverrides,

    // ── entities.rs ──
    pub(crate) email_re: Option<Regex>,
    pub(crate) phone_re: Option<Regex>,
    /// How many leading non-empty lines are searched for the name (default: 5).
    pub(crate) name_scan_lines: usize,
    pub(crate) location_keywords: ListOverride<String>,

    // ── skills.rs ──
    pub(crate) skills: ListOverride<String>,

    // ── experience.rs ──
    pub(crate) role_nouns: ListOverride<String>,
    /// Compiled from `role_nouns` when they differ from the defaults.
    pub(crate) title_re: Option<Regex>,

    // ── education.rs ──
    pub(crate) degree_keywords: ListOverride<String>,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            skills_section: SectionKeywordOverrides::default(),
            experience_section: SectionKeywordOverrides::default(),
            education_section: SectionKeywordOverrides::default(),
            email_re: None,
            phone_re: None,
            name_scan_lines: 5,
            location_keywords: ListOverride::Default,
            skills: ListOverride::Default,
            role_nouns: ListOverride::Default,
            title_re: None,
            degree_keywords: ListOverride::Default,
        }
    }
}

impl ParsingConfig {
    pub(crate) fn section_overrides(&self, kind: SectionKind) -> &SectionKeywordOverrides {
        match kind {
            SectionKind::Skills => &self.skills_section,
            SectionKind::Experience => &self.experience_section,
            SectionKind::Education => &self.education_section,
        }
    }

    /// Header keywords for `kind`, after overrides.
    pub fn section_headers(&self, kind: SectionKind) -> Vec<String> {
        self.section_overrides(kind)
            .headers
            .resolve_static(section::default_headers(kind))
    }

    /// Terminator keywords for `kind`, after overrides.
    pub fn section_terminators(&self, kind: SectionKind) -> Vec<String> {
        self.section_overrides(kind)
            .terminators
            .resolve_static(section::default_terminators(kind))
    }

    /// The skill vocabulary, after overrides.
    pub fn skill_vocabulary(&self) -> Vec<String> {
        self.skills.resolve_static(skills::DEFAULT_SKILLS)
    }

    pub fn role_nouns(&self) -> Vec<String> {
        self.role_nouns.resolve_static(experience::DEFAULT_ROLE_NOUNS)
    }

    pub fn degree_keywords(&self) -> Vec<String> {
        self.degree_keywords
            .resolve_static(education::DEFAULT_DEGREE_KEYWORDS)
    }

    pub fn location_keywords(&self) -> Vec<String> {
        self.location_keywords
            .resolve_static(entities::DEFAULT_LOCATION_KEYWORDS)
    }

    pub fn name_scan_lines(&self) -> usize {
        self.name_scan_lines
    }
}

/// Builder for [`ParsingConfig`].
///
/// Accepts string patterns that are compiled to `Regex` in [`build()`](Self::build).
/// Fails fast with `regex::Error` if any pattern is invalid.
#[derive(Debug, Clone, Default)]
pub struct ParsingConfigBuilder {
    skills_section: SectionKeywordOverrides,
    experience_section: SectionKeywordOverrides,
    education_section: SectionKeywordOverrides,
    email_re: Option<String>,
    phone_re: Option<String>,
    name_scan_lines: Option<usize>,
    location_keywords: ListOverride<String>,
    skills: ListOverride<String>,
    role_nouns: ListOverride<String>,
    degree_keywords: ListOverride<String>,
}

impl ParsingConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the `[parsing]` table of a config file.
    pub fn from_config_file(section: &ParsingSection) -> Self {
        let mut builder = Self::new();
        if let Some(skills) = &section.skills {
            builder = builder.set_skills(skills.clone());
        }
        for skill in section.extra_skills.iter().flatten() {
            builder = builder.add_skill(skill.clone());
        }
        for noun in section.extra_role_nouns.iter().flatten() {
            builder = builder.add_role_noun(noun.clone());
        }
        for keyword in section.extra_degree_keywords.iter().flatten() {
            builder = builder.add_degree_keyword(keyword.clone());
        }
        builder
    }

    fn section_mut(&mut self, kind: SectionKind) -> &mut SectionKeywordOverrides {
        match kind {
            SectionKind::Skills => &mut self.skills_section,
            SectionKind::Experience => &mut self.experience_section,
            SectionKind::Education => &mut self.education_section,
        }
    }

    // ── Section keywords ──

    pub fn set_section_headers(mut self, kind: SectionKind, headers: Vec<String>) -> Self {
        self.section_mut(kind).headers = ListOverride::Replace(headers);
        self
    }

    pub fn add_section_header(mut self, kind: SectionKind, header: String) -> Self {
        self.section_mut(kind).headers.push(header);
        self
    }

    pub fn set_section_terminators(mut self, kind: SectionKind, words: Vec<String>) -> Self {
        self.section_mut(kind).terminators = ListOverride::Replace(words);
        self
    }

    pub fn add_section_terminator(mut self, kind: SectionKind, word: String) -> Self {
        self.section_mut(kind).terminators.push(word);
        self
    }

    // ── Entities ──

    pub fn email_regex(mut self, pattern: &str) -> Self {
        self.email_re = Some(pattern.to_string());
        self
    }

    pub fn phone_regex(mut self, pattern: &str) -> Self {
        self.phone_re = Some(pattern.to_string());
        self
    }

    pub fn name_scan_lines(mut self, n: usize) -> Self {
        self.name_scan_lines = Some(n);
        self
    }

    pub fn add_location_keyword(mut self, keyword: String) -> Self {
        self.location_keywords.push(keyword);
        self
    }

    // ── Vocabularies ──

    pub fn set_skills(mut self, skills: Vec<String>) -> Self {
        self.skills = ListOverride::Replace(skills);
        self
    }

    pub fn add_skill(mut self, skill: String) -> Self {
        self.skills.push(skill);
        self
    }

    pub fn set_role_nouns(mut self, nouns: Vec<String>) -> Self {
        self.role_nouns = ListOverride::Replace(nouns);
        self
    }

    pub fn add_role_noun(mut self, noun: String) -> Self {
        self.role_nouns.push(noun);
        self
    }

    pub fn add_degree_keyword(mut self, keyword: String) -> Self {
        self.degree_keywords.push(keyword);
        self
    }

    /// Compile all string patterns into regexes and produce a [`ParsingConfig`].
    pub fn build(self) -> Result<ParsingConfig, regex::Error> {
        let compile = |opt: Option<String>| -> Result<Option<Regex>, regex::Error> {
            opt.map(|p| Regex::new(&p)).transpose()
        };

        let title_re = match &self.role_nouns {
            ListOverride::Default => None,
            custom => Some(experience::build_title_regex(
                &custom.resolve_static(experience::DEFAULT_ROLE_NOUNS),
            )?),
        };

        Ok(ParsingConfig {
            skills_section: self.skills_section,
            experience_section: self.experience_section,
            education_section: self.education_section,
            email_re: compile(self.email_re)?,
            phone_re: compile(self.phone_re)?,
            name_scan_lines: self.name_scan_lines.unwrap_or(5),
            location_keywords: self.location_keywords,
            skills: self.skills,
            role_nouns: self.role_nouns,
            title_re,
            degree_keywords: self.degree_keywords,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ParsingConfig::default();
        assert_eq!(config.name_scan_lines(), 5);
        assert_eq!(config.skill_vocabulary().len(), 22);
        assert!(config.title_re.is_none());
    }

    #[test]
    fn test_builder_basic() {
        let config = ParsingConfigBuilder::new()
            .name_scan_lines(3)
            .add_skill("Rust".to_string())
            .build()
            .unwrap();
        assert_eq!(config.name_scan_lines(), 3);
        let vocab = config.skill_vocabulary();
        assert_eq!(vocab.len(), 23);
        assert_eq!(vocab.last().map(String::as_str), Some("Rust"));
    }

    #[test]
    fn test_builder_role_nouns_compile_title_regex() {
        let config = ParsingConfigBuilder::new()
            .add_role_noun("Architect".to_string())
            .build()
            .unwrap();
        let re = config.title_re.as_ref().unwrap();
        assert!(re.is_match("Solutions Architect"));
        assert!(re.is_match("Software Engineer"));
    }

    #[test]
    fn test_builder_invalid_regex() {
        let result = ParsingConfigBuilder::new().email_regex(r"[invalid").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_from_config_file() {
        let section = ParsingSection {
            skills: Some(vec!["Go".to_string()]),
            extra_skills: Some(vec!["Rust".to_string()]),
            extra_role_nouns: None,
            extra_degree_keywords: Some(vec!["MBA".to_string()]),
        };
        let config = ParsingConfigBuilder::from_config_file(&section)
            .build()
            .unwrap();
        assert_eq!(
            config.skill_vocabulary(),
            vec!["Go".to_string(), "Rust".to_string()]
        );
        assert!(config.degree_keywords().contains(&"MBA".to_string()));
        assert!(config.degree_keywords().contains(&"PhD".to_string()));
    }

    #[test]
    fn test_section_header_override() {
        let config = ParsingConfigBuilder::new()
            .set_section_headers(SectionKind::Skills, vec!["Toolbox".to_string()])
            .build()
            .unwrap();
        assert_eq!(
            config.section_headers(SectionKind::Skills),
            vec!["Toolbox".to_string()]
        );
        assert!(
            config
                .section_headers(SectionKind::Education)
                .contains(&"Education".to_string())
        );
    }

    #[test]
    fn test_list_override_resolve() {
        let defaults = vec!["a".to_string(), "b".to_string()];

        let d: ListOverride<String> = ListOverride::Default;
        assert_eq!(d.resolve(&defaults), defaults);

        let r: ListOverride<String> = ListOverride::Replace(vec!["x".to_string()]);
        assert_eq!(r.resolve(&defaults), vec!["x".to_string()]);

        let e: ListOverride<String> = ListOverride::Extend(vec!["c".to_string()]);
        assert_eq!(
            e.resolve(&defaults),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }
}
