use crate::config::ParsingConfig;
use crate::text_processing::{contains_any_lowercase, lowercase_all, split_lines};

/// Topical sections the segmenter recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Skills,
    Experience,
    Education,
}

impl SectionKind {
    /// Header precedence: when a line carries keywords of several kinds,
    /// the first kind in this order wins.
    pub const ALL: [SectionKind; 3] = [Self::Skills, Self::Experience, Self::Education];
}

const SKILLS_HEADERS: &[&str] = &[
    "Skills",
    "Technical Skills",
    "Technologies",
    "Programming Languages",
];
const EXPERIENCE_HEADERS: &[&str] = &[
    "Experience",
    "Work Experience",
    "Employment",
    "Professional Experience",
];
const EDUCATION_HEADERS: &[&str] = &["Education", "Academic Background", "Qualifications"];

// Words of other sections that close a section without opening a new one.
const SKILLS_TERMINATORS: &[&str] = &["Work"];
const EXPERIENCE_TERMINATORS: &[&str] = &["Projects"];
const EDUCATION_TERMINATORS: &[&str] = &["Projects"];

pub(crate) fn default_headers(kind: SectionKind) -> &'static [&'static str] {
    match kind {
        SectionKind::Skills => SKILLS_HEADERS,
        SectionKind::Experience => EXPERIENCE_HEADERS,
        SectionKind::Education => EDUCATION_HEADERS,
    }
}

pub(crate) fn default_terminators(kind: SectionKind) -> &'static [&'static str] {
    match kind {
        SectionKind::Skills => SKILLS_TERMINATORS,
        SectionKind::Experience => EXPERIENCE_TERMINATORS,
        SectionKind::Education => EDUCATION_TERMINATORS,
    }
}

/// State of the segmenter between lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionState {
    #[default]
    Outside,
    Inside(SectionKind),
}

/// Annotation attached to each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionTag {
    /// The line opened a section. Headers are not content of any section.
    Header(SectionKind),
    /// Content line of a section.
    Section(SectionKind),
    None,
}

impl SectionTag {
    /// The section this line is content of, if any.
    pub fn section(&self) -> Option<SectionKind> {
        match self {
            Self::Section(kind) => Some(*kind),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaggedLine<'a> {
    pub text: &'a str,
    pub tag: SectionTag,
}

/// Lines of a document with their section tags, in document order.
#[derive(Debug, Clone, Default)]
pub struct SegmentedText<'a> {
    pub lines: Vec<TaggedLine<'a>>,
}

impl<'a> SegmentedText<'a> {
    /// Content lines of one section kind, in document order. Several runs of
    /// the same kind are concatenated.
    pub fn section_lines(&self, kind: SectionKind) -> Vec<&'a str> {
        self.lines
            .iter()
            .filter(|l| l.tag.section() == Some(kind))
            .map(|l| l.text)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[derive(Debug, Clone)]
struct KindKeywords {
    kind: SectionKind,
    headers: Vec<String>,
    terminators: Vec<String>,
}

/// Single-pass section state machine.
///
/// Feed lines in order with [`step`](Self::step). A line containing a header
/// keyword of any kind opens that kind. Inside a section, a line containing
/// one of its terminator keywords closes it (the line itself is untagged and
/// opens nothing). Every other line is tagged with the current state.
/// Keyword tests are case-insensitive substring checks.
#[derive(Debug, Clone)]
pub struct SectionSegmenter {
    kinds: Vec<KindKeywords>,
    state: SectionState,
}

impl Default for SectionSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionSegmenter {
    pub fn new() -> Self {
        Self::with_config(&ParsingConfig::default())
    }

    pub fn with_config(config: &ParsingConfig) -> Self {
        let kinds = SectionKind::ALL
            .iter()
            .map(|&kind| KindKeywords {
                kind,
                headers: lowercase_all(&config.section_headers(kind)),
                terminators: lowercase_all(&config.section_terminators(kind)),
            })
            .collect();
        Self {
            kinds,
            state: SectionState::Outside,
        }
    }

    pub fn state(&self) -> SectionState {
        self.state
    }

    /// Advance the machine by one line and return that line's tag.
    pub fn step(&mut self, line: &str) -> SectionTag {
        let lower = line.to_lowercase();

        if let Some(kind) = self
            .kinds
            .iter()
            .find(|k| contains_any_lowercase(&lower, &k.headers))
            .map(|k| k.kind)
        {
            self.state = SectionState::Inside(kind);
            return SectionTag::Header(kind);
        }

        match self.state {
            SectionState::Inside(current) => {
                let closes = self
                    .kinds
                    .iter()
                    .find(|k| k.kind == current)
                    .is_some_and(|k| contains_any_lowercase(&lower, &k.terminators));
                if closes {
                    self.state = SectionState::Outside;
                    SectionTag::None
                } else {
                    SectionTag::Section(current)
                }
            }
            SectionState::Outside => SectionTag::None,
        }
    }
}

/// Split text into lines and tag each with its section.
pub fn segment(text: &str) -> SegmentedText<'_> {
    segment_with_config(text, &ParsingConfig::default())
}

/// Config-aware version of [`segment`].
pub fn segment_with_config<'a>(text: &'a str, config: &ParsingConfig) -> SegmentedText<'a> {
    let mut machine = SectionSegmenter::with_config(config);
    let lines = split_lines(text)
        .into_iter()
        .map(|text| TaggedLine {
            text,
            tag: machine.step(text),
        })
        .collect();
    SegmentedText { lines }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(text: &str) -> Vec<SectionTag> {
        segment(text).lines.iter().map(|l| l.tag).collect()
    }

    #[test]
    fn test_lines_before_any_header_are_untagged() {
        assert_eq!(
            tags("Jane Doe\njane@example.com"),
            vec![SectionTag::None, SectionTag::None]
        );
    }

    #[test]
    fn test_header_line_is_not_content() {
        let text = "Skills\nRust, Go\nEducation\nBachelor of Arts";
        assert_eq!(
            tags(text),
            vec![
                SectionTag::Header(SectionKind::Skills),
                SectionTag::Section(SectionKind::Skills),
                SectionTag::Header(SectionKind::Education),
                SectionTag::Section(SectionKind::Education),
            ]
        );
    }

    #[test]
    fn test_header_match_is_case_insensitive_substring() {
        assert_eq!(
            tags("PROFESSIONAL EXPERIENCE:\nFoo"),
            vec![
                SectionTag::Header(SectionKind::Experience),
                SectionTag::Section(SectionKind::Experience),
            ]
        );
    }

    #[test]
    fn test_skills_header_wins_over_experience() {
        // "Technical Skills & Experience" carries keywords of two kinds.
        assert_eq!(
            tags("Technical Skills & Experience"),
            vec![SectionTag::Header(SectionKind::Skills)]
        );
    }

    #[test]
    fn test_terminator_closes_without_reopening() {
        let mut machine = SectionSegmenter::new();
        assert_eq!(machine.step("Experience"), SectionTag::Header(SectionKind::Experience));
        assert_eq!(
            machine.step("Backend Developer"),
            SectionTag::Section(SectionKind::Experience)
        );
        assert_eq!(machine.step("Side Projects"), SectionTag::None);
        assert_eq!(machine.state(), SectionState::Outside);
        // Stays closed until the next header.
        assert_eq!(machine.step("Built a compiler"), SectionTag::None);
    }

    #[test]
    fn test_work_closes_skills() {
        let text = "Skills\nDocker\nWork history below\nAcme";
        assert_eq!(
            tags(text),
            vec![
                SectionTag::Header(SectionKind::Skills),
                SectionTag::Section(SectionKind::Skills),
                SectionTag::None,
                SectionTag::None,
            ]
        );
    }

    #[test]
    fn test_terminator_outside_section_is_plain_line() {
        let mut machine = SectionSegmenter::new();
        assert_eq!(machine.step("Projects"), SectionTag::None);
        assert_eq!(machine.state(), SectionState::Outside);
    }

    #[test]
    fn test_incidental_keyword_toggles_section() {
        // Substring matching: prose mentioning "experience" reopens Experience.
        let text = "Education\nBachelor of Science\n5 years of experience with Rust";
        assert_eq!(
            tags(text)[2],
            SectionTag::Header(SectionKind::Experience)
        );
    }

    #[test]
    fn test_section_lines_collects_runs() {
        let text = "Skills\nRust\nEducation\nBSc\nTechnologies\nKafka";
        let seg = segment(text);
        assert_eq!(seg.section_lines(SectionKind::Skills), vec!["Rust", "Kafka"]);
        assert_eq!(seg.section_lines(SectionKind::Education), vec!["BSc"]);
        assert!(seg.section_lines(SectionKind::Experience).is_empty());
    }

    #[test]
    fn test_empty_text() {
        assert!(segment("").is_empty());
    }

    #[test]
    fn test_custom_terminator_closes_experience() {
        let config = crate::ParsingConfigBuilder::new()
            .add_section_terminator(SectionKind::Experience, "Volunteering".to_string())
            .build()
            .unwrap();
        let mut machine = SectionSegmenter::with_config(&config);
        machine.step("Experience");
        assert_eq!(machine.step("Volunteering"), SectionTag::None);
        assert_eq!(machine.state(), SectionState::Outside);
        assert_eq!(machine.step("Food bank organiser"), SectionTag::None);

        // The default terminator still applies alongside the added one.
        machine.step("Experience");
        assert_eq!(machine.step("Projects"), SectionTag::None);
    }

    #[test]
    fn test_replaced_terminators() {
        let config = crate::ParsingConfigBuilder::new()
            .set_section_terminators(SectionKind::Experience, Vec::new())
            .build()
            .unwrap();
        let seg = segment_with_config("Experience
Projects
Acme", &config);
        assert_eq!(
            seg.section_lines(SectionKind::Experience),
            vec!["Projects", "Acme"]
        );
    }

    #[test]
    fn test_custom_headers() {
        let config = crate::ParsingConfigBuilder::new()
            .add_section_header(SectionKind::Skills, "Toolbox".to_string())
            .build()
            .unwrap();
        let seg = segment_with_config("Toolbox\nTerraform", &config);
        assert_eq!(seg.section_lines(SectionKind::Skills), vec!["Terraform"]);
    }
}
