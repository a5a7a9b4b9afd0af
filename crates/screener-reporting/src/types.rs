use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use screener_big5::TraitScoreSet;
use screener_core::ParsedProfile;

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Markdown,
    Text,
}

impl ExportFormat {
    pub fn all() -> &'static [ExportFormat] {
        &[ExportFormat::Json, ExportFormat::Markdown, ExportFormat::Text]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Markdown => "Markdown",
            Self::Text => "Plain Text",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Markdown => "md",
            Self::Text => "txt",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            "text" | "txt" | "plain" => Ok(Self::Text),
            other => Err(format!(
                "unknown format '{other}' (expected json, markdown or text)"
            )),
        }
    }
}

/// Everything known about one candidate.
///
/// Either half may be absent: a report can cover only a parsed resume, only
/// questionnaire scores, or both.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CandidateReport {
    /// Source document (or answers file) the report was built from.
    pub file_name: String,
    pub profile: Option<ParsedProfile>,
    pub big5: Option<TraitScoreSet>,
}

impl CandidateReport {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            ..Self::default()
        }
    }

    pub fn with_profile(mut self, profile: ParsedProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn with_big5(mut self, scores: TraitScoreSet) -> Self {
        self.big5 = Some(scores);
        self
    }
}
