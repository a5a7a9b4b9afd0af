use once_cell::sync::Lazy;
use regex::Regex;

use screener_core::ExperienceEntry;

use crate::config::ParsingConfig;

/// Words that end a job title.
pub(crate) const DEFAULT_ROLE_NOUNS: &[&str] = &[
    "Engineer",
    "Developer",
    "Manager",
    "Analyst",
    "Specialist",
    "Coordinator",
];

/// Build the job-title pattern: one or more capitalized words followed by a
/// role noun, anchored at the start of the line. A bare role noun is not a title.
pub(crate) fn build_title_regex(role_nouns: &[String]) -> Result<Regex, regex::Error> {
    let nouns: Vec<String> = role_nouns.iter().map(|n| regex::escape(n)).collect();
    Regex::new(&format!(
        r"^(?:[A-Z][\w.+#/&'-]*\s+)+(?:{})\b",
        nouns.join("|")
    ))
}

static TITLE_RE: Lazy<Regex> = Lazy::new(|| {
    let nouns: Vec<String> = DEFAULT_ROLE_NOUNS.iter().map(|s| s.to_string()).collect();
    build_title_regex(&nouns).unwrap()
});

/// Delimiters between company and duration: " at ", "|", " - ".
static DETAIL_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+at\s+|\s*\|\s*|\s+-\s+").unwrap());

/// Connector left at the start of a title line's remainder,
/// e.g. "at Acme Corp" after "Software Engineer".
static LEADING_CONNECTOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:at\s+|@\s*|[|,\-\u{2013}\u{2014}]\s*)").unwrap());

enum ExperienceLine<'a> {
    /// Job title line: the whole line, the text up to the role noun, and
    /// whatever followed the role noun.
    Title {
        line: &'a str,
        title: &'a str,
        rest: &'a str,
    },
    Detail { company: &'a str, duration: &'a str },
    Other,
}

fn classify<'a>(line: &'a str, title_re: &Regex) -> ExperienceLine<'a> {
    if let Some(m) = title_re.find(line) {
        return ExperienceLine::Title {
            line: line.trim(),
            title: m.as_str().trim(),
            rest: line[m.end()..].trim(),
        };
    }
    if line.contains(" at ") || line.contains('|') || line.contains('-') {
        let mut parts = DETAIL_SPLIT_RE.splitn(line, 2).map(str::trim);
        if let (Some(company), Some(duration)) = (parts.next(), parts.next()) {
            return ExperienceLine::Detail { company, duration };
        }
    }
    ExperienceLine::Other
}

/// Open a new entry from a title line.
///
/// When a connector follows the role noun ("at Acme Corp - 2019"), the title
/// stops at the role noun and the remainder is read as "company - duration".
/// Otherwise the whole line is the title.
fn open_entry(line: &str, title: &str, rest: &str) -> ExperienceEntry {
    let Some(connector) = LEADING_CONNECTOR_RE.find(rest) else {
        return ExperienceEntry {
            title: line.to_string(),
            ..Default::default()
        };
    };
    let mut entry = ExperienceEntry {
        title: title.to_string(),
        ..Default::default()
    };
    let rest = rest[connector.end()..].trim();
    if !rest.is_empty() {
        let mut parts = DETAIL_SPLIT_RE.splitn(rest, 2).map(str::trim);
        entry.company = parts.next().unwrap_or_default().to_string();
        entry.duration = parts.next().unwrap_or_default().to_string();
    }
    entry
}

/// Build experience entries from the lines of the experience section.
///
/// A title line closes the entry in progress and opens a new one. While an
/// entry is open, a line with a company/duration delimiter overwrites its
/// company and duration (the last such line wins). Other lines are ignored.
pub fn parse_experience(lines: &[&str]) -> Vec<ExperienceEntry> {
    parse_experience_with_config(lines, &ParsingConfig::default())
}

/// Config-aware version of [`parse_experience`].
pub(crate) fn parse_experience_with_config(
    lines: &[&str],
    config: &ParsingConfig,
) -> Vec<ExperienceEntry> {
    let title_re = config.title_re.as_ref().unwrap_or(&TITLE_RE);

    let mut entries = Vec::new();
    let mut current: Option<ExperienceEntry> = None;

    for line in lines {
        current = match classify(line, title_re) {
            ExperienceLine::Title { line, title, rest } => {
                entries.extend(current.take());
                Some(open_entry(line, title, rest))
            }
            ExperienceLine::Detail { company, duration } => current.map(|mut entry| {
                entry.company = company.to_string();
                entry.duration = duration.to_string();
                entry
            }),
            ExperienceLine::Other => current,
        };
    }

    entries.extend(current);
    entries
}
