use once_cell::sync::Lazy;
use regex::Regex;

use screener_core::EducationEntry;

use crate::config::ParsingConfig;

/// Case-sensitive markers of a qualification line.
pub(crate) const DEFAULT_DEGREE_KEYWORDS: &[&str] = &[
    "Bachelor", "Master", "PhD", "Degree", "B.S.", "M.S.", "B.A.", "M.A.",
];

static SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+at\s+|\s+from\s+|\s+-\s+").unwrap());

/// Build education entries from the lines of the education section.
///
/// Every line containing a degree keyword yields one entry:
/// `"<degree> from <institution> - <year>"`. Missing parts stay empty.
pub fn parse_education(lines: &[&str]) -> Vec<EducationEntry> {
    parse_education_with_config(lines, &ParsingConfig::default())
}

/// Config-aware version of [`parse_education`].
pub(crate) fn parse_education_with_config(
    lines: &[&str],
    config: &ParsingConfig,
) -> Vec<EducationEntry> {
    let keywords = config.degree_keywords();

    lines
        .iter()
        .filter(|line| keywords.iter().any(|k| line.contains(k.as_str())))
        .map(|line| {
            let mut parts = SPLIT_RE.split(line).map(str::trim);
            let mut next = || parts.next().unwrap_or_default().to_string();
            EducationEntry {
                degree: next(),
                institution: next(),
                year: next(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_institution_year() {
        let entries = parse_education(&["Bachelor of Science from MIT - 2015"]);
        assert_eq!(
            entries,
            vec![EducationEntry {
                degree: "Bachelor of Science".into(),
                institution: "MIT".into(),
                year: "2015".into(),
            }]
        );
    }

    #[test]
    fn test_missing_parts_are_empty() {
        let entries = parse_education(&["PhD in Physics"]);
        assert_eq!(entries[0].degree, "PhD in Physics");
        assert_eq!(entries[0].institution, "");
        assert_eq!(entries[0].year, "");
    }

    #[test]
    fn test_at_delimiter() {
        let entries = parse_education(&["M.S. Computer Science at Stanford University"]);
        assert_eq!(entries[0].degree, "M.S. Computer Science");
        assert_eq!(entries[0].institution, "Stanford University");
    }

    #[test]
    fn test_each_line_is_one_entry() {
        let entries = parse_education(&[
            "Master of Arts - 2012",
            "Dean's list",
            "Bachelor of Arts - 2010",
        ]);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].degree, "Master of Arts");
        assert_eq!(entries[0].institution, "2012");
        assert_eq!(entries[1].degree, "Bachelor of Arts");
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert!(parse_education(&["bachelor of science"]).is_empty());
    }
}
