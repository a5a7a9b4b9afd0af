use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ParsingConfig;
use crate::text_processing::split_lines;

pub(crate) const DEFAULT_LOCATION_KEYWORDS: &[&str] = &["Address", "Location", "City", "State"];

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

// Optional country code, optional parentheses around the area code,
// `-`, `.` or whitespace between the 3-3-4 groups.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap()
});

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][a-z]+\s+[A-Z][a-z]+").unwrap());

/// "Springfield, IL"
static CITY_STATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][a-z]+,\s*[A-Z]{2}\b").unwrap());

/// Contact fields found anywhere in the document. Empty when not found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entities {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

/// Scan the full text for name, email, phone and location.
///
/// Each field is searched independently; the first match wins.
pub fn extract_entities(text: &str) -> Entities {
    extract_entities_with_config(text, &ParsingConfig::default())
}

/// Config-aware version of [`extract_entities`].
pub(crate) fn extract_entities_with_config(text: &str, config: &ParsingConfig) -> Entities {
    let lines = split_lines(text);
    Entities {
        name: find_name(&lines, config.name_scan_lines),
        email: find_email(text, config),
        phone: find_phone(text, config),
        location: find_location(&lines, &config.location_keywords()),
    }
}

fn find_email(text: &str, config: &ParsingConfig) -> String {
    let re = config.email_re.as_ref().unwrap_or(&EMAIL_RE);
    re.find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

fn find_phone(text: &str, config: &ParsingConfig) -> String {
    let re = config.phone_re.as_ref().unwrap_or(&PHONE_RE);
    re.find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// First of the leading `window` lines that looks like "Firstname Lastname"
/// and is not an email line.
fn find_name(lines: &[&str], window: usize) -> String {
    lines
        .iter()
        .take(window)
        .find(|line| NAME_RE.is_match(line) && !line.contains('@'))
        .map(|line| line.to_string())
        .unwrap_or_default()
}

fn find_location(lines: &[&str], keywords: &[String]) -> String {
    lines
        .iter()
        .find(|line| {
            keywords.iter().any(|k| line.contains(k.as_str())) || CITY_STATE_RE.is_match(line)
        })
        .map(|line| strip_keyword_prefix(line, keywords).trim().to_string())
        .unwrap_or_default()
}

/// Remove a leading `Keyword:` label (case-insensitive) and the whitespace
/// after it.
fn strip_keyword_prefix<'a>(line: &'a str, keywords: &[String]) -> &'a str {
    for keyword in keywords {
        let Some(head) = line.get(..keyword.len()) else {
            continue;
        };
        if !head.eq_ignore_ascii_case(keyword) {
            continue;
        }
        if let Some(rest) = line[keyword.len()..].strip_prefix(':') {
            return rest.trim_start();
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_first_match() {
        let e = extract_entities("contact: a.b@example.org or c@d.io");
        assert_eq!(e.email, "a.b@example.org");
    }

    #[test]
    fn test_phone_formats() {
        for (text, expected) in [
            ("Phone: (555) 123-4567", "(555) 123-4567"),
            ("tel 555.123.4567", "555.123.4567"),
            ("+1 555 123 4567", "+1 555 123 4567"),
            ("5551234567", "5551234567"),
        ] {
            assert_eq!(extract_entities(text).phone, expected, "input: {text}");
        }
    }

    #[test]
    fn test_years_are_not_phones() {
        assert_eq!(extract_entities("2019-2022\n2015").phone, "");
    }

    #[test]
    fn test_name_skips_email_line() {
        let text = "Resume\nJane Doe jane@x.com\nJane Doe\n";
        assert_eq!(extract_entities(text).name, "Jane Doe");
    }

    #[test]
    fn test_name_only_in_first_five_lines() {
        let text = "resume\n1\n2\n3\n4\nJohn Smith";
        assert_eq!(extract_entities(text).name, "");

        let config = crate::ParsingConfigBuilder::new()
            .name_scan_lines(6)
            .build()
            .unwrap();
        assert_eq!(extract_entities_with_config(text, &config).name, "John Smith");
    }

    #[test]
    fn test_location_keyword_prefix_stripped() {
        let e = extract_entities("Jane Doe\nlocation hint\nAddress: 12 Main St, Springfield");
        // "location hint" has no capitalized keyword; the Address line wins.
        assert_eq!(e.location, "12 Main St, Springfield");
    }

    #[test]
    fn test_location_city_state_pattern() {
        let e = extract_entities("Jane Doe\nAustin, TX\n");
        assert_eq!(e.location, "Austin, TX");
    }

    #[test]
    fn test_location_keyword_without_colon_kept_whole() {
        let e = extract_entities("Based in New York City");
        assert_eq!(e.location, "Based in New York City");
    }

    #[test]
    fn test_custom_location_keyword_prefix_stripped() {
        let text = "Jane Doe\nBased: Denver area";
        assert_eq!(extract_entities(text).location, "");

        let config = crate::ParsingConfigBuilder::new()
            .add_location_keyword("Based".to_string())
            .build()
            .unwrap();
        assert_eq!(
            extract_entities_with_config(text, &config).location,
            "Denver area"
        );
    }

    #[test]
    fn test_custom_phone_pattern() {
        let text = "Mobile 0412 345 678";
        assert_eq!(extract_entities(text).phone, "");

        let config = crate::ParsingConfigBuilder::new()
            .phone_regex(r"\d{4} \d{3} \d{3}")
            .build()
            .unwrap();
        assert_eq!(extract_entities_with_config(text, &config).phone, "0412 345 678");
    }

    #[test]
    fn test_all_empty_on_empty_text() {
        assert_eq!(extract_entities(""), Entities::default());
    }
}
