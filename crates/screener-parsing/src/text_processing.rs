/// Expand common typographic ligatures found in PDFs.
pub fn expand_ligatures(text: &str) -> String {
    text.replace('\u{FB00}', "ff")
        .replace('\u{FB01}', "fi")
        .replace('\u{FB02}', "fl")
        .replace('\u{FB03}', "ffi")
        .replace('\u{FB04}', "ffl")
        .replace(['\u{FB05}', '\u{FB06}'], "st")
}

/// Split text into trimmed, non-empty lines, preserving order.
///
/// Handles `\n`, `\r\n` and lone `\r` line endings.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Case-insensitive substring test against a list of keywords that are
/// already lowercased.
pub(crate) fn contains_any_lowercase(line_lower: &str, keywords_lower: &[String]) -> bool {
    keywords_lower.iter().any(|k| line_lower.contains(k.as_str()))
}

pub(crate) fn lowercase_all(values: &[String]) -> Vec<String> {
    values.iter().map(|v| v.to_lowercase()).collect()
}
