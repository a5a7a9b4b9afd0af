use crate::config::ParsingConfig;

/// Canonical skill names recognized by default.
pub const DEFAULT_SKILLS: &[&str] = &[
    "JavaScript",
    "Python",
    "Java",
    "React",
    "Node.js",
    "HTML",
    "CSS",
    "SQL",
    "Git",
    "Docker",
    "AWS",
    "MongoDB",
    "PostgreSQL",
    "TypeScript",
    "Vue.js",
    "Angular",
    "Express",
    "Django",
    "Flask",
    "Spring",
    "Kubernetes",
    "Jenkins",
];

/// Match the skill vocabulary against the skills section and the whole text.
///
/// Terms found in `skill_lines` come first, then terms found anywhere in
/// `text`, in vocabulary order. Matching is a case-insensitive substring test,
/// so a shorter term contained in a longer one ("Java" in "JavaScript")
/// matches too. Only vocabulary terms are ever returned, each at most once.
pub fn match_skills(skill_lines: &[&str], text: &str) -> Vec<String> {
    match_skills_with_config(skill_lines, text, &ParsingConfig::default())
}

/// Config-aware version of [`match_skills`].
pub(crate) fn match_skills_with_config(
    skill_lines: &[&str],
    text: &str,
    config: &ParsingConfig,
) -> Vec<String> {
    let vocabulary: Vec<(String, String)> = config
        .skill_vocabulary()
        .into_iter()
        .map(|skill| {
            let lower = skill.to_lowercase();
            (skill, lower)
        })
        .collect();

    let mut found: Vec<String> = Vec::new();
    let mut push = |skill: &String| {
        if !found.contains(skill) {
            found.push(skill.clone());
        }
    };

    for line in skill_lines {
        let line = line.to_lowercase();
        for (skill, lower) in &vocabulary {
            if line.contains(lower.as_str()) {
                push(skill);
            }
        }
    }

    let text = text.to_lowercase();
    for (skill, lower) in &vocabulary {
        if text.contains(lower.as_str()) {
            push(skill);
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_matches_come_first() {
        let skills = match_skills(&["docker, react"], "Python and docker, react");
        assert_eq!(skills, vec!["React", "Docker", "Python"]);
    }

    #[test]
    fn test_full_text_matches_without_section() {
        let skills = match_skills(&[], "Deployed services on KUBERNETES with jenkins");
        assert_eq!(skills, vec!["Kubernetes", "Jenkins"]);
    }

    #[test]
    fn test_substring_overlap_is_accepted() {
        let skills = match_skills(&["JavaScript"], "JavaScript");
        assert!(skills.contains(&"JavaScript".to_string()));
        assert!(skills.contains(&"Java".to_string()));
    }

    #[test]
    fn test_no_duplicates_and_only_vocabulary() {
        let text = "Rust, Elixir, Python, python, PYTHON";
        let skills = match_skills(&[text, text], text);
        assert_eq!(skills, vec!["Python"]);
    }

    #[test]
    fn test_idempotent() {
        let text = "Skills\nTypeScript, Angular, SQL\nPostgreSQL";
        let lines = ["TypeScript, Angular, SQL", "PostgreSQL"];
        assert_eq!(match_skills(&lines, text), match_skills(&lines, text));
    }

    #[test]
    fn test_custom_vocabulary() {
        let config = crate::ParsingConfigBuilder::new()
            .set_skills(vec!["Rust".to_string(), "Go".to_string()])
            .build()
            .unwrap();
        let skills = match_skills_with_config(&[], "I write rust and Python", &config);
        assert_eq!(skills, vec!["Rust"]);
    }
}
