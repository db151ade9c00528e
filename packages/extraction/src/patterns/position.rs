//! Job title rules.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::{clean_candidate, is_generic};

const MIN_LEN: usize = 3;
const MAX_LEN: usize = 150;

/// Words that mark a heading line as a probable job title.
const ROLE_KEYWORDS: [&str; 22] = [
    "engineer",
    "developer",
    "intern",
    "internship",
    "manager",
    "designer",
    "analyst",
    "officer",
    "executive",
    "consultant",
    "specialist",
    "coordinator",
    "administrator",
    "architect",
    "accountant",
    "scientist",
    "lead",
    "assistant",
    "writer",
    "teacher",
    "marketer",
    "trainee",
];

static POSITION_RULES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // "Position: Backend Engineer", "Job Title: ...", "Vacancy: ...".
        Regex::new(
            r"(?im)\b(?:job[ \t]+title|position|vacancy|designation|role)[ \t]*[:\-][ \t]*(.{3,150}?)(?:[.;]|$)",
        )
        .expect("position label rule"),
        // "hiring a React developer", "looking for an IT intern",
        // "seeking a passionate HR intern".
        Regex::new(
            r"(?im)\b(?:hiring|looking[ \t]+for|seeking)[ \t]+(?:for[ \t]+)?(?:an?[ \t]+)?(?:passionate[ \t]+|experienced[ \t]+|skilled[ \t]+)?(.{3,150}?)(?:[.;,!]|[ \t]+(?:at|in|to|with|who)\b|$)",
        )
        .expect("position hiring rule"),
    ]
});

/// Extract a job title, or `None` when no rule produces a sane value.
pub fn extract_position(text: &str) -> Option<String> {
    for rule in POSITION_RULES.iter() {
        for captures in rule.captures_iter(text) {
            let Some(raw) = captures.get(1) else { continue };
            let candidate = clean_candidate(raw.as_str());
            if passes_sanity(&candidate) {
                debug!(position = %candidate, "position matched by pattern rule");
                return Some(candidate);
            }
        }
    }
    heading_heuristic(text)
}

/// Weakest tier: a short opening line containing a role keyword is very
/// often the posting's title.
fn heading_heuristic(text: &str) -> Option<String> {
    let line = text.lines().map(str::trim).find(|line| !line.is_empty())?;
    let candidate = clean_candidate(line);
    let lower = candidate.to_lowercase();
    let has_role_word = ROLE_KEYWORDS.iter().any(|keyword| lower.contains(keyword));
    (has_role_word && passes_sanity(&candidate)).then(|| {
        debug!(position = %candidate, "position taken from heading line");
        candidate
    })
}

fn passes_sanity(candidate: &str) -> bool {
    let len = candidate.chars().count();
    len > MIN_LEN && len < MAX_LEN && !is_generic(candidate) && !candidate.contains('@')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_rule() {
        assert_eq!(
            extract_position("Position: Backend Engineer. Location: Dhaka."),
            Some("Backend Engineer".to_string())
        );
        assert_eq!(
            extract_position("Job Title: Senior Data Analyst\nSalary: negotiable"),
            Some("Senior Data Analyst".to_string())
        );
        assert_eq!(
            extract_position("Position: Intern – Human Resources (HR)\nLocation: Niketon"),
            Some("Intern – Human Resources (HR)".to_string())
        );
    }

    #[test]
    fn test_hiring_phrase() {
        assert_eq!(
            extract_position("We are hiring a React developer."),
            Some("React developer".to_string())
        );
        assert_eq!(
            extract_position("Cityscape International Ltd is looking for an IT intern to join"),
            Some("IT intern".to_string())
        );
    }

    #[test]
    fn test_heading_heuristic() {
        let text = "IT & Odoo Software Intern\n\nCityscape International Ltd\nDhaka";
        assert_eq!(extract_position(text), Some("IT & Odoo Software Intern".to_string()));
    }

    #[test]
    fn test_heading_without_role_word_is_ignored() {
        assert_eq!(extract_position("Great opportunity\n\nApply now"), None);
    }

    #[test]
    fn test_no_position() {
        assert_eq!(extract_position("We sell furniture in three showrooms."), None);
    }
}
