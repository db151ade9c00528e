//! Deterministic per-field extraction rules.
//!
//! Each field holds an ordered list of regular-expression rules, most
//! specific first: explicit labels, then structural phrases, then the
//! weakest keyword/gazetteer heuristics. The first candidate that passes
//! the field's sanity filter wins; later rules are not tried. A rule that
//! fails to produce a valid candidate never aborts the field — the table
//! simply continues.

mod company;
mod deadline;
mod location;
mod position;
mod salary;

pub use company::extract_company;
pub use deadline::extract_deadline;
pub use location::extract_location;
pub use position::extract_position;
pub use salary::extract_salary;

/// Words too generic to stand alone as a company or position value.
const GENERIC_WORDS: [&str; 7] = [
    "job",
    "position",
    "role",
    "company",
    "organization",
    "vacancy",
    "employer",
];

/// Trim a raw capture: whitespace, bullets, quotes, stray edge punctuation.
///
/// Closing parentheses are kept so values like `"Dhaka (Niketon)"` and
/// `"(Monthly)"` tails survive.
pub(crate) fn clean_candidate(raw: &str) -> String {
    raw.trim()
        .trim_start_matches(['•', '·', '*', '-', '"', '\''])
        .trim_end_matches([',', '.', ';', ':', '!', '?', '"', '\''])
        .trim()
        .to_string()
}

/// Reject candidates that are just a generic job-posting word.
pub(crate) fn is_generic(candidate: &str) -> bool {
    GENERIC_WORDS
        .iter()
        .any(|word| candidate.eq_ignore_ascii_case(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_candidate() {
        assert_eq!(clean_candidate("  Acme Corp. "), "Acme Corp");
        assert_eq!(clean_candidate("• Dhaka (Niketon)"), "Dhaka (Niketon)");
        assert_eq!(clean_candidate("\"Backend Engineer\""), "Backend Engineer");
    }

    #[test]
    fn test_is_generic() {
        assert!(is_generic("Job"));
        assert!(is_generic("position"));
        assert!(!is_generic("Acme Corporation"));
    }
}
