//! Company name rules.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::{clean_candidate, is_generic};

/// Company candidates must stay strictly inside this window.
const MIN_LEN: usize = 3;
const MAX_LEN: usize = 100;

/// Ordered most-specific-first. Labels beat headings beat phrase heuristics.
static COMPANY_RULES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // "Company: Acme Ltd", "Organization: ...", "Employer: ..." — the
        // capture stops before a sentence break or an "is hiring" clause so
        // single-line postings stay clean.
        Regex::new(
            r"(?im)\b(?:company(?:[ \t]+name)?|organization|employer)[ \t]*[:\-][ \t]*(.{3,100}?)(?:[ \t]+is[ \t]+(?:hiring|looking|seeking)\b|[.;]|$)",
        )
        .expect("company label rule"),
        // "About Acme Ltd:" headings.
        Regex::new(r"(?m)\bAbout[ \t]+([A-Z][A-Za-z0-9&.,'() \t-]{2,90}?)[ \t]*:").expect("company about rule"),
        // "Acme Ltd is hiring", "Acme Ltd is looking for ...". Capitalized
        // word chain only; lowercase words end the name.
        Regex::new(
            r"\b([A-Z][A-Za-z0-9&.'-]*(?:[ \t]+[A-Z][A-Za-z0-9&.'-]*){0,6})[ \t]+is[ \t]+(?:hiring|looking[ \t]+for|seeking)\b",
        )
        .expect("company hiring rule"),
        // "join our team at Acme", "join us at Acme".
        Regex::new(r"(?im)\bjoin[ \t]+(?:our[ \t]+team[ \t]+at|us[ \t]+at)[ \t]+(.{3,90}?)(?:[.;,]|$)")
            .expect("company join rule"),
    ]
});

/// Extract a company name, or `None` when no rule produces a sane value.
///
/// Email domains are deliberately not consulted — inferring a company from
/// `hr@acme.com` is left to the model path.
pub fn extract_company(text: &str) -> Option<String> {
    for rule in COMPANY_RULES.iter() {
        for captures in rule.captures_iter(text) {
            let Some(raw) = captures.get(1) else { continue };
            let candidate = clean_candidate(raw.as_str());
            if passes_sanity(&candidate) {
                debug!(company = %candidate, "company matched by pattern rule");
                return Some(candidate);
            }
        }
    }
    None
}

fn passes_sanity(candidate: &str) -> bool {
    let len = candidate.chars().count();
    len > MIN_LEN && len < MAX_LEN && !is_generic(candidate) && !candidate.contains('@')
}
