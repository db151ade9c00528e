//! Salary rules.
//!
//! The hard requirement here is precision: postings are full of numeric
//! ranges that are not salaries (age, experience years, team size, working
//! hours). Every tier except the last therefore requires a currency marker
//! (BDT/Tk/৳/$/USD) adjacent to the amount; the last-resort standalone range
//! only fires when no currency marker exists anywhere in the text.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::clean_candidate;

const MAX_LEN: usize = 150;

/// An amount: plain digits or thousands-separated, optional `k` suffix.
const AMOUNT: &str = r"(?:\d{1,3}(?:,\d{3})+|\d+)k?";

/// A currency marker. Word-bounded for the alphabetic forms; `$` and `৳`
/// are symbols and carry no word boundary of their own.
const CURRENCY: &str = r"(?:\b(?:bdt|tk|usd)\b\.?|[৳$])";

static CURRENCY_PREFIXED: LazyLock<Regex> = LazyLock::new(|| {
    // "BDT 25,000 - 35,000 (Negotiable)", "Tk 50000+", "$800-1000/month",
    // "৳25k-35k", "USD 1000 per month".
    Regex::new(&format!(
        r"(?i){CURRENCY}[ \t]*{AMOUNT}[ \t]*\+?(?:[ \t]*(?:-|–|to\b)[ \t]*(?:{CURRENCY}[ \t]*)?{AMOUNT})?(?:[ \t]*(?:/|\bper[ \t]+)(?:month|annum|year|week)\b|[ \t]+monthly\b|[ \t]+yearly\b)?(?:[ \t]*\((?:monthly|yearly|negotiable|per[ \t]+month)\))?"
    ))
    .expect("currency-prefixed salary rule")
});

static CURRENCY_SUFFIXED: LazyLock<Regex> = LazyLock::new(|| {
    // "22k - 30k BDT/month", "25,000 to 35,000 BDT".
    Regex::new(&format!(
        r"(?i){AMOUNT}[ \t]*(?:(?:-|–|to\b)[ \t]*{AMOUNT}[ \t]*)?{CURRENCY}(?:[ \t]*(?:/|\bper[ \t]+)(?:month|annum|year|week)\b)?"
    ))
    .expect("currency-suffixed salary rule")
});

static LABELED_INLINE: LazyLock<Regex> = LazyLock::new(|| {
    // "Salary: ...", "Monthly Salary: ...", "Compensation: ...", "Pay: ...".
    Regex::new(r"(?im)^[^\r\n]*?\b(?:salary|compensation|pay|remuneration)\b[^:\r\n]*:[ \t]*([^\r\n]+)$")
        .expect("labeled salary rule")
});

static LABELED_NEXT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    // Label on its own line, value bulleted below:
    //   Monthly Salary
    //   • Tk. 22,000 - 30,000 (Monthly)
    Regex::new(r"(?im)^[ \t]*(?:monthly[ \t]+|yearly[ \t]+)?(?:salary|compensation|remuneration)[ \t]*\r?\n[ \t]*[•·*-]?[ \t]*([^\r\n]+)$")
        .expect("labeled next-line salary rule")
});

static NEGOTIABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bnegotiable\b").expect("negotiable rule"));

static AS_PER_POLICY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bas[ \t]+per[ \t]+(?:company[ \t]+)?policy\b").expect("policy rule")
});

static STANDALONE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    // Plausible salary range with no currency context: thousands-separated,
    // 4-6 digit, or k-suffixed numbers on both sides.
    Regex::new(r"\b(\d{1,2},\d{3}|\d{4,6}|\d{1,3}k)[ \t]*(?:-|–|to\b)[ \t]*(\d{1,2},\d{3}|\d{4,6}|\d{1,3}k)\b")
        .expect("standalone range rule")
});

static HAS_CURRENCY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("(?i){CURRENCY}")).expect("currency presence rule"));

/// Extract salary details, or `None` when nothing passes the filters.
pub fn extract_salary(text: &str) -> Option<String> {
    // Labeled lines first: the label scopes the search to the right segment.
    for rule in [&LABELED_INLINE, &LABELED_NEXT_LINE] {
        for captures in rule.captures_iter(text) {
            let Some(segment) = captures.get(1) else { continue };
            if let Some(value) = value_in_segment(segment.as_str()) {
                debug!(salary = %value, "salary matched near label");
                return Some(value);
            }
        }
    }

    // Currency-anchored amounts anywhere in the text.
    if let Some(value) = currency_value(text) {
        debug!(salary = %value, "salary matched by currency anchor");
        return Some(value);
    }

    // Last resort: a plausible standalone range, only when the text carries
    // no currency marker at all.
    if !HAS_CURRENCY.is_match(text) {
        if let Some(found) = STANDALONE_RANGE.find(text) {
            let value = clean_candidate(found.as_str());
            if passes_sanity(&value) {
                debug!(salary = %value, "salary matched by standalone range");
                return Some(value);
            }
        }
    }

    None
}

/// Interpret the text following a salary label.
fn value_in_segment(segment: &str) -> Option<String> {
    if let Some(value) = currency_value(segment) {
        return Some(value);
    }
    if let Some(found) = NEGOTIABLE.find(segment) {
        return Some(found.as_str().to_string());
    }
    if let Some(found) = AS_PER_POLICY.find(segment) {
        return Some(found.as_str().to_string());
    }
    None
}

fn currency_value(text: &str) -> Option<String> {
    for rule in [&CURRENCY_PREFIXED, &CURRENCY_SUFFIXED] {
        if let Some(found) = rule.find(text) {
            let value = clean_candidate(found.as_str());
            if passes_sanity(&value) {
                return Some(value);
            }
        }
    }
    None
}

fn passes_sanity(candidate: &str) -> bool {
    let has_substance = candidate.chars().any(|c| c.is_ascii_digit())
        || NEGOTIABLE.is_match(candidate)
        || AS_PER_POLICY.is_match(candidate);
    has_substance && candidate.chars().count() <= MAX_LEN
}
