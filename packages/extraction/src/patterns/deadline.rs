//! Deadline rules.
//!
//! Two tiers. Keyword-anchored dates ("Deadline: 15/02/2026", "apply by
//! March 1, 2026", Bengali "শেষ তারিখ") are a trustworthy floor and are
//! accepted even when they lie in the past — whether a lapsed deadline
//! matters is caller policy. Standalone dates with no keyword are only
//! accepted when they resolve strictly into the future.

use std::sync::LazyLock;

use chrono::DateTime;
use chrono_tz::Tz;
use regex::Regex;
use tracing::debug;

use crate::dates::DateResolver;

/// A date token: numeric day-first, ISO, or textual with a year.
const DATE_TOKEN: &str = r"(\d{1,2}[/\-.]\d{1,2}[/\-.]\d{2,4}|\d{4}-\d{2}-\d{2}|\d{1,2}(?:st|nd|rd|th)?[ \t]+[a-z]+,?[ \t]+\d{4}|[a-z]+[ \t]+\d{1,2}(?:st|nd|rd|th)?,?[ \t]+\d{4})";

/// Keyword-anchored patterns, run over lowercased text.
static KEYWORD_RULES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?:application[ \t]+)?deadline[:\s]\s*",
        r"apply[ \t]+by[:\s]\s*",
        r"last[ \t]+date(?:[ \t]+of[ \t]+application)?[:\s]\s*",
        r"applications?[ \t]+closes?(?:[ \t]+on)?[:\s]\s*",
        r"close[ \t]+date[:\s]\s*",
        r"due[ \t]+date[:\s]\s*",
        r"expires?(?:[ \t]+on)?[:\s]\s*",
        r"valid[ \t]+till[:\s]\s*",
        // Bengali "last date"
        r"শেষ[ \t]+তারিখ[:\s]\s*",
    ]
    .iter()
    .map(|keyword| {
        Regex::new(&format!("{keyword}{DATE_TOKEN}")).expect("deadline keyword rule")
    })
    .collect()
});

/// Standalone date tokens for the no-keyword fallback.
static STANDALONE_RULES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\b(\d{1,2}[/\-.]\d{1,2}[/\-.]\d{2,4})\b",
        r"\b(\d{4}-\d{2}-\d{2})\b",
        r"\b(\d{1,2}[ \t]+(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*[ \t]+\d{4})\b",
        r"\b((?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*[ \t]+\d{1,2},?[ \t]+\d{4})\b",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("standalone date rule"))
    .collect()
});

/// Extract an application deadline.
///
/// Resolution failures are logged and skipped candidate-by-candidate; a bad
/// date token never aborts the search.
pub fn extract_deadline(
    text: &str,
    resolver: &DateResolver,
    now: DateTime<Tz>,
) -> Option<DateTime<Tz>> {
    let lowered = text.to_lowercase();

    for rule in KEYWORD_RULES.iter() {
        for captures in rule.captures_iter(&lowered) {
            let Some(token) = captures.get(1) else { continue };
            match resolver.resolve_at(token.as_str(), true, now) {
                Some(deadline) => {
                    debug!(%deadline, token = token.as_str(), "deadline matched by keyword rule");
                    return Some(deadline);
                }
                None => {
                    debug!(token = token.as_str(), "keyword-anchored token failed to resolve");
                }
            }
        }
    }

    // No keyword anywhere: accept the first standalone date that resolves
    // strictly into the future.
    for rule in STANDALONE_RULES.iter() {
        for captures in rule.captures_iter(&lowered) {
            let Some(token) = captures.get(1) else { continue };
            let Some(resolved) = resolver.resolve_at(token.as_str(), true, now) else {
                continue;
            };
            if resolved > now {
                debug!(deadline = %resolved, token = token.as_str(), "deadline from standalone date");
                return Some(resolved);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone};

    fn resolver() -> DateResolver {
        DateResolver::new(Tz::Asia__Dhaka)
    }

    fn anchor(y: i32, m: u32, d: u32) -> DateTime<Tz> {
        Tz::Asia__Dhaka.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn date_of(result: Option<DateTime<Tz>>) -> Option<(i32, u32, u32)> {
        result.map(|dt| (dt.year(), dt.month(), dt.day()))
    }

    #[test]
    fn test_keyword_numeric() {
        let now = anchor(2026, 1, 10);
        let found = extract_deadline("Deadline: 15/02/2026. Apply now!", &resolver(), now);
        assert_eq!(date_of(found), Some((2026, 2, 15)));
    }

    #[test]
    fn test_keyword_textual() {
        let now = anchor(2026, 1, 10);
        for text in [
            "Application deadline: February 15, 2026",
            "apply by 15 February 2026",
            "Applications close on 15 feb 2026",
            "Valid till 15/02/2026",
        ] {
            let found = extract_deadline(text, &resolver(), now);
            assert_eq!(date_of(found), Some((2026, 2, 15)), "text: {text}");
        }
    }

    #[test]
    fn test_bengali_keyword() {
        let now = anchor(2026, 1, 10);
        let found = extract_deadline("শেষ তারিখ: 15/02/2026", &resolver(), now);
        assert_eq!(date_of(found), Some((2026, 2, 15)));
    }

    #[test]
    fn test_keyword_deadline_kept_even_if_past() {
        let now = anchor(2026, 1, 10);
        let found = extract_deadline("Deadline: March 1, 2020", &resolver(), now);
        assert_eq!(date_of(found), Some((2020, 3, 1)));
    }

    #[test]
    fn test_standalone_date_must_be_future() {
        let now = anchor(2026, 1, 10);
        // Future standalone date: accepted.
        let future = extract_deadline("The event runs until 15 March 2026", &resolver(), now);
        assert_eq!(date_of(future), Some((2026, 3, 15)));
        // Past standalone date: rejected.
        let past = extract_deadline("Founded on 15 March 2019", &resolver(), now);
        assert_eq!(past, None);
    }

    #[test]
    fn test_no_date_like_text() {
        let now = anchor(2026, 1, 10);
        for text in ["", "We are hiring a developer.", "Experience: 2-3 years, Age: 25-30"] {
            assert_eq!(extract_deadline(text, &resolver(), now), None, "text: {text}");
        }
    }

    #[test]
    fn test_bad_token_does_not_abort_search() {
        let now = anchor(2026, 1, 10);
        // The first keyword hit is unparseable (month 13); the standalone
        // tier still finds the real date.
        let text = "Deadline: 32/13/2026 ... event on 15 March 2026";
        let found = extract_deadline(text, &resolver(), now);
        assert_eq!(date_of(found), Some((2026, 3, 15)));
    }
}
