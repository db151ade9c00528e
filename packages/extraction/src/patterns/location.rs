//! Location rules.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::clean_candidate;

const MIN_LEN: usize = 3;
const MAX_LEN: usize = 200;

/// Major Bangladeshi cities plus Dhaka neighborhoods commonly named in
/// postings. Case-sensitive: these are proper nouns.
const GAZETTEER: &str = "Dhaka|Chattogram|Chittagong|Sylhet|Khulna|Rajshahi|Barishal|Barisal|Rangpur|Mymensingh|Cumilla|Comilla|Gazipur|Narayanganj|Gulshan|Banani|Baridhara|Bashundhara|Dhanmondi|Uttara|Mirpur|Mohakhali|Motijheel|Niketon|Badda|Tejgaon|Farmgate|Panthapath";

static LOCATION_RULES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // "Location: Dhaka", "Job Location: Gulshan", "Office: ...".
        Regex::new(
            r"(?im)\b(?:job[ \t]+)?(?:location|office|workplace)[ \t]*[:\-][ \t]*(.{3,200}?)(?:[.;]|$)",
        )
        .expect("location label rule"),
        // Label on its own line, value on the next (bulleted or not):
        //   Job Location
        //   • Dhaka (Niketon)
        Regex::new(r"(?im)^[ \t]*(?:job[ \t]+)?location[ \t]*\r?\n[ \t]*[•·*-]?[ \t]*([^\r\n]{3,200})$")
            .expect("location bullet rule"),
    ]
});

static REMOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:remote|work[ \t]+from[ \t]+home)\b").expect("remote rule")
});

static GAZETTEER_RULE: LazyLock<Regex> = LazyLock::new(|| {
    // A known place, optionally followed by an area in parentheses and/or
    // ", Dhaka" / ", Bangladesh" qualifiers.
    Regex::new(&format!(
        r"\b((?:{GAZETTEER})(?:[ \t]*\([^)\r\n]{{1,60}}\))?(?:,[ \t]*(?:{GAZETTEER}|Bangladesh))*)"
    ))
    .expect("gazetteer rule")
});

/// Extract a location, or `None` when no rule produces a sane value.
///
/// Remote arrangements normalize to `"Remote"`.
pub fn extract_location(text: &str) -> Option<String> {
    for rule in LOCATION_RULES.iter() {
        for captures in rule.captures_iter(text) {
            let Some(raw) = captures.get(1) else { continue };
            let candidate = clean_candidate(raw.as_str());
            if passes_sanity(&candidate) {
                debug!(location = %candidate, "location matched by pattern rule");
                return Some(candidate);
            }
        }
    }

    if REMOTE.is_match(text) {
        return Some("Remote".to_string());
    }

    let raw = GAZETTEER_RULE.captures(text)?.get(1)?;
    let candidate = clean_candidate(raw.as_str());
    passes_sanity(&candidate).then(|| {
        debug!(location = %candidate, "location matched by gazetteer");
        candidate
    })
}

fn passes_sanity(candidate: &str) -> bool {
    let len = candidate.chars().count();
    len > MIN_LEN && len <= MAX_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_rule() {
        assert_eq!(
            extract_location("Location: Dhaka, Bangladesh\nSalary: negotiable"),
            Some("Dhaka, Bangladesh".to_string())
        );
        assert_eq!(
            extract_location("Location: Dhaka. Salary: BDT 40,000."),
            Some("Dhaka".to_string())
        );
        assert_eq!(
            extract_location("Job Location: Dhaka (GULSHAN 1)"),
            Some("Dhaka (GULSHAN 1)".to_string())
        );
    }

    #[test]
    fn test_bullet_form() {
        let text = "Job Location\n• Dhaka (Niketon)\n\nMonthly Salary\n• Tk. 22,000";
        assert_eq!(extract_location(text), Some("Dhaka (Niketon)".to_string()));
    }

    #[test]
    fn test_remote() {
        assert_eq!(
            extract_location("This role is fully remote with quarterly meetups"),
            Some("Remote".to_string())
        );
        assert_eq!(
            extract_location("Work from home position for designers"),
            Some("Remote".to_string())
        );
    }

    #[test]
    fn test_gazetteer() {
        assert_eq!(
            extract_location("Our office sits in Gulshan, Dhaka near the lake"),
            Some("Gulshan, Dhaka".to_string())
        );
        assert_eq!(
            extract_location("Based out of Niketon since 2019"),
            Some("Niketon".to_string())
        );
    }

    #[test]
    fn test_no_location() {
        assert_eq!(extract_location("A posting with no place mentioned"), None);
    }
}
