//! Deadline date resolution.
//!
//! Turns free-text date phrases into absolute instants anchored to one fixed
//! IANA timezone, with future-biased disambiguation for yearless input.
//! Resolution is total: any failure is `None`, never a panic or an error.

use std::sync::LazyLock;

use chrono::format::{parse as chrono_parse, Parsed, StrftimeItems};
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use regex::Regex;
use tracing::debug;

/// Formats carrying an explicit year, most common first. Day-first numeric
/// forms are tried before month-first so `15/02/2026` reads as 15 February.
const EXPLICIT_FORMATS: [&str; 13] = [
    "%Y-%m-%d",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%d/%m/%y",
    "%d-%m-%y",
    "%d.%m.%y",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%d %B %Y",
    "%d %B, %Y",
    "%B %d, %Y",
    "%B %d %Y",
];

/// Month/day-only formats; the year is supplied by the resolver.
const YEARLESS_FORMATS: [&str; 2] = ["%d %B", "%B %d"];

static ORDINAL_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d{1,2})(?:st|nd|rd|th)\b").expect("ordinal regex"));

/// Resolves natural-language and numeric date phrases.
///
/// Results land at local midnight in the configured zone. With
/// `prefer_future`, yearless phrases that would resolve to the past are
/// advanced to their next occurrence; phrases carrying an explicit year are
/// never adjusted.
#[derive(Debug, Clone)]
pub struct DateResolver {
    tz: Tz,
}

impl DateResolver {
    /// Create a resolver anchored to `tz`.
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// The zone all resolved instants are anchored to.
    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Resolve a date phrase against the current wall clock.
    pub fn resolve(&self, phrase: &str, prefer_future: bool) -> Option<DateTime<Tz>> {
        let now = Utc::now().with_timezone(&self.tz);
        self.resolve_at(phrase, prefer_future, now)
    }

    /// Resolve a date phrase against an explicit "now" anchor.
    ///
    /// The anchor supplies the implied year for yearless input and the
    /// past/future decision for the bias.
    pub fn resolve_at(
        &self,
        phrase: &str,
        prefer_future: bool,
        now: DateTime<Tz>,
    ) -> Option<DateTime<Tz>> {
        let cleaned = normalize(phrase);
        if cleaned.is_empty() {
            return None;
        }

        if let Some(date) = parse_explicit(&cleaned) {
            return self.at_midnight(date);
        }

        let mut date = parse_yearless(&cleaned, now.year())?;
        if prefer_future && date < now.date_naive() {
            date = next_year(date)?;
        }
        debug!(phrase = %cleaned, %date, "resolved yearless date phrase");
        self.at_midnight(date)
    }

    fn at_midnight(&self, date: NaiveDate) -> Option<DateTime<Tz>> {
        self.tz
            .from_local_datetime(&date.and_hms_opt(0, 0, 0)?)
            .earliest()
    }
}

/// Collapse whitespace, drop ordinal suffixes, trim stray punctuation.
fn normalize(phrase: &str) -> String {
    let collapsed = phrase.split_whitespace().collect::<Vec<_>>().join(" ");
    let without_ordinals = ORDINAL_SUFFIX.replace_all(&collapsed, "$1");
    without_ordinals
        .trim_matches(|c: char| matches!(c, ',' | '.' | ';' | ':' | '!' | '?' | '(' | ')' | '"' | '\''))
        .trim()
        .to_string()
}

fn parse_explicit(phrase: &str) -> Option<NaiveDate> {
    EXPLICIT_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(phrase, format).ok())
}

fn parse_yearless(phrase: &str, year: i32) -> Option<NaiveDate> {
    YEARLESS_FORMATS.iter().find_map(|format| {
        let mut parsed = Parsed::new();
        chrono_parse(&mut parsed, phrase, StrftimeItems::new(format)).ok()?;
        parsed.set_year(i64::from(year)).ok()?;
        parsed.to_naive_date().ok()
    })
}

/// Same calendar day one year later. `None` for Feb 29 landing on a
/// non-leap year; the caller skips the candidate.
fn next_year(date: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(date.year() + 1, date.month(), date.day())
}
