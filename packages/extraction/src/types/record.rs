//! The extraction result record.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A structured job posting produced by the extraction pipeline.
///
/// Immutable after construction. A field is `None` only when both the model
/// backend and the pattern rules failed to produce a validated value for it;
/// it is never an empty string. Identity (row numbering, dedup) belongs to
/// the storage layer, not to this record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    /// Employer or organization name.
    pub company: Option<String>,

    /// Job title.
    pub position: Option<String>,

    /// Workplace location ("Remote" for remote roles).
    pub location: Option<String>,

    /// Salary or compensation details, currency included.
    pub salary: Option<String>,

    /// One-to-two sentence role summary. Model-only; no pattern fallback.
    pub description: Option<String>,

    /// Application deadline, resolved to a timezone-aware instant.
    ///
    /// `None` means "not determined", never a sentinel value.
    pub deadline: Option<DateTime<FixedOffset>>,

    /// Source URL, passed through unmodified.
    pub url: Option<String>,

    /// When this record was assembled, in the configured timezone.
    pub extracted_at: DateTime<FixedOffset>,
}

impl JobRecord {
    /// Whole days until the deadline relative to `now`.
    ///
    /// Negative once the deadline has passed; `None` when no deadline was
    /// determined.
    pub fn days_left(&self, now: DateTime<FixedOffset>) -> Option<i64> {
        self.deadline.map(|deadline| (deadline - now).num_days())
    }

    /// True when nothing besides the timestamp was extracted.
    pub fn is_empty(&self) -> bool {
        self.company.is_none()
            && self.position.is_none()
            && self.location.is_none()
            && self.salary.is_none()
            && self.description.is_none()
            && self.deadline.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(6 * 3600)
            .unwrap()
            .with_ymd_and_hms(y, m, d, 0, 0, 0)
            .unwrap()
    }

    fn record_with_deadline(deadline: Option<DateTime<FixedOffset>>) -> JobRecord {
        JobRecord {
            company: None,
            position: None,
            location: None,
            salary: None,
            description: None,
            deadline,
            url: None,
            extracted_at: at(2026, 1, 1),
        }
    }

    #[test]
    fn test_days_left() {
        let record = record_with_deadline(Some(at(2026, 2, 15)));
        assert_eq!(record.days_left(at(2026, 2, 12)), Some(3));
        assert_eq!(record.days_left(at(2026, 2, 15)), Some(0));
        assert_eq!(record.days_left(at(2026, 2, 17)), Some(-2));
    }

    #[test]
    fn test_days_left_without_deadline() {
        let record = record_with_deadline(None);
        assert_eq!(record.days_left(at(2026, 2, 12)), None);
    }

    #[test]
    fn test_is_empty() {
        assert!(record_with_deadline(None).is_empty());
        assert!(!record_with_deadline(Some(at(2026, 2, 15))).is_empty());

        let mut record = record_with_deadline(None);
        record.company = Some("Acme".to_string());
        assert!(!record.is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let record = record_with_deadline(Some(at(2026, 2, 15)));
        let json = serde_json::to_string(&record).unwrap();
        let back: JobRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
