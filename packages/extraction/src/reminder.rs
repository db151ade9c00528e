//! Deadline reminder policy.
//!
//! Pure date arithmetic: which records are due a reminder at a given
//! moment. Scheduling and delivery belong to the caller.

use chrono::{DateTime, FixedOffset};

use crate::types::JobRecord;

/// Days-before-deadline offsets that trigger a reminder.
///
/// The default fires three days out, one day out, and on the deadline day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderPolicy {
    days: Vec<i64>,
}

impl Default for ReminderPolicy {
    fn default() -> Self {
        Self { days: vec![3, 1, 0] }
    }
}

impl ReminderPolicy {
    /// Create a policy from explicit day offsets.
    pub fn new(days: impl IntoIterator<Item = i64>) -> Self {
        Self {
            days: days.into_iter().collect(),
        }
    }

    /// The configured day offsets.
    pub fn days(&self) -> &[i64] {
        &self.days
    }

    /// Records due a reminder at `now`, paired with their days-left value.
    ///
    /// Records without a deadline are skipped.
    pub fn due<'a>(&self, records: &'a [JobRecord], now: DateTime<FixedOffset>) -> Vec<Reminder<'a>> {
        records
            .iter()
            .filter_map(|record| {
                let days_left = record.days_left(now)?;
                self.days
                    .contains(&days_left)
                    .then_some(Reminder { record, days_left })
            })
            .collect()
    }
}

/// A single due reminder.
#[derive(Debug, Clone, Copy)]
pub struct Reminder<'a> {
    /// The record whose deadline is approaching.
    pub record: &'a JobRecord,

    /// Whole days until the deadline (0 on the deadline day).
    pub days_left: i64,
}
