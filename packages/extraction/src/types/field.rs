//! Field identities for per-field extraction.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One structured attribute of a job posting.
///
/// Each field is extracted independently: its own prompt, its own pattern
/// rules, its own fallback decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Company,
    Position,
    Location,
    Salary,
    Deadline,
    Description,
}

impl FieldKind {
    /// All fields, in record assembly order.
    pub const ALL: [FieldKind; 6] = [
        FieldKind::Company,
        FieldKind::Position,
        FieldKind::Location,
        FieldKind::Salary,
        FieldKind::Deadline,
        FieldKind::Description,
    ];

    /// Human-readable label used in prompts and logs.
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Company => "company name",
            FieldKind::Position => "job title",
            FieldKind::Location => "location",
            FieldKind::Salary => "salary",
            FieldKind::Deadline => "application deadline",
            FieldKind::Description => "description",
        }
    }

    /// Maximum accepted length (in characters) for a value of this field.
    ///
    /// Model responses over this ceiling are treated as malformed; assembled
    /// record values are truncated to it.
    pub fn max_len(&self) -> usize {
        match self {
            FieldKind::Company | FieldKind::Position | FieldKind::Salary => 150,
            FieldKind::Location | FieldKind::Description => 200,
            FieldKind::Deadline => 40,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
