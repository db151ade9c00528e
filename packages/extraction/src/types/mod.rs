//! Core data types.

pub mod config;
pub mod field;
pub mod record;

pub use config::ExtractorConfig;
pub use field::FieldKind;
pub use record::JobRecord;
