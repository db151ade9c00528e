//! Extraction pipeline — the core of the crate.
//!
//! The pipeline orchestrates:
//! - the deterministic deadline floor (regex, always run first)
//! - independent per-field model calls through [`FieldAgent`]
//! - per-field fallback to pattern rules
//! - record assembly (sanitation, timestamps, URL passthrough)

pub mod agent;
pub mod extract;
pub mod prompts;

pub use agent::FieldAgent;
pub use extract::ExtractionPipeline;
pub use prompts::{format_field_prompt, template, NOT_FOUND};
