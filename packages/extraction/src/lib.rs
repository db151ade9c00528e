//! Job-Posting Field Extraction
//!
//! Extracts structured facts (company, title, deadline, salary, location,
//! summary) from unstructured job-posting text, combining deterministic
//! regex rules with opportunistic per-field LLM calls.
//!
//! # Design Philosophy
//!
//! **Patterns are the floor, models are the ceiling.**
//!
//! - Regex deadline extraction always runs first and is kept as a fallback
//! - Each field gets its own independent model call — no multi-field JSON
//! - Every failure degrades field-by-field to pattern extraction
//! - [`ExtractionPipeline::extract`] is total: it always returns a record
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use jobtrack_extraction::{ExtractionPipeline, ExtractorConfig, GeminiBackend};
//!
//! // Pattern-only (no LLM configured)
//! let pipeline = ExtractionPipeline::new(ExtractorConfig::default());
//!
//! // With a model backend and pattern fallback
//! let backend = Arc::new(GeminiBackend::from_env()?);
//! let pipeline = ExtractionPipeline::with_backend(ExtractorConfig::default(), backend);
//!
//! let record = pipeline.extract(posting_text, Some("https://example.com/job")).await;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - The [`ModelBackend`] abstraction
//! - [`types`] - [`JobRecord`], [`FieldKind`], [`ExtractorConfig`]
//! - [`dates`] - Future-biased date resolution in a fixed IANA zone
//! - [`patterns`] - Per-field regex rule sets with sanity filters
//! - [`pipeline`] - Per-field agent calls and orchestration
//! - [`backends`] - Gemini reference backend
//! - [`reminder`] - Pure deadline reminder policy
//! - [`security`] - Credential handling
//! - [`testing`] - [`MockBackend`] for tests

pub mod backends;
pub mod dates;
pub mod error;
pub mod patterns;
pub mod pipeline;
pub mod reminder;
pub mod security;
pub mod testing;
pub mod traits;
pub mod types;
pub mod util;

// Re-export core types at crate root
pub use backends::GeminiBackend;
pub use dates::DateResolver;
pub use error::{BackendError, ExtractionError};
pub use pipeline::{ExtractionPipeline, FieldAgent};
pub use reminder::{Reminder, ReminderPolicy};
pub use testing::MockBackend;
pub use traits::{BackendStatus, GenerateOptions, ModelBackend};
pub use types::{ExtractorConfig, FieldKind, JobRecord};
