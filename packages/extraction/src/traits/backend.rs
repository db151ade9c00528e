//! Model backend abstraction.
//!
//! The pipeline only needs two capabilities from an LLM provider: a single
//! free-text generation call and a cheap availability probe. Implementations
//! wrap specific providers and handle their wire formats.

use async_trait::async_trait;

use crate::error::BackendResult;

/// Options applied to a single generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateOptions {
    /// Sampling temperature. Low values favor deterministic extraction.
    pub temperature: f32,

    /// Upper bound on generated tokens, capping latency and cost.
    pub max_tokens: u32,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            temperature: 0.1,
            max_tokens: 256,
        }
    }
}

/// Result of a backend capability probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendStatus {
    /// Backend responded and can serve generation calls.
    Available,

    /// Backend cannot be used right now; the reason is kept for logs.
    Unavailable { reason: String },
}

impl BackendStatus {
    /// True for [`BackendStatus::Available`].
    pub fn is_available(&self) -> bool {
        matches!(self, BackendStatus::Available)
    }
}

/// A language-model service capable of free-text generation from a prompt.
#[async_trait]
pub trait ModelBackend: Send + Sync {
    /// Generate a completion for `prompt`.
    async fn generate(&self, prompt: &str, options: &GenerateOptions) -> BackendResult<String>;

    /// Check whether the backend can currently serve calls.
    ///
    /// The pipeline calls this once at first use and caches the answer for
    /// the process lifetime, re-probing only after a failed check.
    async fn probe(&self) -> BackendStatus;
}
