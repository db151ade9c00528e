//! Testing utilities including a mock model backend.
//!
//! Useful for testing applications that use the extraction pipeline without
//! making real LLM calls.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::{BackendError, BackendResult};
use crate::pipeline::prompts::{self, NOT_FOUND};
use crate::traits::{BackendStatus, GenerateOptions, ModelBackend};
use crate::types::FieldKind;

/// A deterministic [`ModelBackend`] for tests.
///
/// Returns canned per-field responses, injects per-field failures, can
/// report itself unavailable at probe time, and tracks calls for
/// assertions. Fields without a canned response answer with the not-found
/// sentinel, which the agent maps to `None`.
#[derive(Default)]
pub struct MockBackend {
    responses: RwLock<HashMap<FieldKind, String>>,
    failures: RwLock<Vec<FieldKind>>,
    unavailable: Option<String>,
    calls: RwLock<Vec<FieldKind>>,
    probes: AtomicUsize,
}

impl MockBackend {
    /// Create a mock that answers every field with the not-found sentinel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock whose probe reports the backend unavailable.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            unavailable: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Canned answer for one field.
    pub fn with_response(self, field: FieldKind, value: impl Into<String>) -> Self {
        self.responses.write().unwrap().insert(field, value.into());
        self
    }

    /// Make one field's generation call fail with an API error.
    pub fn failing_on(self, field: FieldKind) -> Self {
        self.failures.write().unwrap().push(field);
        self
    }

    /// Fields asked for so far, in call order.
    pub fn calls(&self) -> Vec<FieldKind> {
        self.calls.read().unwrap().clone()
    }

    /// How many times the backend was probed.
    pub fn probes(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }

    /// Identify which field a prompt belongs to by its template's first
    /// line (templates are distinct by construction).
    fn classify(prompt: &str) -> Option<FieldKind> {
        FieldKind::ALL.into_iter().find(|field| {
            prompts::template(*field)
                .lines()
                .next()
                .is_some_and(|first_line| prompt.starts_with(first_line))
        })
    }
}

#[async_trait]
impl ModelBackend for MockBackend {
    async fn generate(&self, prompt: &str, _options: &GenerateOptions) -> BackendResult<String> {
        let field = Self::classify(prompt).ok_or_else(|| {
            BackendError::MalformedResponse("prompt matches no known field".to_string())
        })?;
        self.calls.write().unwrap().push(field);

        if self.failures.read().unwrap().contains(&field) {
            return Err(BackendError::Api {
                status: 500,
                message: "mock failure".to_string(),
            });
        }

        Ok(self
            .responses
            .read()
            .unwrap()
            .get(&field)
            .cloned()
            .unwrap_or_else(|| NOT_FOUND.to_string()))
    }

    async fn probe(&self) -> BackendStatus {
        self.probes.fetch_add(1, Ordering::SeqCst);
        match &self.unavailable {
            Some(reason) => BackendStatus::Unavailable {
                reason: reason.clone(),
            },
            None => BackendStatus::Available,
        }
    }
}
