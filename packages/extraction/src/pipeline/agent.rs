//! Single-field model queries.

use std::sync::Arc;

use chrono::DateTime;
use chrono_tz::Tz;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::dates::DateResolver;
use crate::pipeline::prompts::{self, NOT_FOUND};
use crate::traits::{GenerateOptions, ModelBackend};
use crate::types::{ExtractorConfig, FieldKind};
use crate::util;

/// Asks the model backend for one field at a time.
///
/// Calls are independent: no shared conversation state, no cross-field
/// context beyond the same source text. Every failure — timeout, transport,
/// auth, malformed output — degrades to `None` so the pipeline can fall back
/// to pattern rules without this field.
pub struct FieldAgent {
    backend: Arc<dyn ModelBackend>,
    config: ExtractorConfig,
}

impl FieldAgent {
    /// Create an agent over a backend.
    pub fn new(backend: Arc<dyn ModelBackend>, config: ExtractorConfig) -> Self {
        Self { backend, config }
    }

    /// Query one field; `None` means not found or any backend failure.
    pub async fn ask(&self, field: FieldKind, text: &str) -> Option<String> {
        let raw = self.generate(field, text).await?;
        clean_response(&raw, field)
    }

    /// Deadline variant: the raw answer is parsed through the resolver.
    ///
    /// Model answers carry a full date (the prompt demands YYYY-MM-DD), so
    /// no future bias is applied here.
    pub async fn ask_deadline(
        &self,
        text: &str,
        resolver: &DateResolver,
        now: DateTime<Tz>,
    ) -> Option<DateTime<Tz>> {
        let raw = self.generate(FieldKind::Deadline, text).await?;
        let value = clean_response(&raw, FieldKind::Deadline)?;
        let resolved = resolver.resolve_at(&value, false, now);
        if resolved.is_none() {
            debug!(%value, "model deadline answer failed to resolve");
        }
        resolved
    }

    async fn generate(&self, field: FieldKind, text: &str) -> Option<String> {
        let sample = util::truncate_chars(text, self.config.prompt_char_budget);
        let prompt = prompts::format_field_prompt(field, sample);
        let options = GenerateOptions {
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        match timeout(self.config.model_timeout, self.backend.generate(&prompt, &options)).await {
            Ok(Ok(raw)) => Some(raw),
            Ok(Err(error)) => {
                warn!(field = %field, %error, "backend call failed, degrading to patterns");
                None
            }
            Err(_) => {
                warn!(field = %field, "backend call timed out, degrading to patterns");
                None
            }
        }
    }
}

/// Trim, unfence, and validate a raw model response.
///
/// Takes the first non-empty line so stray trailing commentary does not
/// poison the value; anything over the field's length ceiling is malformed.
fn clean_response(raw: &str, field: FieldKind) -> Option<String> {
    let value = raw
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with("```"))?
        .trim_matches(['"', '\''])
        .trim();

    if value.is_empty() {
        return None;
    }
    if value.eq_ignore_ascii_case(NOT_FOUND)
        || value.eq_ignore_ascii_case("null")
        || value.eq_ignore_ascii_case("none")
    {
        return None;
    }
    if value.chars().count() > field.max_len() {
        warn!(
            field = %field,
            len = value.chars().count(),
            "model response exceeds field ceiling, treating as malformed"
        );
        return None;
    }
    Some(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_response_trims_and_unquotes() {
        assert_eq!(
            clean_response("  \"Acme Corporation\"  \n", FieldKind::Company),
            Some("Acme Corporation".to_string())
        );
    }

    #[test]
    fn test_clean_response_strips_fences() {
        assert_eq!(
            clean_response("```\nDhaka\n```", FieldKind::Location),
            Some("Dhaka".to_string())
        );
    }

    #[test]
    fn test_clean_response_sentinels() {
        for raw in ["NOT_FOUND", "not_found", "null", "None", "", "   "] {
            assert_eq!(clean_response(raw, FieldKind::Company), None, "raw: {raw}");
        }
    }

    #[test]
    fn test_clean_response_rejects_overlong() {
        let rambling = "word ".repeat(100);
        assert_eq!(clean_response(&rambling, FieldKind::Company), None);
    }

    #[test]
    fn test_clean_response_takes_first_line() {
        let raw = "Backend Engineer\nThis title appears in the heading.";
        assert_eq!(
            clean_response(raw, FieldKind::Position),
            Some("Backend Engineer".to_string())
        );
    }
}
