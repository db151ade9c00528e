//! Configuration for the extraction pipeline.

use std::str::FromStr;
use std::time::Duration;

use chrono_tz::Tz;

use crate::error::{ExtractionError, Result};

/// Process-wide extraction configuration.
///
/// Built once, read-only afterwards; every extraction call shares it.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Timezone all deadlines and timestamps are anchored to.
    pub timezone: Tz,

    /// Maximum source characters included in a model prompt.
    ///
    /// Bounds cost and latency; longer postings are truncated.
    pub prompt_char_budget: usize,

    /// Uniform timeout applied to every model invocation.
    pub model_timeout: Duration,

    /// Sampling temperature for model calls.
    ///
    /// Kept low to favor deterministic field extraction.
    pub temperature: f32,

    /// Upper bound on tokens generated per model call.
    pub max_tokens: u32,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            timezone: Tz::Asia__Dhaka,
            prompt_char_budget: 5000,
            model_timeout: Duration::from_secs(30),
            temperature: 0.1,
            max_tokens: 256,
        }
    }
}

impl ExtractorConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timezone.
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    /// Set the timezone from an IANA identifier (e.g. `"Asia/Dhaka"`).
    pub fn with_timezone_name(self, name: &str) -> Result<Self> {
        let timezone = Tz::from_str(name)
            .map_err(|_| ExtractionError::InvalidTimezone(name.to_string()))?;
        Ok(self.with_timezone(timezone))
    }

    /// Set the prompt character budget.
    pub fn with_prompt_char_budget(mut self, budget: usize) -> Self {
        self.prompt_char_budget = budget;
        self
    }

    /// Set the per-call model timeout.
    pub fn with_model_timeout(mut self, timeout: Duration) -> Self {
        self.model_timeout = timeout;
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the generation token bound.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExtractorConfig::default();
        assert_eq!(config.timezone, Tz::Asia__Dhaka);
        assert_eq!(config.prompt_char_budget, 5000);
        assert_eq!(config.model_timeout, Duration::from_secs(30));
        assert_eq!(config.max_tokens, 256);
    }

    #[test]
    fn test_with_timezone_name() {
        let config = ExtractorConfig::new()
            .with_timezone_name("Europe/Berlin")
            .unwrap();
        assert_eq!(config.timezone, Tz::Europe__Berlin);
    }

    #[test]
    fn test_with_timezone_name_rejects_unknown() {
        let result = ExtractorConfig::new().with_timezone_name("Mars/Olympus");
        assert!(matches!(
            result,
            Err(ExtractionError::InvalidTimezone(name)) if name == "Mars/Olympus"
        ));
    }

    #[test]
    fn test_builder_chain() {
        let config = ExtractorConfig::new()
            .with_prompt_char_budget(1000)
            .with_model_timeout(Duration::from_secs(5))
            .with_temperature(0.0)
            .with_max_tokens(64);
        assert_eq!(config.prompt_char_budget, 1000);
        assert_eq!(config.model_timeout, Duration::from_secs(5));
        assert_eq!(config.temperature, 0.0);
        assert_eq!(config.max_tokens, 64);
    }
}
