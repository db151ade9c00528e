//! Pipeline orchestration: pattern floor, per-field model calls, fallbacks.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::dates::DateResolver;
use crate::patterns;
use crate::pipeline::agent::FieldAgent;
use crate::traits::{BackendStatus, ModelBackend};
use crate::types::{ExtractorConfig, FieldKind, JobRecord};
use crate::util;

/// Cached outcome of the backend capability probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProbeState {
    Unknown,
    Available,
    Failed,
}

/// The extraction pipeline — the crate's sole public operation.
///
/// Stateless per call apart from the read-only configuration and the probe
/// cache. The backend is an explicit dependency injected at construction,
/// so tests can swap in a double.
pub struct ExtractionPipeline {
    config: ExtractorConfig,
    resolver: DateResolver,
    backend: Option<Arc<dyn ModelBackend>>,
    probe: RwLock<ProbeState>,
}

impl ExtractionPipeline {
    /// Pattern-only pipeline: no model backend, pure regex extraction.
    pub fn new(config: ExtractorConfig) -> Self {
        let resolver = DateResolver::new(config.timezone);
        Self {
            config,
            resolver,
            backend: None,
            probe: RwLock::new(ProbeState::Unknown),
        }
    }

    /// Pipeline with a model backend; every field still falls back to
    /// pattern rules when its model call yields nothing.
    pub fn with_backend(config: ExtractorConfig, backend: Arc<dyn ModelBackend>) -> Self {
        let resolver = DateResolver::new(config.timezone);
        Self {
            config,
            resolver,
            backend: Some(backend),
            probe: RwLock::new(ProbeState::Unknown),
        }
    }

    /// The shared configuration.
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract a [`JobRecord`] from posting text.
    ///
    /// Total: never fails. Worst case is a record with every field `None`
    /// except `extracted_at`.
    pub async fn extract(&self, text: &str, url: Option<&str>) -> JobRecord {
        let now = Utc::now().with_timezone(&self.config.timezone);

        // Regex deadlines are a trustworthy floor, kept regardless of what
        // the model finds later.
        let pattern_deadline = patterns::extract_deadline(text, &self.resolver, now);

        let mut company = None;
        let mut position = None;
        let mut location = None;
        let mut salary = None;
        let mut description = None;
        let mut deadline = None;

        if let Some(agent) = self.agent().await {
            // One independent call per field; a failure in any of them
            // leaves the others untouched.
            let (c, p, l, s, d, dl) = futures::join!(
                agent.ask(FieldKind::Company, text),
                agent.ask(FieldKind::Position, text),
                agent.ask(FieldKind::Location, text),
                agent.ask(FieldKind::Salary, text),
                agent.ask(FieldKind::Description, text),
                agent.ask_deadline(text, &self.resolver, now),
            );
            company = c;
            position = p;
            location = l;
            salary = s;
            description = d;
            deadline = dl;
        }

        // Per-field pattern fallback; description has no deterministic rule
        // and may stay empty.
        let company = company.or_else(|| patterns::extract_company(text));
        let position = position.or_else(|| patterns::extract_position(text));
        let location = location.or_else(|| patterns::extract_location(text));
        let salary = salary.or_else(|| patterns::extract_salary(text));
        let deadline = deadline.or(pattern_deadline);

        debug!(
            company = company.is_some(),
            position = position.is_some(),
            location = location.is_some(),
            salary = salary.is_some(),
            deadline = deadline.is_some(),
            "extraction assembled"
        );

        JobRecord {
            company: finalize(company, FieldKind::Company),
            position: finalize(position, FieldKind::Position),
            location: finalize(location, FieldKind::Location),
            salary: finalize(salary, FieldKind::Salary),
            description: finalize(description, FieldKind::Description),
            deadline: deadline.map(|d| d.fixed_offset()),
            url: url.map(str::to_string),
            extracted_at: now.fixed_offset(),
        }
    }

    /// Build an agent when a backend is configured and the cached probe
    /// reports it available.
    async fn agent(&self) -> Option<FieldAgent> {
        let backend = self.backend.as_ref()?;
        if !self.backend_available(backend).await {
            return None;
        }
        Some(FieldAgent::new(Arc::clone(backend), self.config.clone()))
    }

    /// Availability check with a process-lifetime cache: a successful probe
    /// is never repeated, a failed one is retried on the next call.
    async fn backend_available(&self, backend: &Arc<dyn ModelBackend>) -> bool {
        if *self.probe.read().await == ProbeState::Available {
            return true;
        }

        match backend.probe().await {
            BackendStatus::Available => {
                *self.probe.write().await = ProbeState::Available;
                info!("model backend available");
                true
            }
            BackendStatus::Unavailable { reason } => {
                warn!(%reason, "model backend unavailable, using pattern extraction only");
                *self.probe.write().await = ProbeState::Failed;
                false
            }
        }
    }
}

/// Collapse whitespace and cap the value; empty results are dropped so a
/// field is never an empty string.
fn finalize(value: Option<String>, field: FieldKind) -> Option<String> {
    value
        .map(|v| util::sanitize(&v, field.max_len()))
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockBackend;

    const POSTING: &str = "\
Company: Tech Solutions Ltd
Position: Frontend Developer
Location: Dhaka, Bangladesh
Salary: Tk. 50,000 - 60,000
Deadline: 15/02/2099
";

    #[tokio::test]
    async fn test_pattern_only_extraction() {
        let pipeline = ExtractionPipeline::new(ExtractorConfig::default());
        let record = pipeline.extract(POSTING, None).await;

        assert_eq!(record.company.as_deref(), Some("Tech Solutions Ltd"));
        assert_eq!(record.position.as_deref(), Some("Frontend Developer"));
        assert_eq!(record.location.as_deref(), Some("Dhaka, Bangladesh"));
        assert_eq!(record.salary.as_deref(), Some("Tk. 50,000 - 60,000"));
        assert!(record.deadline.is_some());
        assert_eq!(record.description, None);
    }

    #[tokio::test]
    async fn test_agent_results_win_over_patterns() {
        let backend = MockBackend::new()
            .with_response(FieldKind::Company, "Tech Solutions Limited")
            .with_response(FieldKind::Description, "Frontend work on a React stack.");
        let pipeline =
            ExtractionPipeline::with_backend(ExtractorConfig::default(), Arc::new(backend));

        let record = pipeline.extract(POSTING, None).await;
        assert_eq!(record.company.as_deref(), Some("Tech Solutions Limited"));
        assert_eq!(
            record.description.as_deref(),
            Some("Frontend work on a React stack.")
        );
        // Fields the mock answered NOT_FOUND for fall back to patterns.
        assert_eq!(record.position.as_deref(), Some("Frontend Developer"));
    }

    #[tokio::test]
    async fn test_field_failure_falls_back_without_blocking_others() {
        let backend = MockBackend::new()
            .with_response(FieldKind::Position, "Senior Frontend Developer")
            .failing_on(FieldKind::Company)
            .failing_on(FieldKind::Salary);
        let pipeline =
            ExtractionPipeline::with_backend(ExtractorConfig::default(), Arc::new(backend));

        let record = pipeline.extract(POSTING, None).await;
        // Failed fields degrade to pattern values.
        assert_eq!(record.company.as_deref(), Some("Tech Solutions Ltd"));
        assert_eq!(record.salary.as_deref(), Some("Tk. 50,000 - 60,000"));
        // The healthy field keeps its model value.
        assert_eq!(record.position.as_deref(), Some("Senior Frontend Developer"));
    }

    #[tokio::test]
    async fn test_unavailable_backend_degrades_to_patterns() {
        let backend = Arc::new(MockBackend::unavailable("connection refused"));
        let dyn_backend: Arc<dyn ModelBackend> = Arc::clone(&backend) as Arc<dyn ModelBackend>;
        let pipeline =
            ExtractionPipeline::with_backend(ExtractorConfig::default(), dyn_backend);

        let record = pipeline.extract(POSTING, None).await;
        assert_eq!(record.company.as_deref(), Some("Tech Solutions Ltd"));
        // No generation call should ever have been attempted.
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_probe_is_cached_after_success() {
        let backend = Arc::new(MockBackend::new());
        let dyn_backend: Arc<dyn ModelBackend> = Arc::clone(&backend) as Arc<dyn ModelBackend>;
        let pipeline =
            ExtractionPipeline::with_backend(ExtractorConfig::default(), dyn_backend);

        pipeline.extract(POSTING, None).await;
        pipeline.extract(POSTING, None).await;
        assert_eq!(backend.probes(), 1);
    }

    #[tokio::test]
    async fn test_url_passthrough_and_timestamp() {
        let pipeline = ExtractionPipeline::new(ExtractorConfig::default());
        let record = pipeline
            .extract(POSTING, Some("https://example.com/jobs/1"))
            .await;
        assert_eq!(record.url.as_deref(), Some("https://example.com/jobs/1"));
        // extracted_at carries the configured zone's offset (+06:00 Dhaka).
        assert_eq!(record.extracted_at.offset().local_minus_utc(), 6 * 3600);
    }

    #[tokio::test]
    async fn test_empty_input_yields_empty_record() {
        let pipeline = ExtractionPipeline::new(ExtractorConfig::default());
        let record = pipeline.extract("", None).await;
        assert!(record.is_empty());
    }
}
