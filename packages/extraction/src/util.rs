//! Small text and URL helpers shared across the pipeline.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // Avoids trailing punctuation and bracket/quote characters.
    Regex::new(r#"https?://[^\s<>"{}|\\^`\[\]]+"#).expect("url regex")
});

/// Keywords whose density marks a text as a probable job posting.
const JOB_KEYWORDS: [&str; 24] = [
    "job title",
    "position",
    "company",
    "responsibilities",
    "requirements",
    "qualifications",
    "salary",
    "apply",
    "deadline",
    "hiring",
    "vacancy",
    "career",
    "role",
    "work experience",
    "education",
    "skills required",
    "employment",
    "job description",
    "compensation",
    "benefits",
    "workplace",
    "office",
    "intern",
    "internship",
];

/// Collapse whitespace runs and cap the result at `max_len` characters,
/// appending `...` when truncated.
pub fn sanitize(text: &str, max_len: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_len {
        return collapsed;
    }
    let kept: String = collapsed
        .chars()
        .take(max_len.saturating_sub(3))
        .collect();
    format!("{}...", kept.trim_end())
}

/// Truncate to a character budget without splitting a code point.
pub fn truncate_chars(text: &str, budget: usize) -> &str {
    match text.char_indices().nth(budget) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

/// First http(s) URL in the text, trailing punctuation stripped.
pub fn extract_url(text: &str) -> Option<String> {
    let found = URL_PATTERN.find(text)?;
    let url = found
        .as_str()
        .trim_end_matches(['.', ',', ';', ':', '!', '?', ')']);
    (!url.is_empty()).then(|| url.to_string())
}

/// Validate that a string is an absolute http(s) URL with a host.
pub fn is_valid_url(candidate: &str) -> bool {
    Url::parse(candidate)
        .map(|url| url.has_host() && matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Heuristic: does this text read like a job description?
///
/// Over 100 characters and at least three hits from the job keyword list.
pub fn looks_like_job_posting(text: &str) -> bool {
    if text.len() <= 100 {
        return false;
    }
    let lower = text.to_lowercase();
    JOB_KEYWORDS
        .iter()
        .filter(|keyword| lower.contains(*keyword))
        .count()
        >= 3
}
