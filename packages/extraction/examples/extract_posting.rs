//! Run the extraction pipeline over a sample posting.
//!
//! With `GEMINI_API_KEY` set, field extraction goes through Gemini with
//! pattern fallback; otherwise the pipeline runs pattern-only.
//!
//! ```sh
//! cargo run --example extract_posting
//! ```

use std::sync::Arc;

use jobtrack_extraction::{ExtractionPipeline, ExtractorConfig, GeminiBackend};

const SAMPLE: &str = "\
Frontend Developer Position

Company: Tech Solutions Ltd
Location: Dhaka, Bangladesh
Salary: Tk. 50,000 - 60,000 per month

We are hiring a React developer to join our platform team.
Experience: 2-3 years preferred.

Application deadline: 15/02/2027
";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jobtrack_extraction=debug".into()),
        )
        .init();

    let config = ExtractorConfig::default();
    let pipeline = match GeminiBackend::from_env() {
        Ok(backend) => {
            println!("Using Gemini backend with pattern fallback\n");
            ExtractionPipeline::with_backend(config, Arc::new(backend))
        }
        Err(_) => {
            println!("GEMINI_API_KEY not set, running pattern-only\n");
            ExtractionPipeline::new(config)
        }
    };

    let record = pipeline
        .extract(SAMPLE, Some("https://example.com/jobs/frontend"))
        .await;

    println!("{}", serde_json::to_string_pretty(&record).expect("record serializes"));
}
