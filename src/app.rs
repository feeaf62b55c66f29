use crate::config::Config;
use crate::llm::client::GeminiClient;
use crate::review::pipeline::process_review;
use crate::review::ReviewRequest;
use crate::ui::display::format_info;
use anyhow::Result;

pub struct App {
    client: GeminiClient,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let client = GeminiClient::new(&config)?;

        Ok(Self { client })
    }

    /// Runs the full pipeline for one request and returns the Markdown
    /// report. Per-comment service failures are embedded into the report
    /// rather than propagated, so this only reports progress.
    pub async fn review(&self, request: &ReviewRequest) -> String {
        // Progress goes to stderr so a report printed to stdout stays clean.
        eprintln!(
            "{}",
            format_info(&format!(
                "Rewriting {} review comment(s)...",
                request.review_comments.len()
            ))
        );

        let report = process_review(&self.client, request).await;
        report.to_markdown()
    }
}
