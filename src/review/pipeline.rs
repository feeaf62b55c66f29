use log::{debug, warn};

use crate::llm::client::TextGenerator;
use crate::llm::prompt::PromptBuilder;
use crate::review::parser::parse_response;
use crate::review::report::ReviewReport;
use crate::review::{FeedbackItem, ReviewRequest};

/// Runs every comment through the generator and collects the report.
///
/// Comments are processed sequentially, in input order. A failed generation
/// call is recovered locally: that comment's feedback becomes an
/// error-marker item and the remaining comments still run.
pub async fn process_review(
    generator: &dyn TextGenerator,
    request: &ReviewRequest,
) -> ReviewReport {
    let mut items = Vec::with_capacity(request.review_comments.len());

    for (index, comment) in request.review_comments.iter().enumerate() {
        debug!(
            "Processing comment {}/{}",
            index + 1,
            request.review_comments.len()
        );
        let prompt = PromptBuilder::build_review_prompt(&request.code_snippet, comment);
        let item = match generator.generate(&prompt).await {
            Ok(reply) => parse_response(&reply),
            Err(e) => {
                warn!("Generation failed for comment {}: {:#}", index + 1, e);
                FeedbackItem::error_marker(&format!("{:#}", e))
            }
        };
        items.push(item);
    }

    ReviewReport::assemble(&request.review_comments, items)
}
