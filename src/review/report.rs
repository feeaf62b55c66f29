use crate::review::FeedbackItem;

/// Fixed closing line, identical on every run. The leading newline keeps a
/// blank line between the last feedback block and the summary.
pub const CLOSING_SUMMARY: &str = "\n**Summary:** Great effort overall! Keep learning and improving. Your code shows promise and growth.";

/// The assembled report: one `(original comment, feedback)` pair per input
/// comment, in input order, plus the closing summary.
#[derive(Debug, Clone)]
pub struct ReviewReport {
    pub entries: Vec<(String, FeedbackItem)>,
}

impl ReviewReport {
    /// Pairs comments with their feedback positionally. Both sequences must
    /// have the same length.
    pub fn assemble(comments: &[String], items: Vec<FeedbackItem>) -> Self {
        debug_assert_eq!(comments.len(), items.len());
        Self {
            entries: comments.iter().cloned().zip(items).collect(),
        }
    }

    /// Renders every feedback block plus the summary, joined by single
    /// newlines.
    pub fn to_markdown(&self) -> String {
        let mut blocks: Vec<String> = self
            .entries
            .iter()
            .map(|(comment, item)| render_block(comment, item))
            .collect();
        blocks.push(CLOSING_SUMMARY.to_string());
        blocks.join("\n")
    }
}

fn render_block(comment: &str, item: &FeedbackItem) -> String {
    format!(
        "---\n### Analysis of Comment: \"{comment}\"\n* **Positive Rephrasing:** {rephrasing}\n* **The 'Why':** {why}\n* **Suggested Improvement:**\n```\n{suggestion}\n```\n* **Resources:** {resources}\n---",
        comment = comment,
        rephrasing = item.positive_rephrasing,
        why = item.why,
        suggestion = item.suggestion,
        resources = item.resource_links.join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item(tag: &str) -> FeedbackItem {
        FeedbackItem {
            positive_rephrasing: format!("{tag} rephrasing"),
            why: format!("{tag} why"),
            suggestion: format!("{tag} code"),
            resource_links: vec![
                "https://a.example".to_string(),
                "https://b.example".to_string(),
            ],
        }
    }

    #[test]
    fn one_block_per_comment_plus_one_summary() {
        let comments = vec![
            "Too slow.".to_string(),
            "Bad name.".to_string(),
            "No docs.".to_string(),
        ];
        let items = vec![sample_item("a"), sample_item("b"), sample_item("c")];
        let markdown = ReviewReport::assemble(&comments, items).to_markdown();

        assert_eq!(markdown.matches("### Analysis of Comment:").count(), 3);
        assert_eq!(markdown.matches("**Summary:**").count(), 1);
        assert!(markdown.ends_with("Your code shows promise and growth."));
    }

    #[test]
    fn blocks_preserve_input_order() {
        let comments = vec!["first".to_string(), "second".to_string()];
        let items = vec![sample_item("a"), sample_item("b")];
        let markdown = ReviewReport::assemble(&comments, items).to_markdown();

        let first = markdown.find("Analysis of Comment: \"first\"").unwrap();
        let second = markdown.find("Analysis of Comment: \"second\"").unwrap();
        assert!(first < second);
    }

    #[test]
    fn block_embeds_fields_and_joins_links() {
        let comments = vec!["Messy loop.".to_string()];
        let markdown = ReviewReport::assemble(&comments, vec![sample_item("x")]).to_markdown();

        assert!(markdown.contains("### Analysis of Comment: \"Messy loop.\""));
        assert!(markdown.contains("* **Positive Rephrasing:** x rephrasing"));
        assert!(markdown.contains("* **The 'Why':** x why"));
        assert!(markdown.contains("```\nx code\n```"));
        assert!(markdown.contains("* **Resources:** https://a.example, https://b.example"));
    }

    #[test]
    fn empty_request_still_renders_the_summary() {
        let markdown = ReviewReport::assemble(&[], Vec::new()).to_markdown();
        assert_eq!(markdown, CLOSING_SUMMARY);
    }
}
