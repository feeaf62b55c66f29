pub mod parser;
pub mod pipeline;
pub mod report;

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ReviewError;

/// A schema-checked review request: the code under review plus the blunt
/// comments to rewrite. Read once from input, never mutated afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewRequest {
    pub code_snippet: String,
    pub review_comments: Vec<String>,
}

impl ReviewRequest {
    pub fn from_file(path: &Path) -> Result<Self, ReviewError> {
        let contents = fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ReviewError::InputNotFound(path.to_path_buf())
            } else {
                ReviewError::InputUnreadable {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        Self::from_json_str(&contents)
    }

    /// Decodes in two stages so that malformed JSON and a valid-but-wrong
    /// shape surface as distinct errors.
    pub fn from_json_str(raw: &str) -> Result<Self, ReviewError> {
        let value: serde_json::Value =
            serde_json::from_str(raw).map_err(ReviewError::InputMalformed)?;
        Self::from_value(value)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, ReviewError> {
        serde_json::from_value(value).map_err(ReviewError::SchemaInvalid)
    }
}

/// The four structured fields extracted from one generated reply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackItem {
    pub positive_rephrasing: String,
    pub why: String,
    pub suggestion: String,
    pub resource_links: Vec<String>,
}

impl FeedbackItem {
    /// In-band placeholder produced when the generation call fails: every
    /// text field carries the error description, links stay empty.
    pub fn error_marker(description: &str) -> Self {
        let marker = format!("[Error: {}]", description);
        Self {
            positive_rephrasing: marker.clone(),
            why: marker.clone(),
            suggestion: marker,
            resource_links: Vec::new(),
        }
    }
}
