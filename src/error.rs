use std::path::PathBuf;
use thiserror::Error;

/// Fatal error kinds. Each one aborts the run with a one-line message and a
/// non-zero exit status before a report is produced. A failed generation
/// call is not listed here: it is recovered per comment and embedded into
/// the report as an error-marker feedback item.
#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("error reading input file {}: {}", .path.display(), .source)]
    InputUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("input is not valid JSON: {0}")]
    InputMalformed(#[source] serde_json::Error),

    #[error("invalid input format: must contain 'code_snippet' (string) and 'review_comments' (list of strings)")]
    SchemaInvalid(#[source] serde_json::Error),

    #[error("Gemini API key not provided; use --api-key or set GEMINI_API_KEY")]
    CredentialMissing,

    #[error("no input provided; use --input or --input-string")]
    InputMissing,

    #[error("error writing output file {}: {}", .path.display(), .source)]
    OutputWriteFailure {
        path: PathBuf,
        source: std::io::Error,
    },
}
