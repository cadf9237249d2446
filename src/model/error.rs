//! Quiz client error types
//!
//! Every failure the loaders, tracker, and submitter can hit.

use thiserror::Error;

/// Errors that can occur while fetching, tracking, or grading a quiz
#[derive(Error, Debug)]
pub enum QuizError {
    /// The request never produced a response (connection refused, timeout, CORS)
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body was not the JSON we expected
    #[error("Decode error: {0}")]
    Decode(String),

    /// The selected section is not in the grouping index
    #[error("Unknown quiz group: {0}")]
    UnknownGroup(String),

    /// An operation needed a quiz but none has been loaded
    #[error("No quiz loaded")]
    NoQuizLoaded,

    /// Answer index past the end of the loaded quiz
    #[error("Prompt {index} out of range ({count} prompts)")]
    PromptOutOfRange { index: usize, count: usize },

    /// The submission would be rejected by the grading endpoint
    #[error("Invalid submission: {0}")]
    InvalidSubmission(String),

    /// The grading response breaks its own constraints
    #[error("Invalid grade result: {0}")]
    InvalidResult(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl QuizError {
    /// Build a status error, preferring the server's error message when the body carries one
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<super::ApiErrorBody>(body)
            .map(|b| b.message)
            .unwrap_or_else(|_| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    "request failed".to_string()
                } else {
                    trimmed.to_string()
                }
            });
        QuizError::Status { status, message }
    }
}

impl From<serde_json::Error> for QuizError {
    fn from(err: serde_json::Error) -> Self {
        QuizError::Decode(err.to_string())
    }
}

/// Result type alias for quiz operations
pub type QuizResult<T> = Result<T, QuizError>;
