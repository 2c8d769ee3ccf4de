//! Shared error types for the services crate.

use std::time::Duration;

use thiserror::Error;

use quiz_core::model::QuestionError;
use quiz_core::session::SessionError;

/// Errors emitted by a `QuestionGenerator`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenerationError {
    #[error("question generator is not configured")]
    Disabled,
    #[error("question generator returned an empty response")]
    EmptyResponse,
    #[error("question generator request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Reasons a generated payload was not accepted.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PayloadError {
    #[error("payload is empty")]
    Empty,
    #[error("payload is not a valid question array: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected {expected} questions, got {actual}")]
    Count { expected: usize, actual: usize },
    #[error("question {index} is malformed: {source}")]
    Question {
        index: usize,
        #[source]
        source: QuestionError,
    },
}

/// Failures a question provider cannot recover from on its own.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProviderError {
    #[error("question fetch did not finish within {0:?}")]
    TimedOut(Duration),
    #[error("bundled fallback questions are malformed: {0}")]
    InvalidFallback(String),
    #[error("question provider failed: {0}")]
    Internal(String),
}

/// Errors emitted by `QuizLoopService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizLoopError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Provider(#[from] ProviderError),
}
