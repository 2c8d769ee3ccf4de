use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use quiz_core::model::QuestionSet;

use crate::error::ProviderError;
use crate::questions::fallback::fallback_questions;
use crate::questions::generator::{QuestionGenerator, QuestionRequest};
use crate::questions::payload::parse_question_payload;

/// Source of the question set for a new session.
///
/// Implementations recover from ordinary generation failures themselves;
/// an `Err` here means the provider could not produce anything at all.
#[async_trait]
pub trait QuestionProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns `ProviderError` only for failures the provider cannot absorb.
    async fn fetch(&self) -> Result<QuestionSet, ProviderError>;
}

/// Asks a generator for fresh questions and falls back to the bundled set
/// when the call fails or the payload does not validate.
#[derive(Clone)]
pub struct GeneratedQuestionProvider {
    generator: Arc<dyn QuestionGenerator>,
    request: QuestionRequest,
}

impl GeneratedQuestionProvider {
    #[must_use]
    pub fn new(generator: Arc<dyn QuestionGenerator>) -> Self {
        Self {
            generator,
            request: QuestionRequest::default(),
        }
    }

    #[must_use]
    pub fn with_request(mut self, request: QuestionRequest) -> Self {
        self.request = request;
        self
    }
}

#[async_trait]
impl QuestionProvider for GeneratedQuestionProvider {
    async fn fetch(&self) -> Result<QuestionSet, ProviderError> {
        let text = match self.generator.generate(&self.request).await {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "question generation failed, using fallback questions");
                return fallback_questions();
            }
        };

        match parse_question_payload(&text, self.request.count) {
            Ok(set) => {
                info!(count = set.len(), "accepted generated questions");
                Ok(set)
            }
            Err(err) => {
                warn!(error = %err, "generated questions rejected, using fallback questions");
                fallback_questions()
            }
        }
    }
}
