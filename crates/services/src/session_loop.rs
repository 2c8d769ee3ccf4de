use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use quiz_core::model::QuestionSet;
use quiz_core::session::QuizSession;

use crate::error::{ProviderError, QuizLoopError};
use crate::questions::QuestionProvider;

const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Drives the registration → quiz transition around a question provider.
///
/// The session itself never awaits; callers either use `start`, or split it
/// into `QuizSession::begin_start`, `fetch_questions` and `apply_fetch` when
/// the session lives behind a reactive handle that must not be held across
/// the fetch.
#[derive(Clone)]
pub struct QuizLoopService {
    provider: Arc<dyn QuestionProvider>,
    fetch_timeout: Duration,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(provider: Arc<dyn QuestionProvider>) -> Self {
        Self {
            provider,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_fetch_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }

    /// Fetch a question set, bounded by the fetch timeout.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::TimedOut` if the provider does not finish in
    /// time, or whatever unrecoverable error the provider reports.
    pub async fn fetch_questions(&self) -> Result<QuestionSet, ProviderError> {
        debug!(timeout = ?self.fetch_timeout, "fetching questions");
        tokio::time::timeout(self.fetch_timeout, self.provider.fetch())
            .await
            .map_err(|_| ProviderError::TimedOut(self.fetch_timeout))?
    }

    /// Finish a start transition with the outcome of `fetch_questions`.
    ///
    /// On failure the session is returned to an idle registration screen with
    /// the entered profile intact.
    ///
    /// # Errors
    ///
    /// Returns the provider error, or a `SessionError` if no start was pending.
    pub fn apply_fetch(
        session: &mut QuizSession,
        fetched: Result<QuestionSet, ProviderError>,
    ) -> Result<(), QuizLoopError> {
        match fetched {
            Ok(questions) => {
                let count = questions.len();
                session.complete_start(questions)?;
                debug!(count, "quiz started");
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "question fetch failed, start aborted");
                session.abort_start();
                Err(err.into())
            }
        }
    }

    /// Run the whole start transition on `session`.
    ///
    /// # Errors
    ///
    /// Returns `QuizLoopError::Session` when the start guard rejects the
    /// action, or `QuizLoopError::Provider` when the fetch fails.
    pub async fn start(&self, session: &mut QuizSession) -> Result<(), QuizLoopError> {
        session.begin_start()?;
        let fetched = self.fetch_questions().await;
        Self::apply_fetch(session, fetched)
    }
}
