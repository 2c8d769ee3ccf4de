use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::questions::{GeminiConfig, GeminiGenerator, GeneratedQuestionProvider};
use crate::session_loop::QuizLoopService;

/// Headroom between the HTTP request timeout and the outer fetch timeout, so
/// a slow request still ends in the fallback rather than an aborted start.
const FETCH_GRACE: Duration = Duration::from_secs(10);

/// Assembles app-facing services.
#[derive(Clone)]
pub struct AppServices {
    quiz_loop: Arc<QuizLoopService>,
    generation_enabled: bool,
}

impl AppServices {
    /// Build services around the Gemini generator; `None` serves only the
    /// bundled questions.
    #[must_use]
    pub fn new(config: Option<GeminiConfig>) -> Self {
        let generator = GeminiGenerator::new(config);
        let generation_enabled = generator.enabled();
        let fetch_timeout = generator.request_timeout() + FETCH_GRACE;
        info!(generation_enabled, ?fetch_timeout, "question services ready");

        let provider = Arc::new(GeneratedQuestionProvider::new(Arc::new(generator)));
        let quiz_loop = QuizLoopService::new(provider).with_fetch_timeout(fetch_timeout);
        Self {
            quiz_loop: Arc::new(quiz_loop),
            generation_enabled,
        }
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    #[must_use]
    pub fn generation_enabled(&self) -> bool {
        self.generation_enabled
    }
}
