#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod questions;
pub mod session_loop;

pub use app_services::AppServices;
pub use error::{GenerationError, PayloadError, ProviderError, QuizLoopError};
pub use questions::{
    GeminiConfig, GeminiGenerator, GeneratedQuestionProvider, QuestionGenerator, QuestionProvider,
    QuestionRequest, fallback_questions, parse_question_payload,
};
pub use session_loop::QuizLoopService;
