mod fallback;
mod generator;
mod payload;
mod provider;

pub use fallback::fallback_questions;
pub use generator::{GeminiConfig, GeminiGenerator, QuestionGenerator, QuestionRequest};
pub use payload::parse_question_payload;
pub use provider::{GeneratedQuestionProvider, QuestionProvider};
