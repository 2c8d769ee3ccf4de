#![forbid(unsafe_code)]

pub mod model;
pub mod scoring;
pub mod session;

pub use scoring::{QuizOutcome, pass_threshold};
pub use session::{AnswerOutcome, QuizSession, Screen};
