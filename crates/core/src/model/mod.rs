mod ids;
mod question;
mod user;

pub use ids::QuestionId;
pub use question::{OPTION_COUNT, Question, QuestionError, QuestionSet, QuestionSetError};
pub use user::UserInfo;
