use quiz_core::session::QuizSession;

use crate::copy;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub passed: bool,
    pub icon: &'static str,
    pub title: &'static str,
    pub score_label: String,
    pub message: String,
    pub reset_label: &'static str,
}

impl ResultVm {
    #[must_use]
    pub fn from_session(session: &QuizSession) -> Option<Self> {
        let outcome = session.outcome()?;
        let name = session.user().name.as_str();
        let passed = outcome.passed();

        Some(if passed {
            Self {
                passed,
                icon: copy::PASS_ICON,
                title: copy::PASS_TITLE,
                score_label: format!("{} / {}", outcome.score, outcome.total),
                message: copy::pass_message(name),
                reset_label: copy::PASS_RESET_LABEL,
            }
        } else {
            Self {
                passed,
                icon: copy::FAIL_ICON,
                title: copy::FAIL_TITLE,
                score_label: format!("{} / {}", outcome.score, outcome.total),
                message: copy::fail_message(name),
                reset_label: copy::FAIL_RESET_LABEL,
            }
        })
    }
}
