use quiz_core::session::QuizSession;

use crate::copy;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationVm {
    pub name: String,
    pub age: String,
    pub start_label: &'static str,
    pub start_disabled: bool,
    pub inputs_disabled: bool,
}

impl RegistrationVm {
    #[must_use]
    pub fn from_session(session: &QuizSession) -> Self {
        let user = session.user();
        Self {
            name: user.name.clone(),
            age: user.age.clone(),
            start_label: if session.is_loading() {
                copy::LOADING_LABEL
            } else {
                copy::START_LABEL
            },
            start_disabled: !session.can_start(),
            inputs_disabled: !session.accepts_edits(),
        }
    }
}
