use quiz_core::session::{QuizSession, Screen};

use crate::copy;

/// An answer that was just recorded and is still on screen.
///
/// The session has already moved on; the view keeps showing the answered
/// question until the settle delay runs out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settling {
    pub question_index: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub letter: &'static str,
    pub text: String,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    pub question_index: usize,
    pub participant: String,
    pub progress_label: String,
    pub progress_percent: usize,
    pub prompt: String,
    pub options: Vec<OptionVm>,
    pub locked: bool,
}

impl QuizVm {
    /// `None` when there is no question to show.
    #[must_use]
    pub fn build(session: &QuizSession, settling: Option<Settling>) -> Option<Self> {
        let question_index = match (session.screen(), settling) {
            (Screen::Quiz | Screen::Result, Some(settling)) => settling.question_index,
            (Screen::Quiz, None) => session.current_index(),
            _ => return None,
        };
        let question = session.question(question_index)?;
        let total = session.total();
        let chosen = settling.and_then(|_| session.answer_for(question_index));

        let options = question
            .options()
            .iter()
            .enumerate()
            .map(|(index, text)| OptionVm {
                index,
                letter: copy::OPTION_LETTERS.get(index).copied().unwrap_or("-"),
                text: text.clone(),
                class: if chosen == Some(index) {
                    "option selected"
                } else {
                    "option"
                },
            })
            .collect();

        Some(Self {
            question_index,
            participant: session.user().name.clone(),
            progress_label: format!("{} / {}", question_index + 1, total),
            progress_percent: (question_index + 1) * 100 / total.max(1),
            prompt: question.prompt().to_string(),
            options,
            locked: settling.is_some(),
        })
    }
}
