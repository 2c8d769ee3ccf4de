//! Single-participant quiz session.
//!
//! `QuizSession` owns every piece of mutable state for one landing-to-result
//! journey and is the only thing allowed to change it. Transitions are plain
//! synchronous methods; the one asynchronous step (fetching questions) is
//! split into `begin_start` / `complete_start` / `abort_start` so the caller
//! can await the fetch between them while `is_loading` is observable.

use thiserror::Error;

use crate::model::{Question, QuestionSet, UserInfo};
use crate::scoring::QuizOutcome;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Screen {
    Landing,
    Registration,
    Quiz,
    Result,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("action requires the {expected:?} screen, session is on {actual:?}")]
    WrongScreen { expected: Screen, actual: Screen },

    #[error("name and age are both required")]
    IncompleteProfile,

    #[error("a question fetch is already in flight")]
    AlreadyLoading,

    #[error("no question fetch is in flight")]
    NotLoading,
}

/// What happened to an answer action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Stale, repeated, or issued outside the quiz screen. Nothing changed.
    Ignored,
    /// The option index does not exist on the current question. Nothing changed.
    InvalidChoice,
    /// Scored; the session moved to the next question or to the result.
    Recorded { correct: bool, finished: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    screen: Screen,
    user: UserInfo,
    questions: Option<QuestionSet>,
    current_index: usize,
    score: usize,
    loading: bool,
    answers: Vec<usize>,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            screen: Screen::Landing,
            user: UserInfo::default(),
            questions: None,
            current_index: 0,
            score: 0,
            loading: false,
            answers: Vec::new(),
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn user(&self) -> &UserInfo {
        &self.user
    }

    #[must_use]
    pub fn questions(&self) -> Option<&QuestionSet> {
        self.questions.as_ref()
    }

    /// Number of questions in the active set, zero before the quiz starts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.as_ref().map_or(0, QuestionSet::len)
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.screen != Screen::Quiz {
            return None;
        }
        self.question(self.current_index)
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.as_ref().and_then(|set| set.get(index))
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Option chosen for the question at `index`, if it was answered.
    #[must_use]
    pub fn answer_for(&self, index: usize) -> Option<usize> {
        self.answers.get(index).copied()
    }

    /// Whether the start action is currently accepted.
    #[must_use]
    pub fn can_start(&self) -> bool {
        self.screen == Screen::Registration && !self.loading && self.user.is_complete()
    }

    /// Pass/fail summary, available on the result screen only.
    #[must_use]
    pub fn outcome(&self) -> Option<QuizOutcome> {
        (self.screen == Screen::Result).then(|| QuizOutcome::new(self.score, self.total()))
    }

    /// Landing → Registration.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::WrongScreen` outside the landing screen.
    pub fn enter(&mut self) -> Result<(), SessionError> {
        self.expect_screen(Screen::Landing)?;
        self.screen = Screen::Registration;
        Ok(())
    }

    /// Edits are only applied on the registration screen, and are frozen
    /// while a start is in flight.
    pub fn set_name(&mut self, name: impl Into<String>) {
        if self.accepts_edits() {
            self.user.name = name.into();
        }
    }

    pub fn set_age(&mut self, age: impl Into<String>) {
        if self.accepts_edits() {
            self.user.age = age.into();
        }
    }

    /// Whether the profile fields can currently be edited.
    #[must_use]
    pub fn accepts_edits(&self) -> bool {
        self.screen == Screen::Registration && !self.loading
    }

    /// Mark the start transition as in flight.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` when not on the registration screen, when a
    /// fetch is already pending, or when name or age is blank.
    pub fn begin_start(&mut self) -> Result<(), SessionError> {
        self.expect_screen(Screen::Registration)?;
        if self.loading {
            return Err(SessionError::AlreadyLoading);
        }
        if !self.user.is_complete() {
            return Err(SessionError::IncompleteProfile);
        }
        self.loading = true;
        Ok(())
    }

    /// Install a freshly fetched question set and enter the quiz.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotLoading` if `begin_start` was not called first.
    pub fn complete_start(&mut self, questions: QuestionSet) -> Result<(), SessionError> {
        self.expect_screen(Screen::Registration)?;
        if !self.loading {
            return Err(SessionError::NotLoading);
        }
        self.questions = Some(questions);
        self.current_index = 0;
        self.score = 0;
        self.answers.clear();
        self.loading = false;
        self.screen = Screen::Quiz;
        Ok(())
    }

    /// Abandon a pending start. The entered profile is kept for a retry.
    pub fn abort_start(&mut self) {
        self.loading = false;
    }

    /// Record the answer `choice` for the question at `question_index`.
    ///
    /// Only the first answer for the current question counts; anything else
    /// returns `AnswerOutcome::Ignored`.
    pub fn answer(&mut self, question_index: usize, choice: usize) -> AnswerOutcome {
        if self.screen != Screen::Quiz
            || question_index != self.current_index
            || self.answers.len() != self.current_index
        {
            return AnswerOutcome::Ignored;
        }
        let Some(question) = self.question(self.current_index) else {
            return AnswerOutcome::Ignored;
        };
        if choice >= question.options().len() {
            return AnswerOutcome::InvalidChoice;
        }

        let correct = question.is_correct(choice);
        if correct {
            self.score += 1;
        }
        self.answers.push(choice);

        let finished = self.current_index + 1 >= self.total();
        if finished {
            self.screen = Screen::Result;
        } else {
            self.current_index += 1;
        }
        AnswerOutcome::Recorded { correct, finished }
    }

    /// Result → Landing, restoring the initial state.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::WrongScreen` outside the result screen.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.expect_screen(Screen::Result)?;
        *self = Self::new();
        Ok(())
    }

    fn expect_screen(&self, expected: Screen) -> Result<(), SessionError> {
        if self.screen == expected {
            Ok(())
        } else {
            Err(SessionError::WrongScreen {
                expected,
                actual: self.screen,
            })
        }
    }
}
