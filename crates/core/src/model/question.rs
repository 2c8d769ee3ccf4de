use thiserror::Error;

use crate::model::QuestionId;

/// Every question offers exactly this many options.
pub const OPTION_COUNT: usize = 4;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text must not be empty")]
    EmptyPrompt,

    #[error("expected 4 options, got {len}")]
    OptionCount { len: usize },

    #[error("option {index} is empty")]
    EmptyOption { index: usize },

    #[error("options {first} and {second} are identical")]
    DuplicateOption { first: usize, second: usize },

    #[error("correct answer index {index} is out of range")]
    CorrectAnswerOutOfRange { index: i64 },
}

/// A multiple-choice question with exactly four options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    options: [String; OPTION_COUNT],
    correct_answer: usize,
}

impl Question {
    /// Validate and build a question.
    ///
    /// `correct_answer` is taken as a signed integer because it usually comes
    /// straight from untrusted input.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt is blank, the option count is not
    /// four, any option is blank or repeated, or the correct index is outside
    /// the option range.
    pub fn new(
        id: QuestionId,
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_answer: i64,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }

        let options: [String; OPTION_COUNT] = options
            .try_into()
            .map_err(|rejected: Vec<String>| QuestionError::OptionCount {
                len: rejected.len(),
            })?;

        for (index, option) in options.iter().enumerate() {
            if option.trim().is_empty() {
                return Err(QuestionError::EmptyOption { index });
            }
            if let Some(first) = options[..index]
                .iter()
                .position(|earlier| earlier.trim() == option.trim())
            {
                return Err(QuestionError::DuplicateOption {
                    first,
                    second: index,
                });
            }
        }

        let correct_answer = usize::try_from(correct_answer)
            .ok()
            .filter(|index| *index < OPTION_COUNT)
            .ok_or(QuestionError::CorrectAnswerOutOfRange {
                index: correct_answer,
            })?;

        Ok(Self {
            id,
            prompt,
            options,
            correct_answer,
        })
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> usize {
        self.correct_answer
    }

    #[must_use]
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_answer
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionSetError {
    #[error("question set must not be empty")]
    Empty,
}

/// Ordered, non-empty sequence of questions for one session.
///
/// The length is decided by whoever supplies the set; nothing downstream
/// assumes a fixed size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet(Vec<Question>);

impl QuestionSet {
    /// # Errors
    ///
    /// Returns `QuestionSetError::Empty` when `questions` is empty.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionSetError> {
        if questions.is_empty() {
            return Err(QuestionSetError::Empty);
        }
        Ok(Self(questions))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a constructed set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Question] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
