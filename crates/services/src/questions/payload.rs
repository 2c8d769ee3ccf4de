//! Validation of generated question payloads.
//!
//! The generator's structured-output contract is not trusted: every field,
//! the array length and the answer index are checked here before a payload
//! is allowed anywhere near a session.

use serde::Deserialize;

use quiz_core::model::{Question, QuestionId, QuestionSet};

use crate::error::PayloadError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuestion {
    id: QuestionId,
    question: String,
    options: Vec<String>,
    correct_answer: i64,
}

/// Parse `text` as exactly `expected` well-formed questions.
///
/// # Errors
///
/// Returns `PayloadError` if the text is blank, is not a JSON array of
/// question objects, has the wrong length, or holds a malformed question.
pub fn parse_question_payload(text: &str, expected: usize) -> Result<QuestionSet, PayloadError> {
    let body = strip_code_fence(text);
    if body.is_empty() {
        return Err(PayloadError::Empty);
    }

    let raw: Vec<RawQuestion> = serde_json::from_str(body)?;
    if raw.len() != expected {
        return Err(PayloadError::Count {
            expected,
            actual: raw.len(),
        });
    }

    let questions = raw
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            Question::new(item.id, item.question, item.options, item.correct_answer)
                .map_err(|source| PayloadError::Question { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    QuestionSet::new(questions).map_err(|_| PayloadError::Count {
        expected,
        actual: 0,
    })
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_suffix("```").unwrap_or(rest).trim_start();
    // Optional info string; the body may follow it on the same line.
    let rest = rest
        .strip_prefix("json")
        .or_else(|| rest.strip_prefix("JSON"))
        .unwrap_or(rest);
    rest.trim()
}
