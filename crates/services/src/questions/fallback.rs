use quiz_core::model::{Question, QuestionId, QuestionSet};

use crate::error::ProviderError;

struct BundledQuestion {
    id: i64,
    prompt: &'static str,
    options: [&'static str; 4],
    correct_answer: i64,
}

const BUNDLED: &[BundledQuestion] = &[
    BundledQuestion {
        id: 1,
        prompt: "ما هي السورة التي تسمى عروس القرآن؟",
        options: ["سورة البقرة", "سورة الرحمن", "سورة يس", "سورة الواقعة"],
        correct_answer: 1,
    },
    BundledQuestion {
        id: 2,
        prompt: "كم عدد أجزاء القرآن الكريم؟",
        options: ["20 جزء", "25 جزء", "30 جزء", "40 جزء"],
        correct_answer: 2,
    },
];

/// Question set used whenever generation is unavailable or rejected.
///
/// # Errors
///
/// Returns `ProviderError::InvalidFallback` if the bundled content is
/// malformed. The tests below keep that from ever shipping.
pub fn fallback_questions() -> Result<QuestionSet, ProviderError> {
    let questions = BUNDLED
        .iter()
        .map(|bundled| {
            Question::new(
                QuestionId::new(bundled.id),
                bundled.prompt,
                bundled.options.iter().map(ToString::to_string).collect(),
                bundled.correct_answer,
            )
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| ProviderError::InvalidFallback(err.to_string()))?;

    QuestionSet::new(questions).map_err(|err| ProviderError::InvalidFallback(err.to_string()))
}
