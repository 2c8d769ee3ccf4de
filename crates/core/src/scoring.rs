//! Pass/fail rule for a finished quiz.
//!
//! A participant passes with at least 60% of the questions right, rounded up:
//! `score >= ceil(total * 0.6)`. This is the only place the rule lives.

/// Minimum score needed to pass a quiz of `total` questions.
///
/// Integer form of `ceil(total * 0.6)`.
#[must_use]
pub const fn pass_threshold(total: usize) -> usize {
    (total * 3).div_ceil(5)
}

/// Final result of a session, derived from its state on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOutcome {
    pub score: usize,
    pub total: usize,
}

impl QuizOutcome {
    #[must_use]
    pub const fn new(score: usize, total: usize) -> Self {
        Self { score, total }
    }

    #[must_use]
    pub const fn threshold(&self) -> usize {
        pass_threshold(self.total)
    }

    #[must_use]
    pub const fn passed(&self) -> bool {
        self.score >= self.threshold()
    }
}
