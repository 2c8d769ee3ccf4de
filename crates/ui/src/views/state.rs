use crate::copy;

/// Failures surfaced to the participant as a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    FetchFailed,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::FetchFailed => copy::FETCH_FAILED,
        }
    }
}
