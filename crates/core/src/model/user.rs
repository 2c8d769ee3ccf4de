/// Participant details entered on the registration screen.
///
/// Values are kept exactly as typed; only blankness is checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserInfo {
    pub name: String,
    pub age: String,
}

impl UserInfo {
    #[must_use]
    pub fn new(name: impl Into<String>, age: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
        }
    }

    /// Both fields are non-blank.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.age.trim().is_empty()
    }
}
