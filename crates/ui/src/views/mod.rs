mod actions;
mod landing;
mod quiz;
mod registration;
mod result;
mod shell;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_events;
#[cfg(test)]
mod view_smoke;

pub use actions::{QuizIntent, use_quiz_dispatcher};
pub use landing::LandingView;
pub use quiz::QuizView;
pub use registration::RegistrationView;
pub use result::ResultView;
pub use shell::{QuizShell, Screens, SETTLE_DELAY};
pub use state::ViewError;
