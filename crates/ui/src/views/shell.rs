use std::time::Duration;

use dioxus::prelude::*;
use quiz_core::session::{QuizSession, Screen};

use crate::views::{
    LandingView, QuizView, RegistrationView, ResultView, ViewError, use_quiz_dispatcher,
};
use crate::vm::Settling;

#[cfg(test)]
use crate::views::QuizIntent;
#[cfg(test)]
use std::{cell::RefCell, rc::Rc};

/// How long an answered question stays on screen before the next one.
pub const SETTLE_DELAY: Duration = Duration::from_millis(300);

/// Root of the quiz: owns the one session for this window.
#[component]
pub fn QuizShell() -> Element {
    let session = use_signal(QuizSession::new);
    rsx! { Screens { session } }
}

/// Picks the screen to render from the session state.
///
/// The result screen waits until the last answer has finished settling.
#[component]
pub fn Screens(session: Signal<QuizSession>) -> Element {
    let settling = use_signal(|| None::<Settling>);
    let notice = use_signal(|| None::<ViewError>);
    let dispatch = use_quiz_dispatcher(session, settling, notice);

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<ScreensTestHandles>() {
                handles.register(dispatch, session, settling, notice);
            }
        }
    }

    let screen = session.read().screen();
    let is_settling = settling.read().is_some();

    rsx! {
        div { class: "screen",
            match (screen, is_settling) {
                (Screen::Landing, _) => rsx! {
                    LandingView { dispatch }
                },
                (Screen::Registration, _) => rsx! {
                    RegistrationView { session, notice, dispatch }
                },
                (Screen::Quiz, _) | (Screen::Result, true) => rsx! {
                    QuizView { session, settling, dispatch }
                },
                (Screen::Result, false) => rsx! {
                    ResultView { session, dispatch }
                },
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ScreensTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    session: Rc<RefCell<Option<Signal<QuizSession>>>>,
    settling: Rc<RefCell<Option<Signal<Option<Settling>>>>>,
    notice: Rc<RefCell<Option<Signal<Option<ViewError>>>>>,
}

#[cfg(test)]
impl ScreensTestHandles {
    fn register(
        &self,
        dispatch: Callback<QuizIntent>,
        session: Signal<QuizSession>,
        settling: Signal<Option<Settling>>,
        notice: Signal<Option<ViewError>>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.session.borrow_mut() = Some(session);
        *self.settling.borrow_mut() = Some(settling);
        *self.notice.borrow_mut() = Some(notice);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("dispatch registered")
    }

    pub(crate) fn session(&self) -> Signal<QuizSession> {
        (*self.session.borrow()).expect("session registered")
    }

    pub(crate) fn settling(&self) -> Signal<Option<Settling>> {
        (*self.settling.borrow()).expect("settling registered")
    }

    pub(crate) fn notice(&self) -> Signal<Option<ViewError>> {
        (*self.notice.borrow()).expect("notice registered")
    }
}
