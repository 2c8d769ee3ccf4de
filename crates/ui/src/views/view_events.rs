use std::time::Duration;

use quiz_core::model::UserInfo;
use quiz_core::session::{QuizSession, Screen};

use super::test_harness::{playing, registered, render_session, render_with_broken_provider};
use crate::copy;
use crate::views::{QuizIntent, SETTLE_DELAY, ViewError};
use crate::vm::Settling;

const FETCH_WINDOW: Duration = Duration::from_millis(100);

fn past_settle() -> Duration {
    SETTLE_DELAY + Duration::from_millis(200)
}

#[tokio::test(flavor = "current_thread")]
async fn landing_to_quiz_through_registration() {
    let mut harness = render_session(QuizSession::new());

    harness.dispatch(QuizIntent::Enter);
    assert_eq!(harness.session().screen(), Screen::Registration);

    harness.dispatch(QuizIntent::SetName("Ahmad".into()));
    harness.dispatch(QuizIntent::SetAge("20".into()));
    harness.dispatch(QuizIntent::Start);
    assert!(harness.session().is_loading());
    let html = harness.render();
    assert!(html.contains(copy::LOADING_LABEL), "missing loading in {html}");

    harness.drive_for(FETCH_WINDOW).await;
    let session = harness.session();
    assert_eq!(session.screen(), Screen::Quiz);
    assert_eq!(session.total(), 5);
    let html = harness.render();
    assert!(html.contains("Question 1"), "missing first question in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn failed_fetch_shows_notice_and_keeps_profile() {
    let mut harness = render_with_broken_provider(registered("Ahmad", "20"));

    harness.dispatch(QuizIntent::Start);
    harness.drive_for(FETCH_WINDOW).await;

    let session = harness.session();
    assert_eq!(session.screen(), Screen::Registration);
    assert!(!session.is_loading());
    assert_eq!(session.user(), &UserInfo::new("Ahmad", "20"));
    assert_eq!(harness.notice(), Some(ViewError::FetchFailed));
    let html = harness.render();
    assert!(html.contains(copy::FETCH_FAILED), "missing notice in {html}");
    assert!(html.contains(copy::START_LABEL), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn retry_after_failure_clears_notice() {
    let mut harness = render_with_broken_provider(registered("Ahmad", "20"));
    harness.dispatch(QuizIntent::Start);
    harness.drive_for(FETCH_WINDOW).await;
    assert!(harness.notice().is_some());

    harness.dispatch(QuizIntent::Start);
    assert_eq!(harness.notice(), None);
    assert!(harness.session().is_loading());
}

#[tokio::test(flavor = "current_thread")]
async fn profile_edits_during_fetch_are_dropped() {
    let mut harness = render_session(registered("Ahmad", "20"));

    harness.dispatch(QuizIntent::Start);
    harness.dispatch(QuizIntent::SetName(String::new()));
    harness.dispatch(QuizIntent::SetAge(" ".into()));
    harness.drive_for(FETCH_WINDOW).await;

    let session = harness.session();
    assert_eq!(session.screen(), Screen::Quiz);
    assert_eq!(session.user(), &UserInfo::new("Ahmad", "20"));
}

#[tokio::test(flavor = "current_thread")]
async fn answer_stays_on_screen_until_settled() {
    let mut harness = render_session(playing(&[0, 1, 2, 3, 0], &[]));

    harness.dispatch(QuizIntent::Answer {
        question_index: 0,
        choice: 2,
    });
    assert_eq!(harness.settling(), Some(Settling { question_index: 0 }));
    assert_eq!(harness.session().current_index(), 1);
    let html = harness.render();
    assert!(html.contains("Question 1"), "answered question gone in {html}");
    assert!(html.contains("option selected"), "missing highlight in {html}");

    // A second click on the settling question changes nothing.
    harness.dispatch(QuizIntent::Answer {
        question_index: 0,
        choice: 0,
    });
    assert_eq!(harness.session().score(), 0);
    assert_eq!(harness.session().current_index(), 1);

    harness.drive_for(past_settle()).await;
    assert_eq!(harness.settling(), None);
    let html = harness.render();
    assert!(html.contains("Question 2"), "missing next question in {html}");
    assert!(!html.contains("option selected"), "stale highlight in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn result_waits_for_last_answer_to_settle() {
    let mut harness = render_session(playing(&[1], &[]));

    harness.dispatch(QuizIntent::Answer {
        question_index: 0,
        choice: 1,
    });
    assert_eq!(harness.session().screen(), Screen::Result);
    let html = harness.render();
    assert!(!html.contains(copy::PASS_TITLE), "result shown early in {html}");

    harness.drive_for(past_settle()).await;
    let html = harness.render();
    assert!(html.contains(copy::PASS_TITLE), "missing pass title in {html}");
    assert!(html.contains("1 / 1"), "missing score in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn reset_returns_to_landing() {
    let mut harness = render_session(playing(&[1, 2], &[0, 0]));
    let html = harness.render();
    assert!(html.contains(copy::FAIL_RESET_LABEL), "missing retry in {html}");

    harness.dispatch(QuizIntent::Reset);
    assert_eq!(harness.session(), QuizSession::new());
    let html = harness.render();
    assert!(html.contains(copy::ENTER_LABEL), "missing enter in {html}");
}
