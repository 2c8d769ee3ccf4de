use quiz_core::session::QuizSession;

use super::test_harness::{playing, registered, render_session};
use crate::copy;

#[test]
fn landing_renders_title_and_enter_button() {
    let html = render_session(QuizSession::new()).render();
    assert!(html.contains(copy::APP_TITLE), "missing title in {html}");
    assert!(html.contains(copy::ENTER_LABEL), "missing enter in {html}");
}

#[test]
fn registration_renders_profile_fields() {
    let html = render_session(registered("Ahmad", "20")).render();
    assert!(html.contains(copy::REGISTRATION_TITLE), "missing title in {html}");
    assert!(html.contains("Ahmad"), "missing name value in {html}");
    assert!(html.contains(copy::START_LABEL), "missing start in {html}");
    assert!(!html.contains(copy::FETCH_FAILED), "unexpected notice in {html}");
}

#[test]
fn registration_shows_loading_label_while_fetching() {
    let mut session = registered("Ahmad", "20");
    session.begin_start().expect("start");

    let html = render_session(session).render();
    assert!(html.contains(copy::LOADING_LABEL), "missing loading in {html}");
}

#[test]
fn quiz_renders_current_question() {
    let html = render_session(playing(&[0, 1, 2, 3, 0], &[0])).render();
    assert!(html.contains("2 / 5"), "missing progress in {html}");
    assert!(html.contains("Question 2"), "missing prompt in {html}");
    assert!(html.contains("Ahmad"), "missing participant in {html}");
    for letter in copy::OPTION_LETTERS {
        assert!(html.contains(letter), "missing {letter} in {html}");
    }
}

#[test]
fn result_renders_success_branch() {
    let html = render_session(playing(&[1, 2, 0, 3, 1], &[1, 2, 0, 3, 1])).render();
    assert!(html.contains(copy::PASS_TITLE), "missing pass title in {html}");
    assert!(html.contains("5 / 5"), "missing score in {html}");
    assert!(html.contains(&copy::pass_message("Ahmad")), "missing message in {html}");
}

#[test]
fn result_renders_failure_branch() {
    let html = render_session(playing(&[1, 2, 3, 3, 1], &[0, 0, 0, 0, 0])).render();
    assert!(html.contains(copy::FAIL_TITLE), "missing fail title in {html}");
    assert!(html.contains("0 / 5"), "missing score in {html}");
    assert!(html.contains(copy::FAIL_RESET_LABEL), "missing retry in {html}");
}
