use dioxus::prelude::*;
use quiz_core::session::QuizSession;

use crate::copy;
use crate::views::QuizIntent;
use crate::vm::ResultVm;

#[component]
pub fn ResultView(session: Signal<QuizSession>, dispatch: Callback<QuizIntent>) -> Element {
    let Some(vm) = ResultVm::from_session(&session.read()) else {
        return rsx! {};
    };
    let final_score = copy::FINAL_SCORE_LABEL;
    let title_class = if vm.passed { "title passed" } else { "title failed" };

    rsx! {
        div { class: "page result",
            div { class: "result-icon", "{vm.icon}" }
            h2 { class: "{title_class}", "{vm.title}" }
            p { class: "score-caption", "{final_score}" }
            div { class: "score", "{vm.score_label}" }
            p { class: "message", "{vm.message}" }
            button {
                id: "result-reset",
                class: "gold-button",
                onclick: move |_| dispatch.call(QuizIntent::Reset),
                "{vm.reset_label}"
            }
        }
    }
}
