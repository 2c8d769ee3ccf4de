use dioxus::prelude::*;
use quiz_core::session::QuizSession;

use crate::views::QuizIntent;
use crate::vm::{QuizVm, Settling};

#[component]
pub fn QuizView(
    session: Signal<QuizSession>,
    settling: Signal<Option<Settling>>,
    dispatch: Callback<QuizIntent>,
) -> Element {
    let Some(vm) = QuizVm::build(&session.read(), *settling.read()) else {
        return rsx! {};
    };
    let question_index = vm.question_index;
    let locked = vm.locked;

    rsx! {
        div { class: "page quiz",
            div { class: "quiz-header",
                span { class: "progress-label", "{vm.progress_label}" }
                span { class: "participant", "{vm.participant}" }
            }
            div { class: "progress-track",
                div { class: "progress-fill", style: "width: {vm.progress_percent}%" }
            }
            h3 { class: "prompt", "{vm.prompt}" }
            div { class: "options",
                for option in vm.options {
                    button {
                        key: "{option.index}",
                        class: "{option.class}",
                        disabled: locked,
                        onclick: move |_| dispatch.call(QuizIntent::Answer {
                            question_index,
                            choice: option.index,
                        }),
                        span { class: "option-text", "{option.text}" }
                        span { class: "option-letter", "{option.letter}" }
                    }
                }
            }
        }
    }
}
