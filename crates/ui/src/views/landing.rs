use dioxus::prelude::*;

use crate::copy;
use crate::views::QuizIntent;

#[component]
pub fn LandingView(dispatch: Callback<QuizIntent>) -> Element {
    let title = copy::APP_TITLE;
    let tagline = copy::TAGLINE;
    let enter = copy::ENTER_LABEL;

    rsx! {
        div { class: "page landing",
            div { class: "crescent", "🌙" }
            h1 { class: "title", "{title}" }
            p { class: "tagline", "{tagline}" }
            button {
                id: "landing-enter",
                class: "gold-button",
                onclick: move |_| dispatch.call(QuizIntent::Enter),
                "{enter}"
            }
        }
    }
}
