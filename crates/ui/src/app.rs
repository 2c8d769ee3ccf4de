use dioxus::prelude::*;

use crate::copy;
use crate::views::QuizShell;

#[component]
pub fn App() -> Element {
    let title = copy::APP_TITLE;
    let fatal = copy::FETCH_FAILED;

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "{title}" }

        div { class: "app-root", dir: "rtl",
            ErrorBoundary {
                handle_error: move |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "{fatal}" }
                        pre { "{errors:?}" }
                    }
                },
                QuizShell {}
            }
        }
    }
}
