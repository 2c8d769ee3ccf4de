use dioxus::prelude::*;
use quiz_core::session::QuizSession;

use crate::copy;
use crate::views::{QuizIntent, ViewError};
use crate::vm::RegistrationVm;

#[component]
pub fn RegistrationView(
    session: Signal<QuizSession>,
    notice: Signal<Option<ViewError>>,
    dispatch: Callback<QuizIntent>,
) -> Element {
    let vm = RegistrationVm::from_session(&session.read());

    let title = copy::REGISTRATION_TITLE;
    let name_label = copy::NAME_LABEL;
    let age_label = copy::AGE_LABEL;
    let notice_text = (*notice.read()).map(ViewError::message);

    rsx! {
        div { class: "page registration",
            h2 { class: "title", "{title}" }

            {notice_text.map(|text| rsx! {
                p { class: "notice", "{text}" }
            })}

            label { r#for: "registration-name", "{name_label}" }
            input {
                id: "registration-name",
                r#type: "text",
                value: "{vm.name}",
                placeholder: copy::NAME_PLACEHOLDER,
                disabled: vm.inputs_disabled,
                oninput: move |evt: FormEvent| dispatch.call(QuizIntent::SetName(evt.value())),
            }

            label { r#for: "registration-age", "{age_label}" }
            input {
                id: "registration-age",
                r#type: "number",
                value: "{vm.age}",
                placeholder: copy::AGE_PLACEHOLDER,
                disabled: vm.inputs_disabled,
                oninput: move |evt: FormEvent| dispatch.call(QuizIntent::SetAge(evt.value())),
            }

            button {
                id: "registration-start",
                class: "gold-button",
                disabled: vm.start_disabled,
                onclick: move |_| dispatch.call(QuizIntent::Start),
                "{vm.start_label}"
            }
        }
    }
}
