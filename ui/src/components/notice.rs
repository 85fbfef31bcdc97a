use dioxus::prelude::*;

use crate::t;

/// Dismissable status banner used for placeholder actions.
#[component]
pub fn NoticeBanner(mut notice: Signal<Option<String>>) -> Element {
    let Some(message) = notice() else {
        return rsx! {};
    };

    rsx! {
        div { class: "notice", role: "status", aria_live: "polite",
            span { class: "notice__message", "{message}" }
            button {
                r#type: "button",
                class: "notice__dismiss",
                aria_label: t!("notice-dismiss"),
                onclick: move |_| notice.set(None),
                "×"
            }
        }
    }
}
