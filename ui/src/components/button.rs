use dioxus::prelude::*;

use crate::core::button::{resolve_class, ButtonSize, ButtonState, ButtonType, ButtonVariant};

/// Reusable button with variant/size buckets, a loading indicator and a guarded
/// click path.
///
/// The click handler is gated in the event handler itself, not only through the
/// native `disabled` attribute, so a programmatic activation while `loading`
/// or `disabled` never reaches `onclick`.
#[component]
pub fn Button(
    children: Element,
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default, into)] class: String,
    #[props(default)] kind: ButtonType,
    aria_label: Option<String>,
    onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    let state = ButtonState::new(disabled, loading);
    let inert = state.is_inert();
    let class_attr = resolve_class(variant, size, &class);

    let handle_click = move |evt: MouseEvent| {
        let forward = onclick.map(|handler| move |evt: MouseEvent| handler.call(evt));
        state.dispatch(forward, evt);
    };

    rsx! {
        button {
            r#type: kind.as_str(),
            class: "{class_attr}",
            disabled: inert,
            aria_disabled: "{inert}",
            aria_busy: "{loading}",
            aria_label,
            onclick: handle_click,
            if loading {
                Spinner {}
            }
            {children}
        }
    }
}

#[component]
fn Spinner() -> Element {
    rsx! {
        svg {
            class: "button__spinner",
            fill: "none",
            view_box: "0 0 24 24",
            "aria-hidden": "true",
            circle {
                class: "button__spinner-track",
                cx: "12",
                cy: "12",
                r: "10",
                stroke: "currentColor",
                stroke_width: "4",
            }
            path {
                class: "button__spinner-head",
                fill: "currentColor",
                d: "M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z",
            }
        }
    }
}
