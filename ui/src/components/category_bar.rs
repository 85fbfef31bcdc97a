use dioxus::prelude::*;

use crate::constants::PROPERTY_CATEGORIES;
use crate::core::state::HomeState;
use crate::t;

/// Horizontally scrolling category tabs; exactly one is active.
#[component]
pub fn CategoryBar(mut state: Signal<HomeState>) -> Element {
    let snapshot = state.read().clone();

    rsx! {
        section { class: "category-bar",
            div {
                class: "container category-bar__track",
                role: "tablist",
                aria_label: t!("categories-label"),
                for category in PROPERTY_CATEGORIES {
                    button {
                        key: "{category.name}",
                        r#type: "button",
                        role: "tab",
                        class: tab_class(snapshot.is_active_category(category.name)),
                        aria_selected: "{snapshot.is_active_category(category.name)}",
                        onclick: move |_| state.with_mut(|s| s.select_category(category.name)),
                        span { class: "category-bar__icon", aria_hidden: "true", "{category.icon}" }
                        span { class: "category-bar__label", "{category.name}" }
                    }
                }
            }
        }
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "category-bar__tab category-bar__tab--active"
    } else {
        "category-bar__tab"
    }
}
