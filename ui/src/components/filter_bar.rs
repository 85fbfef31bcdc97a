use dioxus::prelude::*;

use crate::constants::FILTERS;
use crate::core::state::{HomeState, SortOrder};
use crate::t;

#[component]
pub fn FilterBar(mut state: Signal<HomeState>) -> Element {
    let snapshot = state.read().clone();

    rsx! {
        section { class: "filter-bar",
            div { class: "container filter-bar__inner",
                div { class: "filter-bar__chips", role: "group", aria_label: t!("filters-label"),
                    for label in FILTERS {
                        button {
                            key: "{label}",
                            r#type: "button",
                            class: chip_class(snapshot.is_active_filter(label)),
                            aria_pressed: "{snapshot.is_active_filter(label)}",
                            onclick: move |_| state.with_mut(|s| s.select_filter(label)),
                            "{label}"
                        }
                    }
                }

                div { class: "filter-bar__controls",
                    button { r#type: "button", class: "filter-bar__all",
                        svg {
                            class: "filter-bar__icon",
                            view_box: "0 0 24 24",
                            fill: "none",
                            stroke: "currentColor",
                            "aria-hidden": "true",
                            path {
                                stroke_linecap: "round",
                                stroke_linejoin: "round",
                                stroke_width: "2",
                                d: "M3 4a1 1 0 011-1h16a1 1 0 011 1v2.586a1 1 0 01-.293.707l-6.414 6.414a1 1 0 00-.293.707V17l-4 4v-6.586a1 1 0 00-.293-.707L3.293 7.207A1 1 0 013 6.5V4z",
                            }
                        }
                        span { {t!("button-all-filters")} }
                    }
                    label { class: "filter-bar__sort",
                        span { {t!("sort-label")} }
                        select {
                            class: "filter-bar__sort-select",
                            value: snapshot.sort.key(),
                            onchange: move |evt: FormEvent| {
                                if let Some(order) = SortOrder::from_key(&evt.value()) {
                                    state.with_mut(|s| s.sort = order);
                                }
                            },
                            for order in SortOrder::ALL {
                                option { key: "{order.key()}", value: order.key(), {sort_label(order)} }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn sort_label(order: SortOrder) -> String {
    match order {
        SortOrder::HighestPrice => t!("sort-price-desc"),
        SortOrder::LowestPrice => t!("sort-price-asc"),
        SortOrder::Rating => t!("sort-rating"),
        SortOrder::Newest => t!("sort-newest"),
    }
}

fn chip_class(active: bool) -> &'static str {
    if active {
        "filter-chip filter-chip--active"
    } else {
        "filter-chip"
    }
}
