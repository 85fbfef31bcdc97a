use dioxus::prelude::*;

use crate::components::Button;
use crate::constants::{routes, APP_NAME, SELECTABLE_CURRENCIES};
use crate::core::button::{ButtonSize, ButtonType, ButtonVariant};
use crate::core::config::app_config;
use crate::core::search::SearchDraft;
use crate::core::state::HomeState;
use crate::i18n;
use crate::t;

/// Travel-info strip above the header.
#[component]
pub fn TopBanner() -> Element {
    rsx! {
        div { class: "top-banner",
            span { class: "top-banner__inner",
                svg {
                    class: "top-banner__icon",
                    view_box: "0 0 20 20",
                    fill: "currentColor",
                    "aria-hidden": "true",
                    path {
                        fill_rule: "evenodd",
                        clip_rule: "evenodd",
                        d: "M18 10a8 8 0 11-16 0 8 8 0 0116 0zm-7-4a1 1 0 11-2 0 1 1 0 012 0zM9 9a1 1 0 000 2v3a1 1 0 001 1h1a1 1 0 100-2v-3a1 1 0 00-1-1H9z",
                    }
                }
                span { {t!("banner-text")} }
                span { class: "top-banner__badge", {t!("banner-badge")} }
            }
        }
    }
}

/// Brand, navigation, currency/language selectors, auth buttons and the search bar.
///
/// The language picker follows the shared-context contract: when the platform
/// provides a `Signal<String>` language code, a successful switch is written
/// back to it so every view re-renders with fresh strings.
#[component]
pub fn SiteHeader(mut state: Signal<HomeState>, on_search: EventHandler<SearchDraft>) -> Element {
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let mut current_lang = use_signal(|| {
        lang_code_ctx
            .as_ref()
            .map(|c| c.peek().clone())
            .unwrap_or_else(|| i18n::FALLBACK_LANGUAGE.to_string())
    });
    let langs = use_signal(i18n::available_languages);
    let lang_list = langs();
    let show_switcher = lang_list.len() > 1;

    tracing::debug!(lang = %lang_marker, "site header render");

    let on_language = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!("[i18n] could not switch to {val}: {err}"),
        }
    };

    let currency = state.read().currency.clone();

    rsx! {
        header { class: "site-header",
            div { style: "display:none", "{lang_marker}" }
            div { class: "container site-header__bar",
                a { class: "site-header__brand", href: routes::HOME, "{APP_NAME}" }

                nav { class: "site-header__nav",
                    a { class: "site-header__link", href: "#", {t!("nav-stay")} }
                    a { class: "site-header__link", href: "#", {t!("nav-villas")} }
                    a { class: "site-header__link", href: "#", {t!("nav-hotels")} }
                    a { class: "site-header__link", href: "#", {t!("nav-rentals")} }
                    a { class: "site-header__link", href: "#", {t!("nav-explore")} }
                }

                div { class: "site-header__actions",
                    Button {
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Sm,
                        class: "button--on-dark site-header__wide-only",
                        {t!("button-list-your-place")}
                    }

                    select {
                        class: "site-header__select site-header__wide-only",
                        aria_label: t!("nav-currency-label"),
                        value: "{currency}",
                        onchange: move |evt: FormEvent| {
                            state.with_mut(|s| s.set_currency(&evt.value()));
                        },
                        for code in SELECTABLE_CURRENCIES {
                            option { key: "{code}", value: code, "{code}" }
                        }
                    }

                    if show_switcher {
                        div { class: "site-header__locale site-header__wide-only",
                            label {
                                class: "visually-hidden",
                                r#for: "locale-select",
                                {t!("nav-language-label")}
                            }
                            select {
                                id: "locale-select",
                                class: "site-header__select",
                                value: "{current_lang()}",
                                oninput: on_language,
                                for code in lang_list.iter() {
                                    option { key: "{code}", value: "{code}", {i18n::language_label(code)} }
                                }
                            }
                        }
                    }

                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Sm,
                        class: "button--ghost-on-dark",
                        {t!("button-sign-in")}
                    }
                    Button { variant: ButtonVariant::Primary, size: ButtonSize::Sm,
                        {t!("button-sign-up")}
                    }
                }
            }

            SearchBar { on_search }
        }
    }
}

#[component]
fn SearchBar(on_search: EventHandler<SearchDraft>) -> Element {
    let mut draft = use_signal(SearchDraft::default);
    let max_guests = app_config().defaults.max_guests;
    let current = draft();

    rsx! {
        div { class: "search-bar",
            form {
                class: "container search-bar__form",
                role: "search",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_search.call(draft());
                },
                input {
                    class: "search-bar__input",
                    r#type: "text",
                    name: "location",
                    placeholder: t!("placeholder-destination"),
                    value: "{current.location}",
                    oninput: move |evt: FormEvent| draft.with_mut(|d| d.location = evt.value()),
                }
                span { class: "search-bar__divider", aria_hidden: "true", "|" }
                input {
                    class: "search-bar__input",
                    r#type: "date",
                    name: "check_in",
                    aria_label: t!("placeholder-check-in"),
                    placeholder: t!("placeholder-check-in"),
                    value: "{current.check_in}",
                    oninput: move |evt: FormEvent| draft.with_mut(|d| d.check_in = evt.value()),
                }
                span { class: "search-bar__divider", aria_hidden: "true", "|" }
                input {
                    class: "search-bar__input",
                    r#type: "date",
                    name: "check_out",
                    aria_label: t!("placeholder-check-out"),
                    placeholder: t!("placeholder-check-out"),
                    value: "{current.check_out}",
                    oninput: move |evt: FormEvent| draft.with_mut(|d| d.check_out = evt.value()),
                }
                span { class: "search-bar__divider", aria_hidden: "true", "|" }
                input {
                    class: "search-bar__input search-bar__input--guests",
                    r#type: "number",
                    name: "guests",
                    min: "1",
                    max: "{max_guests}",
                    placeholder: t!("placeholder-guests"),
                    value: "{current.guests}",
                    oninput: move |evt: FormEvent| draft.with_mut(|d| d.guests = evt.value()),
                }
                Button { kind: ButtonType::Submit, size: ButtonSize::Sm, class: "search-bar__submit",
                    {t!("button-search")}
                }
            }
        }
    }
}
