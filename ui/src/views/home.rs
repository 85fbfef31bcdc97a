use dioxus::prelude::*;

use crate::components::{
    Button, CategoryBar, FilterBar, Hero, NoticeBanner, PropertyCard, SiteFooter, SiteHeader,
    TopBanner,
};
use crate::constants::APP_NAME;
use crate::core::button::{ButtonSize, ButtonVariant};
use crate::core::config::app_config;
use crate::core::listing::{sample_listings, ListingId};
use crate::core::search::SearchDraft;
use crate::core::state::HomeState;
use crate::t;

/// The marketplace homepage. Owns all page state; children get the signal or
/// plain props and report back through callbacks.
#[component]
pub fn Home() -> Element {
    // Subscribe to the global language code (if provided) so we re-render on change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();
    tracing::debug!(lang = %lang_marker, "home render");

    let mut state = use_signal(HomeState::default);
    let mut notice = use_signal(|| Option::<String>::None);

    let on_search = move |draft: SearchDraft| {
        match draft.validate(app_config().defaults.max_guests) {
            Ok(query) => {
                tracing::info!(?query, "search initiated");
                notice.set(Some(t!("notice-search")));
            }
            Err(err) => {
                tracing::info!(%err, "search rejected");
                notice.set(Some(t!("notice-search-invalid", reason = err.to_string())));
            }
        }
    };

    let on_favorite_toggle = move |id: ListingId| {
        let favorited = state.with_mut(|s| s.toggle_favorite(id));
        tracing::debug!(%id, favorited, "favorite toggled");
    };

    let on_open = move |id: ListingId| {
        tracing::info!(%id, "property clicked");
        notice.set(Some(t!("notice-view-property", id = id.0)));
    };

    let listings = sample_listings().map(|all| state.read().arrange(all));

    rsx! {
        document::Title { "{APP_NAME}" }
        document::Meta { name: "description", content: t!("app-description") }

        main { class: "page page-home",
            div { style: "display:none", "{lang_marker}" }
            TopBanner {}
            SiteHeader { state, on_search }
            NoticeBanner { notice }
            Hero {}
            CategoryBar { state }
            FilterBar { state }

            section { class: "listings",
                div { class: "container",
                    match listings {
                        Ok(listings) if listings.is_empty() => rsx! {
                            p { class: "listings__empty", {t!("grid-empty")} }
                        },
                        Ok(listings) => rsx! {
                            div { class: "listings__grid",
                                for listing in listings.iter() {
                                    PropertyCard {
                                        key: "{listing.id}",
                                        listing: listing.clone(),
                                        is_favorited: listing.is_favorited,
                                        on_favorite_toggle,
                                        onclick: on_open,
                                    }
                                }
                            }
                        },
                        Err(err) => rsx! {
                            p { class: "listings__error", role: "alert", title: "{err}",
                                {t!("error-generic")}
                            }
                        },
                    }

                    div { class: "listings__more",
                        Button {
                            variant: ButtonVariant::Primary,
                            size: ButtonSize::Lg,
                            onclick: move |_: MouseEvent| notice.set(Some(t!("notice-load-more"))),
                            {t!("button-load-more")}
                        }
                    }
                }
            }

            SiteFooter {}
        }
    }
}
