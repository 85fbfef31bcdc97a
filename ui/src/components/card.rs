use dioxus::prelude::*;

use crate::core::format::{format_price, format_rating};
use crate::core::listing::{ListingId, PropertyListing};
use crate::t;

/// Summary card for one listing.
///
/// `on_favorite_toggle` fires from the heart button only; it never also opens
/// the card.
#[component]
pub fn PropertyCard(
    listing: PropertyListing,
    is_favorited: bool,
    on_favorite_toggle: EventHandler<ListingId>,
    onclick: Option<EventHandler<ListingId>>,
    #[props(default, into)] class: String,
) -> Element {
    let id = listing.id;
    let price = format_price(listing.price, &listing.currency);
    let original_price = listing
        .original_price
        .filter(|_| listing.discount().is_some())
        .map(|p| format_price(p, &listing.currency));
    let rating = format_rating(listing.rating);
    let availability = listing
        .availability
        .dates()
        .zip(listing.availability.nights())
        .map(|((start, _), nights)| t!("card-availability", nights = nights, start = start.to_string()));
    let favorite_label = if is_favorited {
        t!("card-favorite-remove")
    } else {
        t!("card-favorite-add")
    };
    let favorite_class = if is_favorited {
        "property-card__favorite property-card__favorite--active"
    } else {
        "property-card__favorite"
    };

    rsx! {
        article {
            class: "property-card {class}",
            "data-listing-id": "{id}",
            onclick: move |_| {
                if let Some(handler) = onclick {
                    handler.call(id);
                }
            },

            div { class: "property-card__media",
                if let Some(src) = listing.cover_image() {
                    img {
                        class: "property-card__image",
                        src: "{src}",
                        alt: "{listing.title}",
                        "loading": "lazy",
                    }
                }
                if let Some(percent) = listing.discount() {
                    span { class: "property-card__discount", {t!("card-discount", percent = percent)} }
                }
                button {
                    r#type: "button",
                    class: favorite_class,
                    aria_pressed: "{is_favorited}",
                    aria_label: "{favorite_label}",
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        on_favorite_toggle.call(id);
                    },
                    HeartIcon { filled: is_favorited }
                }
            }

            if !listing.property_types.is_empty() {
                div { class: "property-card__tags",
                    for tag in listing.property_types.iter() {
                        span { key: "{tag}", class: "property-card__tag", "{tag}" }
                    }
                }
            }

            div { class: "property-card__body",
                div { class: "property-card__heading",
                    h3 { class: "property-card__title", "{listing.title}" }
                    span { class: "property-card__rating",
                        span { aria_hidden: "true", "★" }
                        " {rating} "
                        span { class: "property-card__reviews",
                            {t!("card-reviews", count = listing.review_count)}
                        }
                    }
                }
                p { class: "property-card__location", "{listing.location}" }
                if let Some(window) = availability {
                    p { class: "property-card__availability", "{window}" }
                }

                ul { class: "property-card__amenities",
                    li { {t!("card-bedrooms", count = listing.amenities.bedrooms)} }
                    li { {t!("card-bathrooms", count = listing.amenities.bathrooms)} }
                    li { {t!("card-area", count = listing.amenities.area)} }
                }

                div { class: "property-card__footer",
                    p { class: "property-card__host",
                        {t!("card-hosted-by", name = listing.host.name.clone())}
                        if listing.host.verified {
                            span {
                                class: "property-card__verified",
                                title: t!("card-verified"),
                                " ✓"
                            }
                        }
                    }
                    p { class: "property-card__price",
                        if let Some(original) = original_price {
                            del { class: "property-card__price-original", "{original}" }
                        }
                        strong { class: "property-card__price-current", "{price}" }
                        span { class: "property-card__price-unit", {t!("card-per-night")} }
                    }
                }
            }
        }
    }
}

#[component]
fn HeartIcon(filled: bool) -> Element {
    let fill = if filled { "currentColor" } else { "none" };

    rsx! {
        svg {
            class: "property-card__heart",
            view_box: "0 0 24 24",
            fill,
            stroke: "currentColor",
            stroke_width: "2",
            "aria-hidden": "true",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                d: "M4.318 6.318a4.5 4.5 0 000 6.364L12 20.364l7.682-7.682a4.5 4.5 0 00-6.364-6.364L12 7.636l-1.318-1.318a4.5 4.5 0 00-6.364 0z",
            }
        }
    }
}
