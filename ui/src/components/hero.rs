use dioxus::prelude::*;

use crate::constants::HERO_IMAGE;
use crate::t;

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "hero",
            div { class: "hero__backdrop",
                img {
                    class: "hero__image",
                    src: HERO_IMAGE,
                    alt: t!("hero-image-alt"),
                }
                div { class: "hero__scrim" }
            }
            div { class: "hero__content",
                h1 { class: "hero__title", {t!("hero-title")} }
                p { class: "hero__subtitle", {t!("hero-subtitle")} }
            }
        }
    }
}
