use dioxus::prelude::*;

const THEME_CSS: Asset = asset!("/assets/theme/main.css");
const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

/// Shared stylesheet. Release native builds also inline it so a missing asset
/// directory never leaves the page unstyled.
#[component]
pub fn ThemeStyles() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{THEME_CSS_INLINE}" }
        }
    }
}
