use dioxus::prelude::*;

use ui::components::ThemeStyles;
use ui::core::config::app_config;
use ui::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    Fallback { segments: Vec<String> },
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Shared language code; the header writes to it on a successful switch.
    let lang_code = use_signal(|| ui::i18n::FALLBACK_LANGUAGE.to_string());
    use_context_provider(|| lang_code);

    use_hook(|| {
        tracing::info!(config = %app_config(), "web shell started");
    });

    rsx! {
        ThemeStyles {}

        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// Unknown paths render the homepage; there is only one page.
#[component]
fn Fallback(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "unknown route, showing home");
    rsx! { Home {} }
}
