//! Internationalization (i18n) support for `alx-listing-ui`.
//!
//! Pieces:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/alx-listing-ui.ftl   (fallback/reference)
//!   es-ES/alx-listing-ui.ftl
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! let title = t!("hero-title");
//! let reviews = t!("card-reviews", count = 172);
//! ```
//!
//! To add a locale, copy `en-US/alx-listing-ui.ftl` to
//! `i18n/<lang-id>/alx-listing-ui.ftl` and translate the values, keeping IDs
//! and placeholders identical. The completeness tests discover new locale
//! folders on their own.
//!
//! Desktop uses `DesktopLanguageRequester` (OS locale list); WASM uses
//! `WebLanguageRequester` (`navigator.languages`).
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Ergonomic translation macro.
///
/// ```ignore
/// t!("nav-stay")
/// t!("card-reviews", count = 95)
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback file is `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "alx-listing-ui";

/// Fallback locale tag.
pub const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    let loader = FluentLanguageLoader::new(DOMAIN, fallback);
    // Plain text output; the page never mixes RTL copy into placeables.
    loader.set_use_isolating(false);
    loader
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            tracing::warn!("[i18n] failed selecting languages ({err}); continuing with fallback");
        }
    });
}

/// Switch language at runtime. Unparsable tags are ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()),
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Embedded language identifiers, sorted (for the header picker).
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Short label for a language tag (`es-ES` → `ES`).
pub fn language_label(tag: &str) -> String {
    tag.split('-').next().unwrap_or(tag).to_uppercase()
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn fallback_language_is_present() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == "en-US"));
        assert!(langs.iter().any(|l| l == "es-ES"));
    }

    #[test]
    fn unknown_language_keeps_current_bundle() {
        init();
        set_language(FALLBACK_LANGUAGE).unwrap();
        let before = fl!(&*LOADER, "nav-stay");
        let _ = set_language("zz-ZZ");
        let after = fl!(&*LOADER, "nav-stay");
        assert_eq!(before, after);
    }

    #[test]
    fn placeables_are_not_isolated() {
        init();
        let text = fl!(&*LOADER, "card-reviews", count = 172);
        assert!(text.contains("172"));
        assert!(!text.contains('\u{2068}'));
    }

    #[test]
    fn language_labels() {
        assert_eq!(language_label("en-US"), "EN");
        assert_eq!(language_label("es-ES"), "ES");
        assert_eq!(language_label("fr"), "FR");
    }
}
