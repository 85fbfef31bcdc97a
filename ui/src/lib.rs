//! Shared UI crate for the ALX listing homepage. Cross-platform logic, components
//! and views live here; the `web` and `desktop` crates only launch them.

pub mod constants;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    mod button;
    pub use button::Button;

    mod card;
    pub use card::PropertyCard;

    mod header;
    pub use header::{SiteHeader, TopBanner};

    mod hero;
    pub use hero::Hero;

    mod category_bar;
    pub use category_bar::CategoryBar;

    mod filter_bar;
    pub use filter_bar::FilterBar;

    mod footer;
    pub use footer::SiteFooter;

    mod notice;
    pub use notice::NoticeBanner;

    mod theme;
    pub use theme::ThemeStyles;
}

#[cfg(test)]
mod tests {
    mod events;
    mod i18n_completeness;
    mod render;
}
