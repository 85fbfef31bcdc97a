//! Pure, platform-agnostic logic behind the homepage components.

pub mod button;
pub mod config;
pub mod format;
pub mod listing;
pub mod search;
pub mod state;
