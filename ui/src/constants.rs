//! Design tokens and static lists shared by the homepage components.
//!
//! User-facing copy lives in the Fluent bundles (`ui/i18n`); this module only
//! carries identifiers, colors, paths and data lists.

pub const APP_NAME: &str = "alx";

pub mod colors {
    pub const PRIMARY: &str = "#4ECDC4";
    pub const SECONDARY: &str = "#FF6B35";
    pub const SUCCESS: &str = "#27AE60";
    pub const BACKGROUND: &str = "#FFFFFF";

    /// Tailwind-compatible gray scale, indexed by shade.
    pub const GRAY: [(u16, &str); 10] = [
        (50, "#F9FAFB"),
        (100, "#F3F4F6"),
        (200, "#E5E7EB"),
        (300, "#D1D5DB"),
        (400, "#9CA3AF"),
        (500, "#6B7280"),
        (600, "#4B5563"),
        (700, "#374151"),
        (800, "#1F2937"),
        (900, "#111827"),
    ];

    pub fn gray(shade: u16) -> Option<&'static str> {
        GRAY.iter()
            .find(|(s, _)| *s == shade)
            .map(|(_, hex)| *hex)
    }
}

/// Responsive breakpoints in px (min-width).
pub mod breakpoints {
    pub const XS: u32 = 475;
    pub const SM: u32 = 640;
    pub const MD: u32 = 768;
    pub const LG: u32 = 1024;
    pub const XL: u32 = 1280;
    pub const XXL: u32 = 1536;
}

pub mod routes {
    pub const HOME: &str = "/";
    pub const LISTINGS: &str = "/listings";
    pub const PROPERTY_DETAILS: &str = "/property";
    pub const PROFILE: &str = "/profile";
    pub const BOOKINGS: &str = "/bookings";
    pub const HOST: &str = "/host";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub icon: &'static str,
}

pub const PROPERTY_CATEGORIES: [Category; 12] = [
    Category { name: "Houses", icon: "🏠" },
    Category { name: "Apartments", icon: "🏢" },
    Category { name: "Countryside", icon: "🌾" },
    Category { name: "Amazing views", icon: "🏔️" },
    Category { name: "Tiny homes", icon: "🏘️" },
    Category { name: "Amazing pools", icon: "🏊‍♂️" },
    Category { name: "Beach front", icon: "🏖️" },
    Category { name: "Rooms", icon: "🛏️" },
    Category { name: "Off-the-grid", icon: "⚡" },
    Category { name: "Castles", icon: "🏰" },
    Category { name: "Farms", icon: "🚜" },
    Category { name: "New", icon: "✨" },
];

pub const FILTERS: [&str; 7] = [
    "Top picks",
    "New arrivals",
    "Say Villas",
    "Free cancellation",
    "Book now pay later",
    "Self check-in",
    "Instant book",
];

pub const PROPERTY_TYPES: [&str; 3] = ["Top Villa", "Self Checkin", "Free Reschedule"];

pub const AMENITIES: [&str; 12] = [
    "WiFi",
    "Kitchen",
    "Washing machine",
    "Free parking",
    "Air conditioning",
    "Pool",
    "Hot tub",
    "Pet friendly",
    "Workspace",
    "TV",
    "Gym",
    "Breakfast",
];

/// Currency code → display symbol.
pub const CURRENCIES: [(&str, &str); 4] = [("USD", "$"), ("EUR", "€"), ("GBP", "£"), ("JPY", "¥")];

/// Codes offered by the header selector.
pub const SELECTABLE_CURRENCIES: [&str; 3] = ["USD", "EUR", "GBP"];

pub fn currency_symbol(code: &str) -> Option<&'static str> {
    CURRENCIES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, symbol)| *symbol)
}

pub const HERO_IMAGE: &str = "/assets/hero-background.jpg";
