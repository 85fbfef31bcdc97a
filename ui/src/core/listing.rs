//! Property listing records and the embedded sample catalog.

use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::{macros::format_description, Date};

const SAMPLE_CATALOG: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/data/listings.json"
));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(pub u32);

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Amenities {
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub area: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Host {
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub verified: bool,
}

/// Booking window, dates as `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    pub start_date: String,
    pub end_date: String,
}

impl Availability {
    pub fn dates(&self) -> Option<(Date, Date)> {
        let fmt = format_description!("[year]-[month]-[day]");
        let start = Date::parse(&self.start_date, &fmt).ok()?;
        let end = Date::parse(&self.end_date, &fmt).ok()?;
        Some((start, end))
    }

    pub fn nights(&self) -> Option<i64> {
        self.dates()
            .map(|(start, end)| (end - start).whole_days())
            .filter(|n| *n >= 0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyListing {
    pub id: ListingId,
    pub title: String,
    pub location: String,
    pub price: u32,
    #[serde(default)]
    pub original_price: Option<u32>,
    #[serde(default)]
    pub discount_percentage: Option<u8>,
    pub currency: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub rating: f32,
    pub review_count: u32,
    #[serde(default)]
    pub property_types: Vec<String>,
    pub amenities: Amenities,
    pub host: Host,
    pub availability: Availability,
    #[serde(default)]
    pub is_favorited: bool,
}

impl PropertyListing {
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// A discount badge is only shown when both a percentage and a higher
    /// original price exist.
    pub fn discount(&self) -> Option<u8> {
        match (self.discount_percentage, self.original_price) {
            (Some(pct), Some(original)) if pct > 0 && original > self.price => Some(pct),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("sample catalog is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("duplicate listing id {0}")]
    DuplicateId(ListingId),
}

pub fn parse_catalog(raw: &str) -> Result<Vec<PropertyListing>, CatalogError> {
    let listings: Vec<PropertyListing> = serde_json::from_str(raw)?;
    for (idx, listing) in listings.iter().enumerate() {
        if listings[..idx].iter().any(|l| l.id == listing.id) {
            return Err(CatalogError::DuplicateId(listing.id));
        }
    }
    Ok(listings)
}

static CATALOG: Lazy<Result<Vec<PropertyListing>, CatalogError>> =
    Lazy::new(|| parse_catalog(SAMPLE_CATALOG));

/// The bundled sample listings (decoded once).
pub fn sample_listings() -> Result<&'static [PropertyListing], &'static CatalogError> {
    match &*CATALOG {
        Ok(listings) => Ok(listings.as_slice()),
        Err(err) => {
            tracing::warn!("sample catalog unavailable: {err}");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_decodes() {
        let listings = sample_listings().expect("bundled catalog");
        assert_eq!(listings.len(), 4);
        assert_eq!(listings[0].title, "Villa Arrecife Beach House");
        assert_eq!(listings[0].discount(), Some(30));
        assert!(listings[1..].iter().all(|l| l.discount().is_none()));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let raw = r#"[
            {"id":1,"title":"a","location":"x","price":1,"currency":"USD","rating":4.0,"review_count":1,
             "amenities":{"bedrooms":1,"bathrooms":1,"area":1},"host":{"name":"h"},
             "availability":{"start_date":"2025-01-01","end_date":"2025-01-02"}},
            {"id":1,"title":"b","location":"y","price":2,"currency":"USD","rating":4.0,"review_count":1,
             "amenities":{"bedrooms":1,"bathrooms":1,"area":1},"host":{"name":"h"},
             "availability":{"start_date":"2025-01-01","end_date":"2025-01-02"}}
        ]"#;
        assert!(matches!(parse_catalog(raw), Err(CatalogError::DuplicateId(ListingId(1)))));
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = parse_catalog("{").unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn bundled_catalog_error_stays_typed() {
        let result: Result<&'static [PropertyListing], &'static CatalogError> = sample_listings();
        match result {
            Ok(listings) => assert!(!listings.is_empty()),
            Err(CatalogError::Malformed(err)) => panic!("bundled JSON is malformed: {err}"),
            Err(CatalogError::DuplicateId(id)) => panic!("bundled JSON repeats id {id}"),
        }
    }

    #[test]
    fn availability_nights() {
        let window = Availability {
            start_date: "2025-03-01".into(),
            end_date: "2025-03-08".into(),
        };
        assert_eq!(window.nights(), Some(7));

        let bogus = Availability {
            start_date: "soon".into(),
            end_date: "2025-03-08".into(),
        };
        assert_eq!(bogus.nights(), None);
    }

    #[test]
    fn discount_requires_higher_original_price() {
        let mut listing = sample_listings().unwrap()[0].clone();
        listing.original_price = Some(listing.price);
        assert_eq!(listing.discount(), None);
    }
}
