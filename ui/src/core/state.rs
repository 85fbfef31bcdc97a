//! Homepage UI state: the only mutable data on the page.

use std::collections::BTreeSet;

use crate::constants::{FILTERS, PROPERTY_CATEGORIES};

use super::listing::{ListingId, PropertyListing};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    HighestPrice,
    LowestPrice,
    Rating,
    Newest,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        SortOrder::HighestPrice,
        SortOrder::LowestPrice,
        SortOrder::Rating,
        SortOrder::Newest,
    ];

    /// Stable key used as the `<option>` value.
    pub fn key(self) -> &'static str {
        match self {
            SortOrder::HighestPrice => "price-desc",
            SortOrder::LowestPrice => "price-asc",
            SortOrder::Rating => "rating",
            SortOrder::Newest => "newest",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    pub fn sort(self, listings: &mut [PropertyListing]) {
        match self {
            SortOrder::HighestPrice => listings.sort_by(|a, b| b.price.cmp(&a.price)),
            SortOrder::LowestPrice => listings.sort_by(|a, b| a.price.cmp(&b.price)),
            SortOrder::Rating => listings.sort_by(|a, b| {
                b.rating
                    .total_cmp(&a.rating)
                    .then(b.review_count.cmp(&a.review_count))
            }),
            SortOrder::Newest => listings.sort_by(|a, b| b.id.cmp(&a.id)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeState {
    pub active_category: String,
    pub active_filter: String,
    pub currency: String,
    pub sort: SortOrder,
    favorites: BTreeSet<ListingId>,
}

impl Default for HomeState {
    fn default() -> Self {
        Self::new(super::config::app_config().defaults.currency)
    }
}

impl HomeState {
    pub fn new(currency: &str) -> Self {
        Self {
            active_category: PROPERTY_CATEGORIES[0].name.to_string(),
            active_filter: FILTERS[0].to_string(),
            currency: currency.to_string(),
            sort: SortOrder::default(),
            favorites: BTreeSet::new(),
        }
    }

    /// Flip membership of `id`. Returns whether it is now a favorite.
    pub fn toggle_favorite(&mut self, id: ListingId) -> bool {
        if self.favorites.remove(&id) {
            false
        } else {
            self.favorites.insert(id);
            true
        }
    }

    pub fn is_favorited(&self, id: ListingId) -> bool {
        self.favorites.contains(&id)
    }

    pub fn favorites(&self) -> impl Iterator<Item = ListingId> + '_ {
        self.favorites.iter().copied()
    }

    pub fn select_category(&mut self, name: &str) {
        self.active_category = name.to_string();
    }

    pub fn select_filter(&mut self, label: &str) {
        self.active_filter = label.to_string();
    }

    pub fn set_currency(&mut self, code: &str) {
        self.currency = code.to_string();
    }

    pub fn is_active_category(&self, name: &str) -> bool {
        self.active_category == name
    }

    pub fn is_active_filter(&self, label: &str) -> bool {
        self.active_filter == label
    }

    /// Listings in display order with the session favorite flag applied.
    pub fn arrange(&self, listings: &[PropertyListing]) -> Vec<PropertyListing> {
        let mut arranged: Vec<PropertyListing> = listings
            .iter()
            .cloned()
            .map(|mut listing| {
                listing.is_favorited = self.is_favorited(listing.id);
                listing
            })
            .collect();
        self.sort.sort(&mut arranged);
        arranged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::listing::sample_listings;

    #[test]
    fn starts_on_first_category_and_filter() {
        let state = HomeState::new("USD");
        assert_eq!(state.active_category, "Houses");
        assert_eq!(state.active_filter, "Top picks");
        assert_eq!(state.favorites().count(), 0);
    }

    #[test]
    fn toggling_twice_restores_membership() {
        let mut state = HomeState::new("USD");
        state.toggle_favorite(ListingId(3));
        let before: Vec<_> = state.favorites().collect();

        assert!(state.toggle_favorite(ListingId(1)));
        assert!(state.is_favorited(ListingId(1)));
        assert!(!state.toggle_favorite(ListingId(1)));

        assert_eq!(state.favorites().collect::<Vec<_>>(), before);
    }

    #[test]
    fn toggle_leaves_other_ids_alone() {
        let mut state = HomeState::new("USD");
        state.toggle_favorite(ListingId(2));
        state.toggle_favorite(ListingId(4));
        state.toggle_favorite(ListingId(2));
        assert!(!state.is_favorited(ListingId(2)));
        assert!(state.is_favorited(ListingId(4)));
    }

    #[test]
    fn category_selection_replaces_previous() {
        let mut state = HomeState::new("USD");
        state.select_category("Castles");
        state.select_category("Farms");
        assert!(state.is_active_category("Farms"));
        let active: Vec<_> = PROPERTY_CATEGORIES
            .iter()
            .filter(|c| state.is_active_category(c.name))
            .collect();
        assert_eq!(active.len(), 1);
    }

    #[test]
    fn filter_selection_replaces_previous() {
        let mut state = HomeState::new("USD");
        state.select_filter("Instant book");
        assert!(state.is_active_filter("Instant book"));
        assert!(!state.is_active_filter("Top picks"));
    }

    #[test]
    fn arrange_applies_sort_and_favorites() {
        let listings = sample_listings().unwrap();
        let mut state = HomeState::new("USD");
        state.toggle_favorite(ListingId(2));

        let prices: Vec<u32> = state.arrange(listings).iter().map(|l| l.price).collect();
        assert_eq!(prices, vec![2450, 627, 386, 154]);

        state.sort = SortOrder::LowestPrice;
        let arranged = state.arrange(listings);
        assert_eq!(arranged[0].price, 154);
        assert!(arranged.iter().find(|l| l.id == ListingId(2)).unwrap().is_favorited);

        state.sort = SortOrder::Rating;
        assert_eq!(state.arrange(listings)[0].id, ListingId(2));

        state.sort = SortOrder::Newest;
        assert_eq!(state.arrange(listings)[0].id, ListingId(4));
    }

    #[test]
    fn sort_keys_round_trip() {
        for order in SortOrder::ALL {
            assert_eq!(SortOrder::from_key(order.key()), Some(order));
        }
        assert_eq!(SortOrder::from_key("cheapest"), None);
    }
}
