//! Derived state for the trip catalog listing.

use std::sync::Arc;

use crate::client::selectors::memo::Selector2;
use crate::client::store::trips::TripFilters;
use crate::model::trip::TripDto;

/// Memoized selectors over the trips slice.
pub struct TripSelectors {
    filtered: Selector2<Vec<TripDto>, TripFilters, Vec<TripDto>>,
}

impl Default for TripSelectors {
    fn default() -> Self {
        Self::new()
    }
}

impl TripSelectors {
    pub fn new() -> Self {
        Self {
            filtered: Selector2::new(compute_filtered),
        }
    }

    /// Trips matching every active filter.
    ///
    /// Filters combine with logical AND; an inactive filter (empty string,
    /// unset bound) matches every trip. The search filter is a case-insensitive
    /// substring match that passes when the query appears in the title, the
    /// location, or the category.
    pub fn filtered(
        &self,
        trips: &Arc<Vec<TripDto>>,
        filters: &Arc<TripFilters>,
    ) -> Arc<Vec<TripDto>> {
        self.filtered.select(trips, filters)
    }
}

fn compute_filtered(trips: &Vec<TripDto>, filters: &TripFilters) -> Vec<TripDto> {
    trips
        .iter()
        .filter(|trip| matches_filters(trip, filters))
        .cloned()
        .collect()
}

fn matches_filters(trip: &TripDto, filters: &TripFilters) -> bool {
    matches_search(trip, &filters.search)
        && (filters.category.is_empty() || trip.category == filters.category)
        && (filters.location.is_empty() || trip.location == filters.location)
        && matches_price_range(trip, filters.min_price, filters.max_price)
        && matches_date_range(trip, filters)
}

fn matches_search(trip: &TripDto, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }

    let query = search.to_lowercase();
    trip.title.to_lowercase().contains(&query)
        || trip.location.to_lowercase().contains(&query)
        || trip.category.to_lowercase().contains(&query)
}

fn matches_price_range(trip: &TripDto, min: Option<f64>, max: Option<f64>) -> bool {
    if min.is_none() && max.is_none() {
        return true;
    }

    // The API delivers prices as decimal strings; a malformed price degrades to 0.0
    let price = trip.price.parse::<f64>().unwrap_or(0.0);
    min.is_none_or(|min| price >= min) && max.is_none_or(|max| price <= max)
}

fn matches_date_range(trip: &TripDto, filters: &TripFilters) -> bool {
    let date = trip.date.date_naive();
    filters.from_date.is_none_or(|from| date >= from)
        && filters.to_date.is_none_or(|to| date <= to)
}
