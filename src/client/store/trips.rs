use std::sync::Arc;

use chrono::NaiveDate;

use crate::model::trip::TripDto;

/// Trip catalog plus the currently active listing filters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TripsState {
    pub trips: Arc<Vec<TripDto>>,
    pub filters: Arc<TripFilters>,
    pub fetched: bool,
}

impl TripsState {
    pub fn set_trips(&mut self, trips: Vec<TripDto>) {
        self.trips = Arc::new(trips);
        self.fetched = true;
    }

    pub fn set_filters(&mut self, filters: TripFilters) {
        self.filters = Arc::new(filters);
    }
}

/// Listing filters for the trip catalog.
///
/// An empty string or `None` means the filter is inactive and matches every trip.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TripFilters {
    pub search: String,
    pub category: String,
    pub location: String,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
}
