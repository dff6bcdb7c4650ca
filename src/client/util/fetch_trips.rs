use crate::client::util::{get_json, FetchError};
use crate::model::trip::TripDto;

/// Retrieve the trip catalog from the storefront API
pub async fn fetch_trips() -> Result<Vec<TripDto>, FetchError> {
    get_json("/api/trips").await
}
