use crate::client::util::{get_json, FetchError};
use crate::model::event::EventDto;

/// Retrieve the raw event listing from the storefront API
pub async fn fetch_events() -> Result<Vec<EventDto>, FetchError> {
    get_json("/api/events").await
}
