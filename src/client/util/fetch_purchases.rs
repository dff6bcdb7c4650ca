use crate::client::util::{get_json, FetchError};
use crate::model::purchase::PurchaseDto;

/// Retrieve the signed-in user's purchase history from the storefront API.
///
/// A 404 means the user has no history yet and comes back as an empty list.
pub async fn fetch_purchases() -> Result<Vec<PurchaseDto>, FetchError> {
    match get_json("/api/user/purchases").await {
        Err(FetchError::Api { status: 404, .. }) => Ok(Vec::new()),
        result => result,
    }
}
