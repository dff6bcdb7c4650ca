use crate::client::util::{get_json, FetchError};
use crate::model::payment::PaymentKeysDto;

/// Retrieve publishable payment-provider keys from the storefront API
pub async fn fetch_payment_keys() -> Result<PaymentKeysDto, FetchError> {
    get_json("/api/payment/keys").await
}
