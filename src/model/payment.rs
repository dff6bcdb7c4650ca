use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Publishable payment-provider configuration fetched from the storefront API.
///
/// `last_fetched` is stamped client-side when the payload arrives and drives the
/// one-hour refresh policy in the selector layer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentKeysDto {
    #[serde(default)]
    pub stripe: Option<StripeKeys>,
    #[serde(default)]
    pub paypal: Option<PaypalKeys>,
    #[serde(default)]
    pub last_fetched: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StripeKeys {
    pub publishable_key: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaypalKeys {
    pub client_id: String,
}
