use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::model::payment::PaymentKeysDto;

/// Payment-provider keys cached client-side.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaymentKeysState {
    pub keys: Arc<PaymentKeysDto>,
}

impl PaymentKeysState {
    /// Stores a freshly fetched key payload, stamping `last_fetched`.
    pub fn set_keys(&mut self, mut keys: PaymentKeysDto, fetched_at: DateTime<Utc>) {
        keys.last_fetched = Some(fetched_at);
        self.keys = Arc::new(keys);
    }
}
