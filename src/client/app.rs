use std::rc::Rc;

#[cfg(feature = "web")]
use chrono::Utc;
use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::client::components::{GlobalLoading, GlobalLoadingState};
use crate::client::router::Route;
#[cfg(feature = "web")]
use crate::client::selectors::payment::should_refresh;
use crate::client::selectors::StorefrontSelectors;
use crate::client::store::{
    CheckoutState, EventsState, LanguageState, PaymentKeysState, TripsState, UserState,
};

/// Application root: provides every store slice, the shared selector caches, and
/// the global loading handle, then hands control to the router.
#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(CheckoutState::default()));
    use_context_provider(|| Signal::new(EventsState::default()));
    use_context_provider(|| Signal::new(TripsState::default()));
    use_context_provider(|| Signal::new(UserState::default()));
    use_context_provider(|| Signal::new(PaymentKeysState::default()));
    use_context_provider(|| Signal::new(LanguageState::default()));
    use_context_provider(|| Rc::new(StorefrontSelectors::new()));

    let loading = use_context_provider(|| Signal::new(GlobalLoadingState::default()));
    use_context_provider(|| GlobalLoading::new(loading));

    // Load publishable payment keys at startup. set_keys stamps the fetch time,
    // so the staleness check keeps later renders from restamping.
    #[cfg(feature = "web")]
    {
        let mut payment_store = use_context::<Signal<PaymentKeysState>>();
        let keys_future =
            use_resource(|| async move { crate::client::util::fetch_payment_keys().await });

        match &*keys_future.read_unchecked() {
            Some(Ok(keys)) => {
                if should_refresh(&payment_store.read().keys, Utc::now()) {
                    payment_store.write().set_keys(keys.clone(), Utc::now());
                }
            }
            Some(Err(err)) => {
                tracing::error!("Failed to load payment keys: {err}");
            }
            None => (),
        }
    }

    rsx!(Router::<Route> {})
}
