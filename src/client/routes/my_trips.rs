use std::rc::Rc;

use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::components::GlobalLoading;
use crate::client::components::{Page, TripsTable};
use crate::client::selectors::StorefrontSelectors;
#[cfg(feature = "web")]
use crate::client::store::TripsState;
use crate::client::store::UserState;

#[component]
pub fn MyTrips() -> Element {
    let mut user_store = use_context::<Signal<UserState>>();
    let selectors = use_context::<Rc<StorefrontSelectors>>();

    // Retrieve purchase history on component load, masking the viewport while
    // the request is in flight
    #[cfg(feature = "web")]
    {
        let mut global_loading = use_context::<GlobalLoading>();
        let future = use_resource(|| async move { crate::client::util::fetch_purchases().await });

        match &*future.read_unchecked() {
            Some(Ok(purchases)) => {
                if global_loading.is_visible() {
                    global_loading.hide();
                }
                if !user_store.read().fetched {
                    let mut user = user_store.write();
                    user.set_purchases(purchases.clone());
                    user.fetched = true;
                }
            }
            Some(Err(err)) => {
                if global_loading.is_visible() {
                    global_loading.hide();
                }
                tracing::error!("Failed to load purchase history: {err}");
            }
            None => {
                if !global_loading.is_visible() {
                    global_loading.show(Some(String::from("Loading your trips")));
                }
            }
        }
    }

    // Retrieve the trip catalog so purchase rows can resolve trip titles
    #[cfg(feature = "web")]
    {
        let mut trips_store = use_context::<Signal<TripsState>>();
        let trips_future =
            use_resource(|| async move { crate::client::util::fetch_trips().await });

        match &*trips_future.read_unchecked() {
            Some(Ok(trips)) => {
                if !trips_store.read().fetched {
                    trips_store.write().set_trips(trips.clone());
                }
            }
            Some(Err(err)) => {
                tracing::error!("Failed to load trip catalog: {err}");
            }
            None => (),
        }
    }

    let user = user_store.read();
    let total_spent = *selectors.user.total_spent(&user.purchases);
    let recent = selectors.user.recent_purchases(&user.purchases);
    let total = format!("€{total_spent:.2}");
    let recent_count = recent.len();

    rsx!(
        Title { "My Trips | Matchday" }
        Meta {
            name: "description",
            content: "Your upcoming and past match trips."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1024px] p-6 flex flex-col gap-6",
                div { class: "stats shadow",
                    div { class: "stat",
                        div { class: "stat-title", "Total spent" }
                        div { class: "stat-value text-primary", "{total}" }
                        div { class: "stat-desc", "Confirmed purchases only" }
                    }
                    div { class: "stat",
                        div { class: "stat-title", "Recent purchases" }
                        div { class: "stat-value", "{recent_count}" }
                        div { class: "stat-desc", "Last five orders" }
                    }
                }
                TripsTable {}
            }
        }
    )
}
