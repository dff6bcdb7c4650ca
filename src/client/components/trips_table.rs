use chrono::Utc;
use dioxus::prelude::*;

use crate::client::selectors::user::trip_history;
use crate::client::store::{TripsState, UserState};
use crate::model::purchase::PurchaseDto;

/// The signed-in user's confirmed trips, split into upcoming and past sections.
#[component]
pub fn TripsTable() -> Element {
    let user_store = use_context::<Signal<UserState>>();

    let user = user_store.read();
    let history = trip_history(&user.purchases, Utc::now());

    rsx!(
        div { class: "flex flex-col gap-6 w-full",
            TripSection { title: "Upcoming Trips", purchases: history.upcoming }
            TripSection { title: "Past Trips", purchases: history.past }
        }
    )
}

#[component]
fn TripSection(title: &'static str, purchases: Vec<PurchaseDto>) -> Element {
    let trips = try_consume_context::<Signal<TripsState>>();

    rsx!(
        div {
            h2 { class: "text-lg font-semibold mb-2",
                "{title}"
            }
            if purchases.is_empty() {
                p { class: "text-sm opacity-70",
                    "Nothing here yet."
                }
            } else {
                div {
                    class: "overflow-x-auto",
                    table {
                        class: "table table-md",
                        thead {
                            tr {
                                th { "Trip" }
                                th { "Date" }
                                th { "Total" }
                            }
                        }
                        tbody {
                            {purchases.iter().map(|purchase| {
                                let trip_label = trip_label(purchase, trips.as_ref());
                                let date = purchase.date.format("%b %e, %Y").to_string();
                                let total = format!("€{:.2}", purchase.total);
                                rsx! {
                                    tr {
                                        td { "{trip_label}" }
                                        td { "{date}" }
                                        td { "{total}" }
                                    }
                                }
                            })}
                        }
                    }
                }
            }
        }
    )
}

/// Resolves a purchase's trip id against the catalog, falling back to the raw id
/// for trips no longer listed.
fn trip_label(purchase: &PurchaseDto, trips: Option<&Signal<TripsState>>) -> String {
    let Some(trips) = trips else {
        return purchase.trip_id.clone();
    };

    let state = trips.read();
    state
        .trips
        .iter()
        .find(|trip| trip.id == purchase.trip_id)
        .map(|trip| trip.title.clone())
        .unwrap_or_else(|| purchase.trip_id.clone())
}
