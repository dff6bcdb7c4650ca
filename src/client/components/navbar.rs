use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaCartShopping;
use dioxus_free_icons::Icon;

use crate::client::components::{Footer, GlobalLoadingHost, LanguageSwitcher, StoreTitleButton};
use crate::client::selectors::StorefrontSelectors;
use crate::client::store::CheckoutState;

pub use crate::client::router::Route;

/// Header chrome shared by every route, plus the global loading host and footer.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200",
            div {
                class: "navbar-start",
                StoreTitleButton {}
            }
            div {
                class: "navbar-end gap-2",
                Link {
                    to: Route::Home {},
                    class: "btn btn-ghost btn-sm",
                    "Events"
                }
                Link {
                    to: Route::MyTrips {},
                    class: "btn btn-ghost btn-sm",
                    "My Trips"
                }
                CartBadge {}
                LanguageSwitcher {}
            }
        }

        GlobalLoadingHost {}
        Outlet::<Route> {}
        Footer {}
    }
}

/// Cart icon showing the total ticket count from the checkout selectors.
#[component]
pub fn CartBadge() -> Element {
    let checkout = use_context::<Signal<CheckoutState>>();
    let selectors = use_context::<Rc<StorefrontSelectors>>();

    let item_count = *selectors.checkout.item_count(&checkout.read().items);

    rsx! {
        button {
            class: "btn btn-ghost btn-sm",
            div { class: "indicator",
                Icon {
                    width: 20,
                    height: 20,
                    icon: FaCartShopping
                }
                if item_count > 0 {
                    span {
                        class: "badge badge-sm badge-primary indicator-item",
                        "{item_count}"
                    }
                }
            }
        }
    }
}
