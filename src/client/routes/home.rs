use std::rc::Rc;

use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::client::components::{LoadingMask, LoadingVariant, Page};
use crate::client::selectors::events::{total_pages, Pagination};
use crate::client::selectors::StorefrontSelectors;
use crate::client::store::EventsState;
use crate::model::event::EventDto;

#[component]
pub fn Home() -> Element {
    let mut events_store = use_context::<Signal<EventsState>>();
    let selectors = use_context::<Rc<StorefrontSelectors>>();

    // Retrieve the event listing on component load
    #[cfg(feature = "web")]
    {
        let future = use_resource(|| async move { crate::client::util::fetch_events().await });

        match &*future.read_unchecked() {
            Some(Ok(events)) => {
                if !events_store.read().fetched {
                    events_store.write().set_events(events.clone());
                }
            }
            Some(Err(err)) => {
                tracing::error!("Failed to load events: {err}");
            }
            None => (),
        }
    }

    let state = events_store.read();
    let fetched = state.fetched;
    let current_page = state.current_page;
    let items_per_page = state.items_per_page;

    let trending = selectors.events.trending(&state.events);
    let available = selectors.events.available(&state.events);
    let pagination = Pagination {
        current_page,
        items_per_page,
    };
    let page = selectors.events.paginated(&available, &pagination);
    let page_count = total_pages(available.len(), items_per_page);

    rsx!(
        Title { "Matchday | Event Tickets & Trips" }
        Meta {
            name: "description",
            content: "Tickets, travel, and jersey add-ons for the biggest match days in Europe."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] p-6 flex flex-col gap-6",
                if !trending.is_empty() {
                    div { class: "flex flex-wrap items-center gap-2",
                        p { class: "font-semibold", "Trending:" }
                        {trending.iter().map(|event| {
                            let name = event.category.name.clone();
                            rsx! {
                                span { class: "badge badge-secondary", "{name}" }
                            }
                        })}
                    }
                }

                LoadingMask {
                    visible: !fetched,
                    variant: LoadingVariant::Spinner,
                    label: String::from("Loading events"),
                    blur: true,
                    div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4 min-h-64",
                        {page.iter().map(|event| rsx! {
                            EventCard { event: event.clone() }
                        })}
                    }
                }

                if page_count > 1 {
                    div { class: "join self-center",
                        button {
                            class: "join-item btn",
                            disabled: current_page <= 1,
                            onclick: move |_| {
                                let page = events_store.read().current_page;
                                events_store.write().set_page(page.saturating_sub(1));
                            },
                            "«"
                        }
                        button { class: "join-item btn",
                            "Page {current_page} of {page_count}"
                        }
                        button {
                            class: "join-item btn",
                            disabled: current_page >= page_count,
                            onclick: move |_| {
                                let page = events_store.read().current_page;
                                events_store.write().set_page(page + 1);
                            },
                            "»"
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn EventCard(event: EventDto) -> Element {
    let category = event.category.name.clone();
    let date = event.date.clone();
    let presale = event.is_presale == "1";

    rsx!(
        div { class: "card bg-base-200 shadow-sm",
            div { class: "card-body",
                h2 { class: "card-title", "{category}" }
                p { class: "text-sm opacity-70", "{date}" }
                div { class: "card-actions justify-end",
                    if presale {
                        span { class: "badge badge-accent", "Presale" }
                    }
                    button { class: "btn btn-primary btn-sm", "View trip" }
                }
            }
        }
    )
}
