//! Derived state for the events listing.
//!
//! Event flags arrive as the strings `"0"` and `"1"` from the upstream API.
//! Every filter here compares against `"1"` with exact string equality; see
//! [`crate::model::event::EventDto`] for why truthiness must not be used.

use std::collections::HashSet;
use std::sync::Arc;

use crate::client::selectors::memo::{KeyedSelector, Selector};
use crate::model::event::{EventCategory, EventDto};

/// Flag value the upstream API uses for "true".
static FLAG_SET: &str = "1";

/// Page window for the events listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page number
    pub current_page: usize,
    pub items_per_page: usize,
}

/// Memoized selectors over the events slice.
pub struct EventSelectors {
    categories: Selector<Vec<EventDto>, Vec<EventCategory>>,
    trending: Selector<Vec<EventDto>, Vec<EventDto>>,
    presale: Selector<Vec<EventDto>, Vec<EventDto>>,
    available: Selector<Vec<EventDto>, Vec<EventDto>>,
    paginated: KeyedSelector<Vec<EventDto>, Pagination, Vec<EventDto>>,
}

impl Default for EventSelectors {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSelectors {
    pub fn new() -> Self {
        Self {
            categories: Selector::new(compute_categories),
            trending: Selector::new(|events| filter_by_flag(events, |e| &e.is_trending)),
            presale: Selector::new(|events| filter_by_flag(events, |e| &e.is_presale)),
            available: Selector::new(compute_available),
            paginated: KeyedSelector::new(compute_page),
        }
    }

    /// Categories across all events, de-duplicated by category id. The first
    /// occurrence wins and the original encounter order is kept.
    pub fn categories(&self, events: &Arc<Vec<EventDto>>) -> Arc<Vec<EventCategory>> {
        self.categories.select(events)
    }

    /// Events with `is_trending == "1"`.
    pub fn trending(&self, events: &Arc<Vec<EventDto>>) -> Arc<Vec<EventDto>> {
        self.trending.select(events)
    }

    /// Events with `is_presale == "1"`.
    pub fn presale(&self, events: &Arc<Vec<EventDto>>) -> Arc<Vec<EventDto>> {
        self.presale.select(events)
    }

    /// Events not marked sold out.
    ///
    /// An event counts as available whenever `is_sold_out` is anything other
    /// than exactly `"1"`, including an absent flag. This mirrors the upstream
    /// storefront's behavior for events that predate the flag.
    pub fn available(&self, events: &Arc<Vec<EventDto>>) -> Arc<Vec<EventDto>> {
        self.available.select(events)
    }

    /// One page out of an already-filtered event list.
    ///
    /// Pages are 1-based and map to the zero-indexed window
    /// `[(page - 1) * per, page * per)`. A page outside the list, page 0, or a
    /// zero page size all yield an empty list rather than an error.
    pub fn paginated(
        &self,
        events: &Arc<Vec<EventDto>>,
        pagination: &Pagination,
    ) -> Arc<Vec<EventDto>> {
        self.paginated.select(events, pagination)
    }
}

/// Number of listing pages needed for `total_count` items.
pub fn total_pages(total_count: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 0;
    }
    total_count.div_ceil(items_per_page)
}

fn compute_categories(events: &Vec<EventDto>) -> Vec<EventCategory> {
    let mut seen: HashSet<String> = HashSet::new();
    events
        .iter()
        .filter(|event| seen.insert(event.category.id.clone()))
        .map(|event| event.category.clone())
        .collect()
}

fn filter_by_flag(events: &[EventDto], flag: fn(&EventDto) -> &String) -> Vec<EventDto> {
    events
        .iter()
        .filter(|event| flag(event) == FLAG_SET)
        .cloned()
        .collect()
}

fn compute_available(events: &Vec<EventDto>) -> Vec<EventDto> {
    events
        .iter()
        .filter(|event| event.is_sold_out != FLAG_SET)
        .cloned()
        .collect()
}

fn compute_page(events: &Vec<EventDto>, pagination: &Pagination) -> Vec<EventDto> {
    if pagination.current_page == 0 || pagination.items_per_page == 0 {
        return Vec::new();
    }

    let start = (pagination.current_page - 1) * pagination.items_per_page;
    if start >= events.len() {
        return Vec::new();
    }

    let end = (start + pagination.items_per_page).min(events.len());
    events[start..end].to_vec()
}
