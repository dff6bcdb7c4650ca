use std::sync::Arc;

use crate::model::event::EventDto;

/// Default page size for event listings.
pub static DEFAULT_ITEMS_PER_PAGE: usize = 12;

/// Events fetched from the upstream events endpoint plus listing pagination.
#[derive(Clone, Debug, PartialEq)]
pub struct EventsState {
    pub events: Arc<Vec<EventDto>>,
    pub current_page: usize,
    pub items_per_page: usize,
    pub fetched: bool,
}

impl Default for EventsState {
    fn default() -> Self {
        Self {
            events: Arc::new(Vec::new()),
            current_page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            fetched: false,
        }
    }
}

impl EventsState {
    pub fn set_events(&mut self, events: Vec<EventDto>) {
        self.events = Arc::new(events);
        self.fetched = true;
    }

    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }
}
