//! Tests for the paginated events selector.

use std::sync::Arc;

use crate::client::selectors::events::Pagination;
use crate::client::selectors::tests::support;
use crate::client::selectors::EventSelectors;
use crate::model::event::EventDto;

fn numbered_events(count: usize) -> Arc<Vec<EventDto>> {
    Arc::new(
        (0..count)
            .map(|i| support::event(&format!("event-{i}"), "bundesliga"))
            .collect(),
    )
}

/// Tests the window of a middle page.
///
/// Verifies that page 3 of 25 events at 10 per page covers zero-based indices
/// [20, 25).
///
/// Expected: 5 events, starting at "event-20"
#[test]
fn returns_zero_indexed_window() {
    let selectors = EventSelectors::new();
    let events = numbered_events(25);
    let pagination = Pagination {
        current_page: 3,
        items_per_page: 10,
    };

    let page = selectors.paginated(&events, &pagination);

    assert_eq!(page.len(), 5);
    assert_eq!(page[0].id, "event-20");
    assert_eq!(page[4].id, "event-24");
}

/// Tests a full first page.
///
/// Verifies that page 1 covers the first `items_per_page` events.
///
/// Expected: 10 events starting at "event-0"
#[test]
fn returns_full_first_page() {
    let selectors = EventSelectors::new();
    let events = numbered_events(25);
    let pagination = Pagination {
        current_page: 1,
        items_per_page: 10,
    };

    let page = selectors.paginated(&events, &pagination);

    assert_eq!(page.len(), 10);
    assert_eq!(page[0].id, "event-0");
}

/// Tests a page past the end of the list.
///
/// Verifies that an out-of-range page yields an empty list rather than an error.
///
/// Expected: empty list
#[test]
fn returns_empty_for_out_of_range_page() {
    let selectors = EventSelectors::new();
    let events = numbered_events(25);
    let pagination = Pagination {
        current_page: 4,
        items_per_page: 10,
    };

    assert!(selectors.paginated(&events, &pagination).is_empty());
}

/// Tests degenerate pagination parameters.
///
/// Verifies that page zero and a zero page size both yield an empty list rather
/// than underflowing or dividing by zero.
///
/// Expected: empty lists
#[test]
fn returns_empty_for_degenerate_parameters() {
    let selectors = EventSelectors::new();
    let events = numbered_events(5);

    let page_zero = Pagination {
        current_page: 0,
        items_per_page: 10,
    };
    let no_page_size = Pagination {
        current_page: 1,
        items_per_page: 0,
    };

    assert!(selectors.paginated(&events, &page_zero).is_empty());
    assert!(selectors.paginated(&events, &no_page_size).is_empty());
}
