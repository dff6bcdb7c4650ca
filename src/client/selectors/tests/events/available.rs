//! Tests for the available events selector.

use std::sync::Arc;

use crate::client::selectors::tests::support;
use crate::client::selectors::EventSelectors;

/// Tests exclusion of sold-out events.
///
/// Verifies that an event flagged `is_sold_out == "1"` is filtered out while a
/// `"0"` event stays.
///
/// Expected: only event "a"
#[test]
fn excludes_sold_out_events() {
    let selectors = EventSelectors::new();
    let open = support::event("a", "bundesliga");
    let mut sold_out = support::event("b", "bundesliga");
    sold_out.is_sold_out = "1".to_string();

    let result = selectors.available(&Arc::new(vec![open, sold_out]));

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "a");
}

/// Tests that a missing sold-out flag counts as available.
///
/// Verifies that an event whose flag deserialized to an empty string passes the
/// filter, matching the upstream storefront's handling of events that predate
/// the flag.
///
/// Expected: the event is included
#[test]
fn treats_missing_flag_as_available() {
    let selectors = EventSelectors::new();
    let mut event = support::event("a", "bundesliga");
    event.is_sold_out = String::new();

    assert_eq!(selectors.available(&Arc::new(vec![event])).len(), 1);
}
