//! Tests for the jersey-selection completeness selector.

use std::sync::Arc;

use crate::client::selectors::tests::support;
use crate::client::selectors::CheckoutSelectors;

/// Tests counting unpicked jersey sizes on a cart line.
///
/// Verifies that the selector counts the `None` entries of an item whose trip
/// offers the jersey add-on.
///
/// Expected: one record with missing_count 2
#[test]
fn counts_missing_selections_per_item() {
    let selectors = CheckoutSelectors::new();
    let mut trip = support::trip("bayern-away");
    trip.jersey_addon_available = true;
    let mut item = support::cart_item(trip, 3);
    item.jersey_selections = vec![Some(support::jersey("M")), None, None];

    let incomplete = selectors.incomplete_jersey_selections(&Arc::new(vec![item]));

    assert_eq!(incomplete.len(), 1);
    assert_eq!(incomplete[0].trip_id, "bayern-away");
    assert_eq!(incomplete[0].missing_count, 2);
}

/// Tests that fully selected items are not reported.
///
/// Verifies that an item with every jersey size picked produces no record.
///
/// Expected: empty list
#[test]
fn skips_items_with_all_selections_made() {
    let selectors = CheckoutSelectors::new();
    let mut trip = support::trip("bayern-away");
    trip.jersey_addon_available = true;
    let mut item = support::cart_item(trip, 2);
    item.jersey_selections = vec![Some(support::jersey("M")), Some(support::jersey("L"))];

    assert!(selectors
        .incomplete_jersey_selections(&Arc::new(vec![item]))
        .is_empty());
}

/// Tests that trips without the jersey add-on are ignored.
///
/// Verifies that `None` entries on an item whose trip does not offer jerseys do
/// not produce a record.
///
/// Expected: empty list
#[test]
fn ignores_trips_without_jersey_addon() {
    let selectors = CheckoutSelectors::new();
    let mut item = support::cart_item(support::trip("derby-home"), 1);
    item.jersey_selections = vec![None];

    assert!(selectors
        .incomplete_jersey_selections(&Arc::new(vec![item]))
        .is_empty());
}

/// Tests reporting of multiple incomplete items for the same trip.
///
/// Verifies that each contributing cart item is reported on its own; records are
/// not de-duplicated by trip id.
///
/// Expected: two records, both for the same trip id
#[test]
fn reports_each_contributing_item_separately() {
    let selectors = CheckoutSelectors::new();
    let mut trip = support::trip("bayern-away");
    trip.jersey_addon_available = true;
    let mut first = support::cart_item(trip.clone(), 1);
    first.jersey_selections = vec![None];
    let mut second = support::cart_item(trip, 1);
    second.jersey_selections = vec![None, None];

    let incomplete = selectors.incomplete_jersey_selections(&Arc::new(vec![first, second]));

    assert_eq!(incomplete.len(), 2);
    assert_eq!(incomplete[0].trip_id, "bayern-away");
    assert_eq!(incomplete[0].missing_count, 1);
    assert_eq!(incomplete[1].trip_id, "bayern-away");
    assert_eq!(incomplete[1].missing_count, 2);
}
