//! Tests for the cart empty check selector.

use std::sync::Arc;

use crate::client::selectors::tests::support;
use crate::client::selectors::CheckoutSelectors;

/// Tests the empty cart case.
///
/// Verifies that a cart with no lines reports empty.
///
/// Expected: true
#[test]
fn reports_empty_for_no_items() {
    let selectors = CheckoutSelectors::new();
    let items = Arc::new(Vec::new());

    assert!(*selectors.is_empty(&items));
}

/// Tests a cart with a line of quantity zero is still not empty.
///
/// Verifies that emptiness is defined by the number of lines, not the ticket
/// count.
///
/// Expected: false
#[test]
fn reports_not_empty_for_any_line() {
    let selectors = CheckoutSelectors::new();
    let items = Arc::new(vec![support::cart_item(support::trip("bayern-away"), 1)]);

    assert!(!*selectors.is_empty(&items));
}
