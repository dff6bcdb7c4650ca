//! Tests for the total_pages function.

use crate::client::selectors::events::total_pages;

/// Tests rounding up a partial page.
///
/// Verifies that 25 events at 10 per page need 3 pages.
///
/// Expected: 3
#[test]
fn rounds_partial_pages_up() {
    assert_eq!(total_pages(25, 10), 3);
}

/// Tests an exact multiple.
///
/// Verifies that 20 events at 10 per page need exactly 2 pages.
///
/// Expected: 2
#[test]
fn handles_exact_multiple() {
    assert_eq!(total_pages(20, 10), 2);
}

/// Tests an empty listing.
///
/// Verifies that no events need no pages.
///
/// Expected: 0
#[test]
fn returns_zero_for_no_items() {
    assert_eq!(total_pages(0, 10), 0);
}

/// Tests a zero page size.
///
/// Verifies that a zero page size degrades to zero pages instead of dividing by
/// zero.
///
/// Expected: 0
#[test]
fn returns_zero_for_zero_page_size() {
    assert_eq!(total_pages(25, 0), 0);
}
