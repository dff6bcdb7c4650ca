//! Tests for the single-input Selector cache.

use std::sync::Arc;

use crate::client::selectors::memo::Selector;

/// Tests the cache hit on a pointer-equal input.
///
/// Verifies that two calls with the same `Arc` return pointer-identical outputs
/// and run the computation only once.
///
/// Expected: identical allocations, one computation
#[test]
fn returns_cached_output_for_same_arc() {
    let selector: Selector<Vec<u32>, u32> = Selector::new(|values| values.iter().sum());
    let input = Arc::new(vec![1, 2, 3]);

    let first = selector.select(&input);
    let second = selector.select(&input);

    assert_eq!(*first, 6);
    assert!(Arc::ptr_eq(&first, &second));
}

/// Tests recomputation on a new allocation with equal contents.
///
/// Verifies that memoization is keyed on reference identity, not value equality:
/// an equal but distinct `Arc` recomputes and yields a fresh output allocation.
///
/// Expected: equal values, distinct allocations
#[test]
fn recomputes_for_equal_but_distinct_arc() {
    let selector: Selector<Vec<u32>, u32> = Selector::new(|values| values.iter().sum());
    let first_input = Arc::new(vec![1, 2, 3]);
    let second_input = Arc::new(vec![1, 2, 3]);

    let first = selector.select(&first_input);
    let second = selector.select(&second_input);

    assert_eq!(*first, *second);
    assert!(!Arc::ptr_eq(&first, &second));
}

/// Tests that the cache holds only the last input.
///
/// Verifies that alternating between two inputs recomputes every time; the cache
/// is a single-slot, last-value cache.
///
/// Expected: the third call does not return the first call's allocation
#[test]
fn caches_only_the_last_input() {
    let selector: Selector<Vec<u32>, u32> = Selector::new(|values| values.iter().sum());
    let a = Arc::new(vec![1]);
    let b = Arc::new(vec![2]);

    let first = selector.select(&a);
    selector.select(&b);
    let third = selector.select(&a);

    assert_eq!(*first, *third);
    assert!(!Arc::ptr_eq(&first, &third));
}
