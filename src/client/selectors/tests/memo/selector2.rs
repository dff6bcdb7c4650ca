//! Tests for the two-input Selector2 cache.

use std::sync::Arc;

use crate::client::selectors::memo::Selector2;

fn joined() -> Selector2<String, String, String> {
    Selector2::new(|a, b| format!("{a}/{b}"))
}

/// Tests the cache hit when both inputs are unchanged.
///
/// Verifies pointer-identical output when both `Arc`s match the previous call.
///
/// Expected: identical allocations
#[test]
fn returns_cached_output_when_both_inputs_match() {
    let selector = joined();
    let a = Arc::new("left".to_string());
    let b = Arc::new("right".to_string());

    let first = selector.select(&a, &b);
    let second = selector.select(&a, &b);

    assert_eq!(*first, "left/right");
    assert!(Arc::ptr_eq(&first, &second));
}

/// Tests invalidation when one input changes.
///
/// Verifies that replacing either `Arc` forces recomputation.
///
/// Expected: distinct allocations
#[test]
fn recomputes_when_either_input_changes() {
    let selector = joined();
    let a = Arc::new("left".to_string());
    let b = Arc::new("right".to_string());

    let first = selector.select(&a, &b);
    let replaced = Arc::new("right".to_string());
    let second = selector.select(&a, &replaced);

    assert_eq!(*first, *second);
    assert!(!Arc::ptr_eq(&first, &second));
}
