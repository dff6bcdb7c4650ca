//! Tests for the presale events selector.

use std::sync::Arc;

use crate::client::selectors::tests::support;
use crate::client::selectors::EventSelectors;

/// Tests filtering on the string-encoded presale flag.
///
/// Verifies exact string equality against `"1"` for the presale filter.
///
/// Expected: only event "b"
#[test]
fn keeps_only_flag_value_one() {
    let selectors = EventSelectors::new();
    let regular = support::event("a", "bundesliga");
    let mut presale = support::event("b", "ucl");
    presale.is_presale = "1".to_string();

    let result = selectors.presale(&Arc::new(vec![regular, presale]));

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "b");
}
