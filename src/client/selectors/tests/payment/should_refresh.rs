//! Tests for the should_refresh function.

use chrono::Duration;

use crate::client::selectors::payment::should_refresh;
use crate::client::selectors::tests::support;
use crate::model::payment::PaymentKeysDto;

fn keys_fetched_ms_ago(now_offset_ms: i64) -> PaymentKeysDto {
    PaymentKeysDto {
        last_fetched: Some(support::datetime(2024, 6, 15) - Duration::milliseconds(now_offset_ms)),
        ..PaymentKeysDto::default()
    }
}

/// Tests the exact one-hour boundary.
///
/// Verifies that keys fetched exactly 3,600,000 ms ago are still fresh; the
/// staleness comparison is strictly greater-than.
///
/// Expected: false
#[test]
fn keeps_keys_fresh_at_exactly_one_hour() {
    let now = support::datetime(2024, 6, 15);

    assert!(!should_refresh(&keys_fetched_ms_ago(3_600_000), now));
}

/// Tests one millisecond past the boundary.
///
/// Verifies that 3,600,001 ms of age makes the keys stale.
///
/// Expected: true
#[test]
fn refreshes_one_millisecond_past_the_hour() {
    let now = support::datetime(2024, 6, 15);

    assert!(should_refresh(&keys_fetched_ms_ago(3_600_001), now));
}

/// Tests keys that were never fetched.
///
/// Verifies that an unset `last_fetched` always triggers a refresh.
///
/// Expected: true
#[test]
fn refreshes_when_never_fetched() {
    let now = support::datetime(2024, 6, 15);

    assert!(should_refresh(&PaymentKeysDto::default(), now));
}

/// Tests recently fetched keys.
///
/// Verifies that keys a minute old are left alone.
///
/// Expected: false
#[test]
fn keeps_recent_keys() {
    let now = support::datetime(2024, 6, 15);

    assert!(!should_refresh(&keys_fetched_ms_ago(60_000), now));
}
