//! Refresh policy for cached payment-provider keys.

use chrono::{DateTime, Duration, Utc};

use crate::model::payment::PaymentKeysDto;

/// How long fetched payment keys stay fresh, in milliseconds (one hour).
static KEY_FRESHNESS_MS: i64 = 3_600_000;

/// Whether the payment keys need refetching.
///
/// Keys are stale when they have never been fetched, or when strictly more than
/// one hour has elapsed since `last_fetched`. The boundary is exclusive: at
/// exactly one hour the keys are still fresh. Time-dependent, so not memoized;
/// callers sample `now` once per invocation.
pub fn should_refresh(keys: &PaymentKeysDto, now: DateTime<Utc>) -> bool {
    match keys.last_fetched {
        Some(last_fetched) => now - last_fetched > Duration::milliseconds(KEY_FRESHNESS_MS),
        None => true,
    }
}
