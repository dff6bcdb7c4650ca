//! Derived state for the user's profile and purchase history.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::client::selectors::memo::Selector;
use crate::model::purchase::{PurchaseDto, PurchaseStatus};
use crate::model::user::{ProfileDto, UserPreferences};

/// How many purchases "recent purchases" keeps.
static RECENT_PURCHASE_LIMIT: usize = 5;

/// Confirmed purchases split around a point in time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TripHistory {
    /// Trips that have not started yet, soonest first
    pub upcoming: Vec<PurchaseDto>,
    /// Trips already underway or finished, most recent first
    pub past: Vec<PurchaseDto>,
}

/// Memoized selectors over the user slice.
pub struct UserSelectors {
    by_status: Selector<Vec<PurchaseDto>, HashMap<PurchaseStatus, Vec<PurchaseDto>>>,
    by_trip: Selector<Vec<PurchaseDto>, HashMap<String, Vec<PurchaseDto>>>,
    recent: Selector<Vec<PurchaseDto>, Vec<PurchaseDto>>,
    total_spent: Selector<Vec<PurchaseDto>, f64>,
    profile_complete: Selector<Option<ProfileDto>, bool>,
    preferences: Selector<Option<UserPreferences>, UserPreferences>,
}

impl Default for UserSelectors {
    fn default() -> Self {
        Self::new()
    }
}

impl UserSelectors {
    pub fn new() -> Self {
        Self {
            by_status: Selector::new(compute_by_status),
            by_trip: Selector::new(compute_by_trip),
            recent: Selector::new(compute_recent),
            total_spent: Selector::new(compute_total_spent),
            profile_complete: Selector::new(compute_profile_complete),
            preferences: Selector::new(compute_preferences),
        }
    }

    /// Purchases grouped by status, original order kept within each group.
    pub fn purchases_by_status(
        &self,
        purchases: &Arc<Vec<PurchaseDto>>,
    ) -> Arc<HashMap<PurchaseStatus, Vec<PurchaseDto>>> {
        self.by_status.select(purchases)
    }

    /// Purchases grouped by trip id, original order kept within each group.
    pub fn purchases_by_trip(
        &self,
        purchases: &Arc<Vec<PurchaseDto>>,
    ) -> Arc<HashMap<String, Vec<PurchaseDto>>> {
        self.by_trip.select(purchases)
    }

    /// The five most recently created purchases, newest first.
    pub fn recent_purchases(&self, purchases: &Arc<Vec<PurchaseDto>>) -> Arc<Vec<PurchaseDto>> {
        self.recent.select(purchases)
    }

    /// Total paid across confirmed purchases. Pending, cancelled, and refunded
    /// purchases do not count.
    pub fn total_spent(&self, purchases: &Arc<Vec<PurchaseDto>>) -> Arc<f64> {
        self.total_spent.select(purchases)
    }

    /// Whether the profile has all five identity fields filled in: email, full
    /// name, phone, birthdate, and country. No profile means not complete.
    pub fn is_profile_complete(&self, profile: &Arc<Option<ProfileDto>>) -> Arc<bool> {
        self.profile_complete.select(profile)
    }

    /// The user's preferences, falling back to the defaults (no favorite
    /// categories, notifications on, English) when none are stored.
    pub fn preferences_or_default(
        &self,
        preferences: &Arc<Option<UserPreferences>>,
    ) -> Arc<UserPreferences> {
        self.preferences.select(preferences)
    }
}

/// Splits confirmed purchases into upcoming and past trips relative to `now`.
///
/// Upcoming means the trip date is strictly after `now`; everything else is
/// past. Upcoming trips sort ascending (next trip first), past trips descending
/// (latest trip first). `now` is sampled once by the caller per invocation, so
/// the partition is consistent within a single call; being time-dependent, this
/// derivation is deliberately not memoized.
pub fn trip_history(purchases: &[PurchaseDto], now: DateTime<Utc>) -> TripHistory {
    let mut history = TripHistory::default();

    for purchase in purchases {
        if purchase.status != PurchaseStatus::Confirmed {
            continue;
        }
        if purchase.date > now {
            history.upcoming.push(purchase.clone());
        } else {
            history.past.push(purchase.clone());
        }
    }

    history.upcoming.sort_by(|a, b| a.date.cmp(&b.date));
    history.past.sort_by(|a, b| b.date.cmp(&a.date));
    history
}

fn compute_by_status(purchases: &Vec<PurchaseDto>) -> HashMap<PurchaseStatus, Vec<PurchaseDto>> {
    let mut groups: HashMap<PurchaseStatus, Vec<PurchaseDto>> = HashMap::new();
    for purchase in purchases {
        groups
            .entry(purchase.status)
            .or_default()
            .push(purchase.clone());
    }
    groups
}

fn compute_by_trip(purchases: &Vec<PurchaseDto>) -> HashMap<String, Vec<PurchaseDto>> {
    let mut groups: HashMap<String, Vec<PurchaseDto>> = HashMap::new();
    for purchase in purchases {
        groups
            .entry(purchase.trip_id.clone())
            .or_default()
            .push(purchase.clone());
    }
    groups
}

fn compute_recent(purchases: &Vec<PurchaseDto>) -> Vec<PurchaseDto> {
    let mut recent = purchases.clone();
    recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    recent.truncate(RECENT_PURCHASE_LIMIT);
    recent
}

fn compute_total_spent(purchases: &Vec<PurchaseDto>) -> f64 {
    purchases
        .iter()
        .filter(|purchase| purchase.status == PurchaseStatus::Confirmed)
        .map(|purchase| purchase.total)
        .sum()
}

fn compute_profile_complete(profile: &Option<ProfileDto>) -> bool {
    let Some(profile) = profile else {
        return false;
    };

    [
        &profile.email,
        &profile.full_name,
        &profile.phone,
        &profile.birthdate,
        &profile.country,
    ]
    .iter()
    .all(|field| field.as_deref().is_some_and(|value| !value.is_empty()))
}

fn compute_preferences(preferences: &Option<UserPreferences>) -> UserPreferences {
    preferences.clone().unwrap_or_default()
}
