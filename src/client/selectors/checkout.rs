//! Derived state for the cart and checkout flow.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::{Duration, NaiveDate};

use crate::client::selectors::memo::{Selector, Selector2};
use crate::model::cart::{CartItem, CustomerDetails, Transportation};

/// Days between order processing and the trip start that shipping must fit into.
static DELIVERY_PROCESSING_DAYS: i64 = 7;

/// A cart line missing jersey size picks.
///
/// One record is emitted per contributing cart item, so two items for the same
/// trip each appear with their own missing count.
#[derive(Clone, Debug, PartialEq)]
pub struct IncompleteJerseySelection {
    pub trip_id: String,
    pub missing_count: usize,
}

/// Memoized selectors over the checkout slice.
pub struct CheckoutSelectors {
    item_count: Selector<Vec<CartItem>, u32>,
    is_empty: Selector<Vec<CartItem>, bool>,
    items_by_trip: Selector<Vec<CartItem>, HashMap<String, Vec<CartItem>>>,
    incomplete_jerseys: Selector<Vec<CartItem>, Vec<IncompleteJerseySelection>>,
    transportation_options: Selector<Vec<CartItem>, Vec<Transportation>>,
    can_proceed: Selector2<Vec<CartItem>, CustomerDetails, bool>,
    estimated_delivery: Selector<Vec<CartItem>, Option<NaiveDate>>,
}

impl Default for CheckoutSelectors {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckoutSelectors {
    pub fn new() -> Self {
        Self {
            item_count: Selector::new(compute_item_count),
            is_empty: Selector::new(|items| items.is_empty()),
            items_by_trip: Selector::new(compute_items_by_trip),
            incomplete_jerseys: Selector::new(compute_incomplete_jerseys),
            transportation_options: Selector::new(compute_transportation_options),
            can_proceed: Selector2::new(compute_can_proceed),
            estimated_delivery: Selector::new(compute_estimated_delivery),
        }
    }

    /// Total number of tickets in the cart (sum of quantities). Empty cart is 0.
    pub fn item_count(&self, items: &Arc<Vec<CartItem>>) -> Arc<u32> {
        self.item_count.select(items)
    }

    pub fn is_empty(&self, items: &Arc<Vec<CartItem>>) -> Arc<bool> {
        self.is_empty.select(items)
    }

    /// Cart items grouped by trip id.
    ///
    /// Every item lands in exactly one group, in its original cart position
    /// relative to the other items of that trip. Trips with no cart item have
    /// no entry.
    pub fn items_by_trip(
        &self,
        items: &Arc<Vec<CartItem>>,
    ) -> Arc<HashMap<String, Vec<CartItem>>> {
        self.items_by_trip.select(items)
    }

    /// Cart lines whose jersey add-on still has unpicked sizes.
    pub fn incomplete_jersey_selections(
        &self,
        items: &Arc<Vec<CartItem>>,
    ) -> Arc<Vec<IncompleteJerseySelection>> {
        self.incomplete_jerseys.select(items)
    }

    /// Distinct transportation modes booked across the cart, excluding
    /// [`Transportation::None`]. Order is unspecified.
    pub fn transportation_options(
        &self,
        items: &Arc<Vec<CartItem>>,
    ) -> Arc<Vec<Transportation>> {
        self.transportation_options.select(items)
    }

    /// Whether checkout may advance to the payment step.
    ///
    /// An empty cart never proceeds, regardless of customer details. Otherwise
    /// the customer's name, email, and phone must all be filled in and every
    /// jersey add-on must have its sizes picked.
    pub fn can_proceed_to_payment(
        &self,
        items: &Arc<Vec<CartItem>>,
        customer: &Arc<CustomerDetails>,
    ) -> Arc<bool> {
        self.can_proceed.select(items, customer)
    }

    /// Latest calendar date merchandise can ship: the earliest trip start in the
    /// cart minus the fixed processing window. `None` when the cart is empty.
    pub fn estimated_delivery_date(&self, items: &Arc<Vec<CartItem>>) -> Arc<Option<NaiveDate>> {
        self.estimated_delivery.select(items)
    }
}

fn compute_item_count(items: &Vec<CartItem>) -> u32 {
    items.iter().map(|item| item.quantity).sum()
}

fn compute_items_by_trip(items: &Vec<CartItem>) -> HashMap<String, Vec<CartItem>> {
    let mut groups: HashMap<String, Vec<CartItem>> = HashMap::new();
    for item in items {
        groups
            .entry(item.trip.id.clone())
            .or_default()
            .push(item.clone());
    }
    groups
}

fn compute_incomplete_jerseys(items: &Vec<CartItem>) -> Vec<IncompleteJerseySelection> {
    items
        .iter()
        .filter(|item| item.trip.jersey_addon_available)
        .filter_map(|item| {
            let missing_count = item
                .jersey_selections
                .iter()
                .filter(|selection| selection.is_none())
                .count();

            (missing_count > 0).then(|| IncompleteJerseySelection {
                trip_id: item.trip.id.clone(),
                missing_count,
            })
        })
        .collect()
}

fn compute_transportation_options(items: &Vec<CartItem>) -> Vec<Transportation> {
    let distinct: HashSet<Transportation> = items
        .iter()
        .map(|item| item.transportation)
        .filter(|mode| *mode != Transportation::None)
        .collect();
    distinct.into_iter().collect()
}

fn compute_can_proceed(items: &Vec<CartItem>, customer: &CustomerDetails) -> bool {
    if items.is_empty() {
        return false;
    }

    let details_complete =
        !customer.name.is_empty() && !customer.email.is_empty() && !customer.phone.is_empty();

    details_complete && compute_incomplete_jerseys(items).is_empty()
}

fn compute_estimated_delivery(items: &Vec<CartItem>) -> Option<NaiveDate> {
    let earliest = items.iter().map(|item| item.trip.date).min()?;
    Some((earliest - Duration::days(DELIVERY_PROCESSING_DAYS)).date_naive())
}
