use std::sync::Arc;

use crate::model::cart::{CartItem, CustomerDetails};

/// Cart contents and checkout contact details.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CheckoutState {
    pub items: Arc<Vec<CartItem>>,
    pub customer: Arc<CustomerDetails>,
}

impl CheckoutState {
    /// Appends an item to the cart, replacing the items `Arc`.
    pub fn add_item(&mut self, item: CartItem) {
        let mut items = self.items.as_ref().clone();
        items.push(item);
        self.items = Arc::new(items);
    }

    /// Removes every cart line for the given trip.
    pub fn remove_trip(&mut self, trip_id: &str) {
        let items = self
            .items
            .iter()
            .filter(|item| item.trip.id != trip_id)
            .cloned()
            .collect();
        self.items = Arc::new(items);
    }

    pub fn set_customer(&mut self, customer: CustomerDetails) {
        self.customer = Arc::new(customer);
    }
}
