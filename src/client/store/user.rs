use std::sync::Arc;

use crate::model::purchase::PurchaseDto;
use crate::model::user::{ProfileDto, UserPreferences};

/// Signed-in user profile, preferences, and purchase history.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserState {
    pub profile: Arc<Option<ProfileDto>>,
    pub preferences: Arc<Option<UserPreferences>>,
    pub purchases: Arc<Vec<PurchaseDto>>,
    pub fetched: bool,
}

impl UserState {
    pub fn set_profile(&mut self, profile: Option<ProfileDto>) {
        self.profile = Arc::new(profile);
        self.fetched = true;
    }

    pub fn set_purchases(&mut self, purchases: Vec<PurchaseDto>) {
        self.purchases = Arc::new(purchases);
    }
}
