use serde::{Deserialize, Serialize};

use crate::model::trip::TripDto;

/// A single line in the checkout cart.
///
/// The trip is embedded as a snapshot taken when the item was added, so cart
/// derivations never need a catalog lookup. `jersey_selections` holds one entry
/// per ordered jersey; an entry is `None` until the shopper has picked a size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub trip: TripDto,
    pub quantity: u32,
    #[serde(default)]
    pub jersey_selections: Vec<Option<JerseySelection>>,
    #[serde(default)]
    pub transportation: Transportation,
}

/// A completed jersey add-on pick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JerseySelection {
    pub size: String,
    #[serde(default)]
    pub player_name: Option<String>,
}

/// Transportation choice attached to a cart item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transportation {
    #[default]
    None,
    Bus,
    Flight,
    Train,
}

/// Contact details collected during checkout.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}
