use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A trip in the storefront catalog.
///
/// Unlike [`crate::model::event::EventDto`], trips come from the catalog endpoint
/// which delivers native booleans. The `price` field is kept as the decimal string
/// the API sends; parsing happens at the point of use.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TripDto {
    pub id: String,
    pub title: String,
    pub location: String,
    pub category: String,
    /// Decimal string as delivered by the API, e.g. "149.99"
    pub price: String,
    /// Trip start timestamp
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub trending: bool,
    #[serde(default)]
    pub sold_out: bool,
    #[serde(default)]
    pub is_presale: bool,
    #[serde(default)]
    pub includes_transportation: bool,
    #[serde(default)]
    pub accepts_under_age: bool,
    #[serde(default)]
    pub jersey_addon_available: bool,
}
