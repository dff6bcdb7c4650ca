use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A past or pending ticket purchase from the user's order history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PurchaseDto {
    pub id: String,
    pub trip_id: String,
    pub status: PurchaseStatus,
    pub total: f64,
    /// Trip start timestamp the purchase is for
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Lifecycle status of a purchase. Transitions happen server-side; the client
/// only ever reads these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseStatus {
    Pending,
    Confirmed,
    Cancelled,
    Refunded,
}
