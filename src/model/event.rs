use serde::{Deserialize, Serialize};

/// An event as delivered raw by the upstream events endpoint.
///
/// The flag fields are string-encoded booleans, `"0"` or `"1"`, inherited from the
/// upstream API. Consumers must compare against `"1"` with exact string equality;
/// `"0"` is a non-empty string and any truthiness-style check would invert filters.
/// A flag missing from the payload deserializes to an empty string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventDto {
    pub id: String,
    pub category: EventCategory,
    /// Raw date string as sent by the upstream API
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub is_trending: String,
    #[serde(default)]
    pub is_presale: String,
    #[serde(default)]
    pub is_sold_out: String,
    #[serde(default)]
    pub includes_transportation: String,
    #[serde(default)]
    pub jersey_addon_available: String,
}

/// Category attached to an event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventCategory {
    pub id: String,
    pub name: String,
}
