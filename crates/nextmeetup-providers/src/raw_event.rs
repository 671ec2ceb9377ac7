//! Raw schema.org event data as published in JSON-LD.
//!
//! [`RawEvent`] mirrors the fields we care about from a schema.org `Event`
//! object. Pages in the wild are sloppy, so every field is optional and
//! deserialized leniently: a field with an unexpected JSON shape is treated as
//! missing instead of rejecting the whole event.

use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

/// Deserializes `T`, turning any shape mismatch into `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// A schema.org `Event` object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawEvent {
    /// The `@type` tag (`"Event"` for anything we select).
    #[serde(rename = "@type", deserialize_with = "lenient")]
    pub kind: Option<String>,
    /// Event title.
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    /// Event description.
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
    /// Start time, ISO-8601.
    #[serde(rename = "startDate", deserialize_with = "lenient")]
    pub start_date: Option<String>,
    /// End time, ISO-8601.
    #[serde(rename = "endDate", deserialize_with = "lenient")]
    pub end_date: Option<String>,
    /// Where the event happens.
    pub location: Option<RawLocation>,
    /// Canonical event page.
    #[serde(deserialize_with = "lenient")]
    pub url: Option<String>,
}

impl RawEvent {
    /// Builds a raw event from a selected JSON-LD object.
    ///
    /// Never fails: a value that is not an object yields an empty event.
    pub fn from_value(value: &Value) -> Self {
        Self::deserialize(value).unwrap_or_default()
    }
}

/// A schema.org `location` value.
///
/// Variant order matters: derived structs also accept JSON arrays, so `Many`
/// has to be tried before `Place`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawLocation {
    /// Free-text location.
    Text(String),
    /// Several locations; the first usable one is shown.
    Many(Vec<RawLocation>),
    /// A `Place` (or `VirtualLocation`) object.
    Place(RawPlace),
    /// Anything else (numbers, booleans, null).
    Other(Value),
}

/// A schema.org `Place` or `VirtualLocation` object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawPlace {
    /// The `@type` tag, e.g. `Place` or `VirtualLocation`.
    #[serde(rename = "@type", deserialize_with = "lenient")]
    pub kind: Option<String>,
    /// Venue name.
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    /// Postal address, either structured or free text.
    #[serde(deserialize_with = "lenient")]
    pub address: Option<RawAddress>,
}

impl RawPlace {
    /// Returns true for `@type: VirtualLocation`.
    pub fn is_virtual(&self) -> bool {
        self.kind.as_deref() == Some("VirtualLocation")
    }
}

/// A schema.org `address` value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawAddress {
    /// Free-text address.
    Text(String),
    /// A `PostalAddress` object.
    Postal(RawPostalAddress),
}

/// A schema.org `PostalAddress` object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawPostalAddress {
    /// Street line.
    #[serde(deserialize_with = "lenient")]
    pub street_address: Option<String>,
    /// City.
    #[serde(deserialize_with = "lenient")]
    pub address_locality: Option<String>,
    /// State or region.
    #[serde(deserialize_with = "lenient")]
    pub address_region: Option<String>,
}
