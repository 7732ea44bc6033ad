//! Shared domain types for café search results.

use serde::{Deserialize, Serialize};

/// A WGS84 point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// A normalized search result, the shape returned by the search API and
/// persisted by the save path.
///
/// Serialized in camelCase to match the wire format consumed by the front
/// end (`thumbnailUrl`, `externalId`, `location: {lat, lon}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Display name; never empty — falls back to a placeholder when the
    /// upstream record is untagged.
    pub title: String,
    /// Human-readable summary of amenity tags; never empty.
    pub description: String,
    /// Photo URL, empty until enrichment fills it in.
    pub thumbnail_url: String,
    /// Upstream element id, stringified.
    pub external_id: String,
    /// Postal address, possibly empty.
    pub address: String,
    /// Upstream provider label, e.g. `"openstreetmap"`.
    pub source: String,
    /// `None` only when the upstream record carried neither a direct nor a
    /// center coordinate.
    pub location: Option<Coordinate>,
}
