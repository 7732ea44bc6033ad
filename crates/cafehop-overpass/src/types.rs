//! Parameter and raw-response types for the Overpass client.

use std::collections::HashMap;

use cafehop_core::Coordinate;
use serde::Deserialize;

/// Parameters for one executor invocation. The two-pass search policy lives
/// in the caller; the client just runs whatever pass it is handed.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    pub center: Coordinate,
    pub radius_km: f64,
    /// Venue-name filter; matched case-insensitively after regex escaping.
    pub name_filter: Option<String>,
    /// Restrict results to café-ish amenities (cafe / fast_food /
    /// restaurant / bakery). Off for name-only passes.
    pub restrict_amenity: bool,
}

/// A raw element from the Overpass response. Nodes carry `lat`/`lon`
/// directly; ways carry a `center` computed by `out center`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawElement {
    pub id: i64,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub center: Option<RawCenter>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawCenter {
    pub lat: f64,
    pub lon: f64,
}

impl RawElement {
    /// Resolves the element coordinate, preferring a direct point over the
    /// area center.
    #[must_use]
    pub fn coordinate(&self) -> Option<Coordinate> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
            _ => self.center.map(|c| Coordinate::new(c.lat, c.lon)),
        }
    }
}
