//! The per-request search query model.

use crate::classifier::is_generic_term;
use crate::place::Coordinate;

/// Fallback search center (downtown Berkeley) used when the caller supplies
/// no coordinate.
pub const DEFAULT_CENTER: Coordinate = Coordinate {
    lat: 37.8715,
    lon: -122.2730,
};

pub const DEFAULT_RADIUS_KM: f64 = 2.0;
pub const MIN_RADIUS_KM: f64 = 0.5;
pub const MAX_RADIUS_KM: f64 = 5.0;

/// A validated search request. Radius is clamped at construction, so every
/// consumer can rely on it being inside [[`MIN_RADIUS_KM`], [`MAX_RADIUS_KM`]].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub term: String,
    pub center: Coordinate,
    pub radius_km: f64,
}

impl SearchQuery {
    /// Builds a query from raw request parameters, applying defaults and
    /// clamping the radius.
    #[must_use]
    pub fn new(term: &str, lat: Option<f64>, lon: Option<f64>, radius_km: Option<f64>) -> Self {
        let center = match (lat, lon) {
            (Some(lat), Some(lon)) => Coordinate::new(lat, lon),
            _ => DEFAULT_CENTER,
        };
        Self {
            term: term.trim().to_owned(),
            center,
            radius_km: clamp_radius_km(radius_km.unwrap_or(DEFAULT_RADIUS_KM)),
        }
    }

    /// Whether the term is a broad category word rather than a venue name.
    #[must_use]
    pub fn is_generic(&self) -> bool {
        is_generic_term(&self.term)
    }
}

/// Clamps a requested radius into the supported range. Non-finite input
/// (NaN, ±inf from a mangled query string) falls back to the default.
#[must_use]
pub fn clamp_radius_km(radius_km: f64) -> f64 {
    if !radius_km.is_finite() {
        return DEFAULT_RADIUS_KM;
    }
    radius_km.clamp(MIN_RADIUS_KM, MAX_RADIUS_KM)
}
