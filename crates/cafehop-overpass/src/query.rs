//! Overpass QL query construction.

use crate::types::SearchParams;

/// Server-side evaluation timeout baked into the query header.
const OVERPASS_TIMEOUT_SECS: u32 = 20;
/// Upper bound on elements returned per query.
const OVERPASS_OUTPUT_LIMIT: u32 = 40;

const AMENITY_FILTER: &str = r#"["amenity"~"^(cafe|fast_food|restaurant|bakery)$"]"#;

/// Builds the Overpass QL body for one search pass.
///
/// A name-only pass (name filter present, amenity restriction off) matches
/// any tagged object by name; otherwise the amenity filter is applied, with
/// the name filter stacked on top when present.
#[must_use]
pub fn build_query(params: &SearchParams) -> String {
    let radius_m = radius_meters(params.radius_km);
    let lat = params.center.lat;
    let lon = params.center.lon;

    let name_filter = params
        .name_filter
        .as_deref()
        .map(|name| format!("[\"name\"~\"{}\", i]", regex::escape(name)))
        .unwrap_or_default();

    let filters = if !name_filter.is_empty() && !params.restrict_amenity {
        name_filter
    } else {
        format!("{AMENITY_FILTER}{name_filter}")
    };

    format!(
        "[out:json][timeout:{OVERPASS_TIMEOUT_SECS}];\n(\n  \
         node{filters}(around:{radius_m},{lat},{lon});\n  \
         way{filters}(around:{radius_m},{lat},{lon});\n);\n\
         out center tags qt {OVERPASS_OUTPUT_LIMIT};"
    )
}

/// Radius in whole meters, as the `around` filter requires.
#[must_use]
pub fn radius_meters(radius_km: f64) -> u32 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let meters = (radius_km * 1000.0).round().max(0.0) as u32;
    meters
}
