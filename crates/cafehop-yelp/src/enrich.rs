//! Best-effort thumbnail enrichment of normalized search results.
//!
//! Lookups for the bounded prefix run as one concurrent fan-out batch; each
//! lookup fails independently and a failing or slow lookup never blocks or
//! cancels its siblings. Results are only ever mutated in place — the list
//! length and order are untouched.

use cafehop_core::{Coordinate, Place};
use futures::future::join_all;

use crate::client::{YelpClient, MAX_RADIUS_METERS};

/// Only the first this-many results are enriched per search.
pub const ENRICH_PREFIX_LIMIT: usize = 10;

/// Attempts to fill `thumbnail_url` for a bounded prefix of `places` using
/// the search-context coordinate and radius. Per-item failures are logged
/// and swallowed.
pub async fn enrich_thumbnails(
    client: &YelpClient,
    places: &mut [Place],
    center: Coordinate,
    radius_km: f64,
) {
    if places.is_empty() {
        return;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let radius_m = ((radius_km * 1000.0).round().max(0.0) as u32).min(MAX_RADIUS_METERS);

    let prefix = places.len().min(ENRICH_PREFIX_LIMIT);
    let lookups = places[..prefix]
        .iter()
        .map(|place| client.find_photo(&place.title, center, radius_m));
    let photos = join_all(lookups).await;

    for (place, photo) in places[..prefix].iter_mut().zip(photos) {
        match photo {
            Ok(Some(url)) => place.thumbnail_url = url,
            Ok(None) => {}
            Err(err) => {
                tracing::debug!(title = %place.title, error = %err, "thumbnail lookup failed");
            }
        }
    }
}
