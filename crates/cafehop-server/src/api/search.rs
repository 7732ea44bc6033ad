use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use cafehop_core::{Place, SearchQuery};

use super::AppState;
use crate::search::SearchOutcome;

#[derive(Debug, Deserialize)]
pub(super) struct SearchRequest {
    q: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    km: Option<f64>,
}

#[derive(Debug, Serialize)]
pub(super) struct SearchResponse {
    items: Vec<Place>,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

/// `GET /api/search?q&lat&lon&km`
///
/// Upstream exhaustion degrades to an empty 200 with a note rather than a
/// 5xx, so the front end stays responsive while mirrors are down. The
/// outcome type keeps that case separate from a genuinely empty result.
pub(super) async fn search(
    State(state): State<AppState>,
    Query(request): Query<SearchRequest>,
) -> Json<SearchResponse> {
    let query = SearchQuery::new(
        request.q.as_deref().unwrap_or(""),
        request.lat,
        request.lon,
        request.km,
    );

    match state.search.run(&query).await {
        SearchOutcome::Found(items) => Json(SearchResponse { items, note: None }),
        SearchOutcome::Unavailable { reason } => {
            tracing::warn!(%reason, "soft-failing search to an empty result");
            Json(SearchResponse {
                items: Vec::new(),
                note: Some("search temporarily unavailable".to_owned()),
            })
        }
    }
}
