use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use cafehop_core::Place;
use cafehop_db::{NewPlace, PlaceRow};

use super::{map_db_error, ApiError, AppState};

/// A saved place as returned by the API: the place fields plus storage
/// metadata, all camelCase on the wire.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PlaceRecord {
    id: Uuid,
    #[serde(flatten)]
    place: Place,
    created_at: DateTime<Utc>,
}

impl From<PlaceRow> for PlaceRecord {
    fn from(row: PlaceRow) -> Self {
        Self {
            id: row.id,
            place: row.to_place(),
            created_at: row.created_at,
        }
    }
}

/// `GET /api/places` — saved places, newest first.
pub(super) async fn list_places(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlaceRecord>>, ApiError> {
    let rows = cafehop_db::list_places(&state.pool)
        .await
        .map_err(|e| map_db_error(&e))?;
    Ok(Json(rows.into_iter().map(PlaceRecord::from).collect()))
}

/// `POST /api/places` — save a search result.
pub(super) async fn create_place(
    State(state): State<AppState>,
    Json(place): Json<Place>,
) -> Result<(StatusCode, Json<PlaceRecord>), ApiError> {
    let row = cafehop_db::insert_place(&state.pool, NewPlace { place: &place })
        .await
        .map_err(|e| map_db_error(&e))?;
    Ok((StatusCode::CREATED, Json(row.into())))
}

#[derive(Debug, Serialize)]
pub(super) struct DeleteResponse {
    ok: bool,
}

/// `DELETE /api/places/{id}`
pub(super) async fn delete_place(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, ApiError> {
    cafehop_db::delete_place(&state.pool, id)
        .await
        .map_err(|e| map_db_error(&e))?;
    Ok(Json(DeleteResponse { ok: true }))
}
