mod places;
mod search;

use std::sync::Arc;

use axum::{
    http::{header, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::PgPool;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::search::SearchService;
use cafehop_overpass::OverpassClient;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub search: Arc<SearchService<OverpassClient>>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

pub(super) fn map_db_error(error: &cafehop_db::DbError) -> ApiError {
    match error {
        cafehop_db::DbError::NotFound => ApiError::new("not_found", "no such place"),
        other => {
            tracing::error!(error = %other, "database query failed");
            ApiError::new("internal_error", "database query failed")
        }
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}

fn build_cors() -> CorsLayer {
    // The front end is served from a different origin in development.
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/search", get(search::search))
        .route(
            "/api/places",
            get(places::list_places).post(places::create_place),
        )
        .route(
            "/api/places/{id}",
            axum::routing::delete(places::delete_place),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors()),
        )
        .with_state(state)
}
