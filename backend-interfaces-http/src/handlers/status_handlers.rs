use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue};
use axum::response::IntoResponse;
use serde::Serialize;

use backend_application::dtos::DatabaseStatus;
use backend_application::queries::status_queries;
use backend_application::AppState;

use crate::envelope::ApiResponse;
use crate::error::HttpError;

#[derive(Serialize)]
pub struct Liveness {
    live: bool,
}

pub async fn database_status(State(state): State<AppState>) -> ApiResponse<DatabaseStatus> {
    let status = status_queries::database_status(&state).await;
    match status.error.clone() {
        Some(reason) if !status.connected => ApiResponse::unavailable(status, reason),
        _ => ApiResponse::ok(status),
    }
}

pub async fn health_live() -> ApiResponse<Liveness> {
    ApiResponse::ok(Liveness { live: true })
}

pub async fn metrics_prometheus(State(state): State<AppState>) -> impl IntoResponse {
    let payload = state.metrics.render_prometheus();
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; version=0.0.4; charset=utf-8"),
    );
    (headers, payload)
}

pub async fn route_not_found() -> HttpError {
    HttpError::NotFound("route not found".to_string())
}
