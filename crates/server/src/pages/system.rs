use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use common::types::Health;

use crate::errors::PageError;
use crate::state::AppState;

pub async fn health() -> Json<Health> {
    Json(Health::OK)
}

pub async fn metrics() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        service::metrics::gather_text(),
    )
}

pub async fn fallback(State(state): State<AppState>) -> PageError {
    PageError::not_found(&state.site, "Page")
}
