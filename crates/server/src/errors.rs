use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::contact::ContactResponse;
use thiserror::Error;
use tracing::{debug, error};

use crate::state::SiteContext;
use crate::views;

/// Failures of an HTML page handler.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("{what} not found")]
    NotFound { site: Arc<SiteContext>, what: &'static str },
}

impl PageError {
    pub fn not_found(site: &Arc<SiteContext>, what: &'static str) -> Self {
        PageError::NotFound { site: Arc::clone(site), what }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::NotFound { site, what } => {
                debug!(what, "rendering not-found page");
                (StatusCode::NOT_FOUND, views::not_found::page(&site, what)).into_response()
            }
        }
    }
}

/// JSON error for `/api/*` routes, shaped like every other API answer.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ContactResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, body: ContactResponse::failed(message) }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, message = %self.body.message, "api error");
        }
        (self.status, Json(self.body)).into_response()
    }
}
