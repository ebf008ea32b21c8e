use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::pages::{contact, home, projects, services, sitemap, system};
use crate::state::AppState;

/// Only the contact form takes a body; a few KiB of text is all it needs.
pub const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Build the full application router: pages, contact API, assets and health endpoints.
pub fn build_router(state: AppState, public_dir: &str) -> Router {
    let pages = Router::new()
        .route("/", get(home::home))
        .route("/services", get(services::list))
        .route("/services/:slug", get(services::detail))
        .route("/projects", get(projects::list))
        .route("/projects/:slug", get(projects::detail))
        .route("/contact", get(contact::page).post(contact::submit_form))
        .route("/sitemap.xml", get(sitemap::sitemap));

    let api = Router::new().route("/api/contact", post(contact::submit_api));

    let ops = Router::new()
        .route("/health", get(system::health))
        .route("/metrics", get(system::metrics));

    pages
        .merge(api)
        .merge(ops)
        .nest_service("/assets", ServeDir::new(public_dir))
        .fallback(system::fallback)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .with_state(state)
        .layer(CorsLayer::very_permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx and connection failures
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
