//! JSON API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`.
//!
//! Middleware stack (outermost → innermost):
//! 1. CORS → 2. `Cache-Control: no-store` → 3. Access logger

use std::sync::Arc;

use axum::http::{header, HeaderValue};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;
use crate::memory::ExperienceMemoryStore;

/// Build the API router around a shared experience memory store.
pub fn api_router(memory: Arc<ExperienceMemoryStore>) -> Router {
    build_router(ApiContext::new(memory))
}

/// Build router from a pre-constructed `ApiContext`.
pub fn build_router(ctx: ApiContext) -> Router {
    // NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/triage/normal-check", post(endpoints::triage::normal_check))
        .route("/confidence", post(endpoints::confidence::check))
        .route("/persona/suggest", post(endpoints::persona::suggest))
        .route(
            "/persona/category/:category",
            get(endpoints::persona::for_category),
        )
        .route("/timeline/:treatment_id", get(endpoints::timeline::scenario))
        .route("/roadmap/priorities", get(endpoints::roadmap::priorities))
        .route("/roadmap", post(endpoints::roadmap::build))
        .route("/atlas/clusters", get(endpoints::atlas::clusters))
        .route("/atlas/clusters/:id", get(endpoints::atlas::cluster))
        .route("/atlas/services/:slug", get(endpoints::atlas::service))
        .route("/atlas/discovery", get(endpoints::atlas::discovery))
        .route("/atlas/pathways/:id", get(endpoints::atlas::pathway))
        .route("/memory/session", post(endpoints::memory::open))
        .route(
            "/memory/:session_id",
            get(endpoints::memory::snapshot).delete(endpoints::memory::end),
        )
        .route("/memory/:session_id/reset", post(endpoints::memory::reset))
        .with_state(ctx)
        // Middleware stack (innermost first, outermost last):
        .layer(axum::middleware::from_fn(middleware::audit::log_access))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CorsLayer::permissive());

    Router::new().nest("/api", api)
}
