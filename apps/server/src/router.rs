//! Application router builder.
//!
//! Used by both the binary (`main.rs`) and the integration tests, so tests
//! exercise the same middleware stack production runs.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::routes::{products, sync, system};
use crate::state::AppState;

/// Build the full application [`Router`].
///
/// ```text
/// GET    /health
/// GET    /api/status
/// GET    /api/products?purchased=true|false
/// POST   /api/products
/// GET    /api/products/{id}
/// PUT    /api/products/{id}
/// DELETE /api/products/{id}
/// POST   /api/sync
/// ```
///
/// Unmatched paths answer 404 and unserved methods 405, both in the usual
/// `{ "success": false, "error": ... }` shape.
///
/// Middleware, outermost first: CORS (any origin, method and header),
/// then request/response tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/api/status", get(system::status))
        .route("/api/products", get(products::list).post(products::create))
        .route(
            "/api/products/{id}",
            get(products::get)
                .put(products::update)
                .delete(products::delete),
        )
        .route("/api/sync", post(sync::sync))
        .fallback(system::not_found)
        .method_not_allowed_fallback(system::method_not_allowed)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Phones on the LAN load the list from arbitrary origins.
        .layer(CorsLayer::permissive())
        .with_state(state)
}
