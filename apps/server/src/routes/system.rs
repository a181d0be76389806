//! Status and liveness endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::error::{ApiResult, OpResultExt};
use crate::response::{now_rfc3339, Envelope};
use crate::state::AppState;

pub const SERVER_NAME: &str = "Shoplist Server";

const ENDPOINTS: &[&str] = &[
    "GET /api/products - list products (?purchased=true|false)",
    "GET /api/products/{id} - get one product",
    "POST /api/products - create a product",
    "PUT /api/products/{id} - update a product",
    "DELETE /api/products/{id} - delete a product",
    "POST /api/sync - apply offline changes",
    "GET /api/status - server status and counts",
    "GET /health - health check",
];

/// Payload of `GET /api/status`.
#[derive(Debug, Serialize)]
pub struct StatusData {
    pub server: &'static str,
    pub status: &'static str,
    pub total_products: i64,
    pub purchased_products: i64,
    pub not_purchased: i64,
    pub timestamp: String,
}

/// Payload of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub server: &'static str,
    pub version: &'static str,
    pub endpoints: &'static [&'static str],
    pub fields: FieldDocs,
}

#[derive(Debug, Serialize)]
pub struct FieldDocs {
    pub name: &'static str,
    pub purchased: &'static str,
    pub notes: &'static str,
}

/// GET /api/status
pub async fn status(State(state): State<AppState>) -> ApiResult<Json<Envelope<StatusData>>> {
    let stats = state.db.products().stats().await.op("status")?;

    Ok(Json(Envelope::ok().data(StatusData {
        server: SERVER_NAME,
        status: "running",
        total_products: stats.total,
        purchased_products: stats.purchased,
        not_purchased: stats.not_purchased,
        timestamp: now_rfc3339(),
    })))
}

/// GET /health
///
/// Static; does not touch the database.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        server: SERVER_NAME,
        version: env!("CARGO_PKG_VERSION"),
        endpoints: ENDPOINTS,
        fields: FieldDocs {
            name: "Product name (required, 1-100 characters)",
            purchased: "Whether it has been bought (true/false)",
            notes: "Notes about the product (optional, up to 500 characters)",
        },
    })
}

/// Any unmatched path.
pub async fn not_found() -> (StatusCode, Json<Envelope>) {
    (StatusCode::NOT_FOUND, Json(Envelope::failure("Not found")))
}

/// A known path hit with a method it does not serve.
pub async fn method_not_allowed() -> (StatusCode, Json<Envelope>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(Envelope::failure("Method not allowed")),
    )
}
