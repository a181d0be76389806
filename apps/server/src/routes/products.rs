//! # Product Routes
//!
//! CRUD endpoints for the shopping list.
//!
//! ## Update Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PUT /api/products/7  { "purchased": true }                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  body is JSON?                     no ──► 400 { error }                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  names name/purchased/notes?       no ──► 400 { error: "No data..." }   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  field rules pass?                 no ──► 400 { errors: [...] }         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  UPDATE ... WHERE id = 7           0 rows ──► 404 { error }             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  200 { success, message }                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::error::{ApiResult, OpResultExt};
use crate::response::Envelope;
use crate::state::AppState;
use shoplist_core::{CoreError, Product, ProductInput};

/// Query string for `GET /api/products`.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// `true` (any case) keeps purchased rows; any other value keeps the rest.
    pub purchased: Option<String>,
}

impl ListParams {
    pub fn purchased_filter(&self) -> Option<bool> {
        self.purchased
            .as_deref()
            .map(|value| value.eq_ignore_ascii_case("true"))
    }
}

/// GET /api/products
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Envelope<Vec<Product>>>> {
    let products = state
        .db
        .products()
        .list(params.purchased_filter())
        .await
        .op("list_products")?;

    Ok(Json(
        Envelope::ok()
            .count(products.len())
            .data(products)
            .timestamp(),
    ))
}

/// GET /api/products/{id}
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Envelope<Product>>> {
    let Path(id) = id.op("get_product")?;
    let product = state
        .db
        .products()
        .get_by_id(id)
        .await
        .op("get_product")?
        .ok_or(CoreError::ProductNotFound(id))
        .op("get_product")?;

    Ok(Json(Envelope::ok().data(product)))
}

/// POST /api/products
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Envelope<Product>>)> {
    let Json(body) = payload.op("create_product")?;
    let new_product = ProductInput::for_create(&body).op("create_product")?;

    let product = state
        .db
        .products()
        .insert(&new_product)
        .await
        .op("create_product")?;

    info!(id = product.id, name = %product.name, "Product created");

    Ok((
        StatusCode::CREATED,
        Json(
            Envelope::ok()
                .message("Product created successfully")
                .data(product),
        ),
    ))
}

/// PUT /api/products/{id}
///
/// Only confirms; clients re-fetch the row if they need it.
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Envelope>> {
    let Path(id) = id.op("update_product")?;
    let Json(body) = payload.op("update_product")?;
    let input = ProductInput::for_update(&body).op("update_product")?;

    state
        .db
        .products()
        .update(id, &input)
        .await
        .op("update_product")?;

    info!(id, "Product updated");

    Ok(Json(Envelope::confirm("Product updated successfully")))
}

/// DELETE /api/products/{id}
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Envelope>> {
    let Path(id) = id.op("delete_product")?;
    state
        .db
        .products()
        .delete(id)
        .await
        .op("delete_product")?;

    info!(id, "Product deleted");

    Ok(Json(Envelope::confirm("Product deleted successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(value: Option<&str>) -> ListParams {
        ListParams {
            purchased: value.map(str::to_string),
        }
    }

    #[test]
    fn test_purchased_filter() {
        assert_eq!(params(None).purchased_filter(), None);
        assert_eq!(params(Some("true")).purchased_filter(), Some(true));
        assert_eq!(params(Some("TRUE")).purchased_filter(), Some(true));
        assert_eq!(params(Some("false")).purchased_filter(), Some(false));
        assert_eq!(params(Some("1")).purchased_filter(), Some(false));
    }
}
