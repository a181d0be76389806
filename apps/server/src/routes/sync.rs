//! # Sync Route
//!
//! `POST /api/sync` takes the changes a client made while offline, applies
//! them best-effort and answers with the whole list as the server now has it.
//!
//! ```json
//! {
//!   "changes": [
//!     { "action": "create", "name": "Tea" },
//!     { "action": "update", "id": 3, "name": "Eggs", "purchased": true },
//!     { "action": "delete", "id": 9999 }
//!   ]
//! }
//! ```

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::error::{ApiError, ApiResult, OpResultExt};
use crate::response::Envelope;
use crate::state::AppState;
use shoplist_core::{Product, SyncRequest};

/// POST /api/sync
pub async fn sync(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Envelope<Vec<Product>>>> {
    let Json(body) = payload.op("sync")?;
    if !body.is_object() {
        return Err(ApiError::BadRequest(
            "Invalid sync request: body must be a JSON object".to_string(),
        ))
        .op("sync");
    }
    let request: SyncRequest = serde_json::from_value(body)
        .map_err(|e| ApiError::BadRequest(format!("Invalid sync request: {e}")))
        .op("sync")?;

    let outcome = state
        .db
        .sync()
        .apply_changes(request.changes)
        .await
        .op("sync")?;

    Ok(Json(
        Envelope::ok()
            .message("Sync completed successfully")
            .data(outcome.products)
            .applied_changes(outcome.applied)
            .timestamp(),
    ))
}
