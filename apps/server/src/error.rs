//! # API Error Type
//!
//! The single place where domain and database errors become HTTP responses.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Server                             │
//! │                                                                         │
//! │  Handler                                                                │
//! │  ProductInput::for_update(&body).op("update_product")?                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  CoreError::EmptyInput ───────┐                                         │
//! │  CoreError::Validation ───────┤                                         │
//! │  DbError::NotFound ───────────┼──► ApiError ──► logged with op tag      │
//! │  DbError::QueryFailed ────────┤        │                                │
//! │  JsonRejection ───────────────┤        │                                │
//! │  PathRejection ───────────────┘        ▼                                │
//! │                                  IntoResponse                           │
//! │                                        │                                │
//! │                                        ▼                                │
//! │  400 { "success": false, "errors": ["name is required"] }              │
//! │  404 { "success": false, "error": "Product not found: 7" }             │
//! │  500 { "success": false, "error": "Query failed: database is locked" } │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, warn};

use crate::response::Envelope;
use shoplist_core::CoreError;
use shoplist_db::DbError;

/// Error returned from route handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// One or more field rules failed (400, `errors`).
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// The request could not be used as sent (400, `error`).
    #[error("{0}")]
    BadRequest(String),

    /// The addressed product does not exist (404, `error`).
    #[error("{0}")]
    NotFound(String),

    /// Storage or other server-side failure (500, `error`).
    #[error("{0}")]
    Internal(String),
}

/// Result type for route handlers.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn log(&self, op: &'static str) {
        match self {
            ApiError::Internal(msg) => error!(op, error = %msg, "Request failed"),
            other => warn!(op, error = %other, "Request rejected"),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(_) => ApiError::Validation(err.messages()),
            CoreError::EmptyInput => ApiError::BadRequest(err.to_string()),
            CoreError::ProductNotFound(_) => ApiError::NotFound(err.to_string()),
        }
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        if err.is_not_found() {
            ApiError::NotFound(err.to_string())
        } else {
            ApiError::Internal(err.to_string())
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

// A path id that is not an integer cannot name any product.
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(_) => {
                ApiError::NotFound("Product not found".to_string())
            }
            other => ApiError::Internal(other.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::Validation(messages) => Envelope::failures(messages),
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) | ApiError::Internal(msg) => {
                Envelope::failure(msg)
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Tags a failure with the operation it happened in and logs it.
///
/// ## Usage
/// ```rust,ignore
/// let input = ProductInput::for_update(&body).op("update_product")?;
/// state.db.products().update(id, &input).await.op("update_product")?;
/// ```
pub trait OpResultExt<T> {
    fn op(self, op: &'static str) -> ApiResult<T>;
}

impl<T, E> OpResultExt<T> for Result<T, E>
where
    E: Into<ApiError>,
{
    fn op(self, op: &'static str) -> ApiResult<T> {
        self.map_err(|e| {
            let err = e.into();
            err.log(op);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoplist_core::ValidationError;

    #[test]
    fn test_core_error_mapping() {
        let err = ApiError::from(CoreError::Validation(vec![
            ValidationError::Required { field: "name" },
            ValidationError::TooLong {
                field: "notes",
                max: 500,
            },
        ]));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(matches!(&err, ApiError::Validation(m) if m.len() == 2));

        let err = ApiError::from(CoreError::EmptyInput);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "No data to update");

        let err = ApiError::from(CoreError::ProductNotFound(7));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_db_error_mapping() {
        let err = ApiError::from(DbError::not_found("Product", 3));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Product not found: 3");

        let err = ApiError::from(DbError::QueryFailed("database is locked".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Query failed: database is locked");
    }

    #[test]
    fn test_op_converts_error() {
        let result: Result<(), CoreError> = Err(CoreError::EmptyInput);
        let err = result.op("update_product").unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }
}
