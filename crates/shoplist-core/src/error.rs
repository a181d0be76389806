//! # Error Types
//!
//! Domain-specific error types for shoplist-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shoplist-core errors (this file)                                       │
//! │  ├── CoreError        - Domain outcomes (validation, empty, not found)  │
//! │  └── ValidationError  - One failed field rule                           │
//! │                                                                         │
//! │  shoplist-db errors (separate crate)                                    │
//! │  └── DbError          - Database operation failures                     │
//! │                                                                         │
//! │  Server errors (apps/server)                                            │
//! │  └── ApiError         - Status code + JSON envelope                     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError ─┐                                   │
//! │                          DbError ───┴→ ApiError → HTTP client           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Domain outcomes that are not successes.
#[derive(Debug, Error)]
pub enum CoreError {
    /// One or more field rules failed. Carries every failure, not just the first.
    #[error("Validation failed: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    /// An update request named none of the editable fields.
    #[error("No data to update")]
    EmptyInput,

    /// No product row has this id.
    #[error("Product not found: {0}")]
    ProductNotFound(i64),
}

impl CoreError {
    /// Human-readable messages for each validation failure.
    ///
    /// Empty for non-validation variants.
    pub fn messages(&self) -> Vec<String> {
        match self {
            CoreError::Validation(errors) => errors.iter().map(ToString::to_string).collect(),
            _ => Vec::new(),
        }
    }
}

impl From<ValidationError> for CoreError {
    fn from(err: ValidationError) -> Self {
        CoreError::Validation(vec![err])
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// The `Display` text is exactly what clients see in the `errors` array.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty after trimming.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Field is present but has the wrong JSON type.
    #[error("{field} must be {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    /// The request body is not a JSON object.
    #[error("request body must be a JSON object")]
    NotAnObject,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
