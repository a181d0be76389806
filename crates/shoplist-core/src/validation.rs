//! # Validation Module
//!
//! Field rules for product input.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Client (Android / desktop)                                    │
//! │  └── Basic checks before sending                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: HTTP handler (Rust)                                           │
//! │  ├── JSON syntax (axum extractor)                                       │
//! │  └── THIS MODULE: field presence, type and length                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                             │
//! │  └── NOT NULL constraints                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation runs on the raw JSON value rather than on a deserialized
//! struct so that a wrong type (`"purchased": "yes"`) becomes an entry in the
//! error list instead of a deserialization failure.
//!
//! ## Usage
//! ```rust
//! use serde_json::json;
//! use shoplist_core::validation::{validate_product, ValidationMode};
//!
//! let errors = validate_product(&json!({ "name": "" }), ValidationMode::Create);
//! assert_eq!(errors.len(), 1);
//! ```

use serde_json::Value;

use crate::error::ValidationError;
use crate::{MAX_NAME_LENGTH, MAX_NOTES_LENGTH};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Which operation the input is destined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// `name` must be present.
    Create,
    /// Every field is optional; present fields must still be valid.
    Update,
}

// =============================================================================
// Product Validator
// =============================================================================

/// Validates a product input mapping.
///
/// ## Rules
/// - `name`: required in [`ValidationMode::Create`]; when present it must be a
///   string of 1..=100 characters after trimming
/// - `purchased`: when present it must be a boolean
/// - `notes`: when present it must be a string of at most 500 characters
///   after trimming
///
/// `null` is treated the same as an absent key.
///
/// ## Returns
/// Every rule violation found. An empty vector means the input is acceptable.
pub fn validate_product(input: &Value, mode: ValidationMode) -> Vec<ValidationError> {
    let Some(fields) = input.as_object() else {
        return vec![ValidationError::NotAnObject];
    };

    let mut errors = Vec::new();

    match fields.get("name") {
        None | Some(Value::Null) => {
            if mode == ValidationMode::Create {
                errors.push(ValidationError::Required { field: "name" });
            }
        }
        Some(Value::String(name)) => {
            if let Err(e) = validate_name(name) {
                errors.push(e);
            }
        }
        Some(_) => errors.push(ValidationError::InvalidType {
            field: "name",
            expected: "a string",
        }),
    }

    match fields.get("purchased") {
        None | Some(Value::Null) | Some(Value::Bool(_)) => {}
        Some(_) => errors.push(ValidationError::InvalidType {
            field: "purchased",
            expected: "true or false",
        }),
    }

    match fields.get("notes") {
        None | Some(Value::Null) => {}
        Some(Value::String(notes)) => {
            if let Err(e) = validate_notes(notes) {
                errors.push(e);
            }
        }
        Some(_) => errors.push(ValidationError::InvalidType {
            field: "notes",
            expected: "a string",
        }),
    }

    errors
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most 100 characters after trimming
///
/// ## Example
/// ```rust
/// use shoplist_core::validation::validate_name;
///
/// assert!(validate_name("Молоко").is_ok());
/// assert!(validate_name("   ").is_err());
/// ```
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required { field: "name" });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name",
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validates product notes. Empty notes are fine.
pub fn validate_notes(notes: &str) -> ValidationResult<()> {
    if notes.trim().chars().count() > MAX_NOTES_LENGTH {
        return Err(ValidationError::TooLong {
            field: "notes",
            max: MAX_NOTES_LENGTH,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
