//! # Domain Types
//!
//! Core domain types used throughout Shoplist.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  ProductInput   │   │  ChangeRecord   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (store)     │   │  name?          │   │  Create         │       │
//! │  │  name           │   │  purchased?     │   │  Update         │       │
//! │  │  purchased      │   │  notes?         │   │  Delete         │       │
//! │  │  notes          │   └─────────────────┘   └─────────────────┘       │
//! │  │  created_at     │                                                    │
//! │  │  updated_at     │   ┌─────────────────┐   ┌─────────────────┐       │
//! │  └─────────────────┘   │   NewProduct    │   │  ProductStats   │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! `id` is an integer assigned by the store (`AUTOINCREMENT`) and never
//! reused, so clients on different devices can refer to the same row.

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::validation::{validate_product, ValidationMode};

// =============================================================================
// Product
// =============================================================================

/// An item on the shared shopping list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Product {
    /// Store-assigned identifier.
    #[ts(type = "number")]
    pub id: i64,

    /// Display name, 1-100 characters.
    pub name: String,

    /// Whether the item has been bought.
    pub purchased: bool,

    /// Free-text notes, possibly empty.
    pub notes: String,

    /// When the product was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

/// Aggregate counts reported by the status endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductStats {
    #[ts(type = "number")]
    pub total: i64,
    #[ts(type = "number")]
    pub purchased: i64,
    #[ts(type = "number")]
    pub not_purchased: i64,
}

impl ProductStats {
    /// Builds stats from the two counts the store can answer directly.
    pub fn new(total: i64, purchased: i64) -> Self {
        ProductStats {
            total,
            purchased,
            not_purchased: total - purchased,
        }
    }
}

// =============================================================================
// Inputs
// =============================================================================

/// A validated create request: trimmed strings, defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub purchased: bool,
    pub notes: String,
}

/// A partial update. `None` means the client did not send the field.
///
/// ## Why not `Deserialize` directly?
/// A wrong JSON type has to show up in the validation error list, so the
/// raw body is validated first and only then converted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductInput {
    pub name: Option<String>,
    pub purchased: Option<bool>,
    pub notes: Option<String>,
}

impl ProductInput {
    /// Validates a create body and returns the row to insert.
    ///
    /// ## Returns
    /// * `Ok(NewProduct)` - Trimmed name/notes, `purchased` defaulted to false
    /// * `Err(CoreError::Validation)` - Every rule the body broke
    pub fn for_create(body: &Value) -> CoreResult<NewProduct> {
        let errors = validate_product(body, ValidationMode::Create);
        if !errors.is_empty() {
            return Err(CoreError::Validation(errors));
        }

        let input = Self::from_validated(body);
        Ok(NewProduct {
            name: input.name.unwrap_or_default(),
            purchased: input.purchased.unwrap_or(false),
            notes: input.notes.unwrap_or_default(),
        })
    }

    /// Validates an update body and returns the fields to change.
    ///
    /// ## Order of Checks
    /// 1. Not an object → `Validation`
    /// 2. None of `name`/`purchased`/`notes` supplied → `EmptyInput`
    /// 3. Field rules → `Validation`
    pub fn for_update(body: &Value) -> CoreResult<ProductInput> {
        let Some(fields) = body.as_object() else {
            return Err(ValidationError::NotAnObject.into());
        };

        let supplied = ["name", "purchased", "notes"]
            .iter()
            .any(|key| fields.get(*key).is_some_and(|v| !v.is_null()));
        if !supplied {
            return Err(CoreError::EmptyInput);
        }

        let errors = validate_product(body, ValidationMode::Update);
        if !errors.is_empty() {
            return Err(CoreError::Validation(errors));
        }

        Ok(Self::from_validated(body))
    }

    // Only called after validate_product, so types are already known good.
    fn from_validated(body: &Value) -> ProductInput {
        ProductInput {
            name: body
                .get("name")
                .and_then(Value::as_str)
                .map(|s| s.trim().to_string()),
            purchased: body.get("purchased").and_then(Value::as_bool),
            notes: body
                .get("notes")
                .and_then(Value::as_str)
                .map(|s| s.trim().to_string()),
        }
    }
}

// =============================================================================
// Sync Change Records
// =============================================================================

/// One offline change submitted by a client during sync.
///
/// Sync records are trusted: they are not run through the product
/// validator, and `update` overwrites all three fields.
///
/// Decoding is loose because clients send whatever they stored offline:
/// `purchased` may be a boolean or a 0/1 integer, `id` may be a number or a
/// numeric string, and scalar `name`/`notes` values are kept as text.
///
/// ## Wire Format
/// ```json
/// { "action": "create", "name": "Tea", "purchased": false, "notes": "" }
/// { "action": "update", "id": 3, "name": "Green tea", "purchased": 1 }
/// { "action": "delete", "id": "3" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum ChangeRecord {
    Create {
        #[serde(deserialize_with = "required_text")]
        name: String,
        #[serde(default, deserialize_with = "loose_flag")]
        purchased: bool,
        #[serde(default, deserialize_with = "optional_text")]
        notes: String,
    },
    Update {
        #[serde(deserialize_with = "loose_id")]
        id: i64,
        #[serde(deserialize_with = "required_text")]
        name: String,
        #[serde(default, deserialize_with = "loose_flag")]
        purchased: bool,
        #[serde(default, deserialize_with = "optional_text")]
        notes: String,
    },
    Delete {
        #[serde(deserialize_with = "loose_id")]
        id: i64,
    },
}

impl ChangeRecord {
    /// Decodes a single record from the raw sync batch.
    pub fn from_value(value: Value) -> Result<ChangeRecord, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// The `action` tag, as reported back in `applied_changes`.
    pub fn action(&self) -> &'static str {
        match self {
            ChangeRecord::Create { .. } => "create",
            ChangeRecord::Update { .. } => "update",
            ChangeRecord::Delete { .. } => "delete",
        }
    }
}

/// Body of `POST /api/sync`.
///
/// Records stay as raw JSON so that one malformed record can be skipped
/// without rejecting the whole batch.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SyncRequest {
    #[serde(default)]
    pub changes: Vec<Value>,
}

// -----------------------------------------------------------------------------
// Loose decoders for change records
// -----------------------------------------------------------------------------

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn required_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    scalar_text(&value).ok_or_else(|| de::Error::custom(format!("expected text, got {value}")))
}

fn optional_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        value => scalar_text(&value)
            .ok_or_else(|| de::Error::custom(format!("expected text, got {value}"))),
    }
}

fn loose_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(false),
        Value::Bool(flag) => Ok(flag),
        Value::Number(n) => n
            .as_f64()
            .map(|v| v != 0.0)
            .ok_or_else(|| de::Error::custom(format!("expected a flag, got {n}"))),
        other => Err(de::Error::custom(format!("expected a flag, got {other}"))),
    }
}

fn loose_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let id = match &value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    id.ok_or_else(|| de::Error::custom(format!("expected an integer id, got {value}")))
}

// =============================================================================
// Unit Tests
// =============================================================================
