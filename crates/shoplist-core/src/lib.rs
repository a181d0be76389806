//! # shoplist-core: Pure Domain Logic for Shoplist
//!
//! This crate holds everything about the shopping list that can be expressed
//! without touching a database or a socket.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shoplist Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Clients (Android app, desktop, curl)               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ HTTP / JSON                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/server (axum handlers)                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shoplist-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐  ┌──────────────┐  ┌──────────────────────┐   │   │
//! │  │   │   types    │  │  validation  │  │        error         │   │   │
//! │  │   │  Product   │  │  name/notes  │  │  ValidationError     │   │   │
//! │  │   │  inputs    │  │  purchased   │  │  CoreError           │   │   │
//! │  │   └────────────┘  └──────────────┘  └──────────────────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 shoplist-db (Database Layer)                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, inputs, change records)
//! - [`error`] - Domain error types
//! - [`validation`] - Field rules for product input
//!
//! ## Example Usage
//!
//! ```rust
//! use serde_json::json;
//! use shoplist_core::types::ProductInput;
//!
//! let new = ProductInput::for_create(&json!({ "name": "  Milk  " })).unwrap();
//! assert_eq!(new.name, "Milk");
//! assert!(!new.purchased);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use types::*;
pub use validation::{validate_product, ValidationMode};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name, in characters, after trimming.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length of product notes, in characters, after trimming.
pub const MAX_NOTES_LENGTH: usize = 500;
