//! # shoplist-db: Database Layer for Shoplist
//!
//! This crate provides database access for the Shoplist server.
//! It uses SQLite for storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shoplist Data Flow                               │
//! │                                                                         │
//! │  axum handler (GET /api/products)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   shoplist-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │               │    │  (embedded)  │  │   │
//! │  │   │               │    │ ProductRepo   │    │ 001_create_  │  │   │
//! │  │   │ SqlitePool    │◄───│ SyncRepo      │    │ products.sql │  │   │
//! │  │   │ Demo seed     │    │               │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   shopping.db (storage_path)                                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`seed`] - Demo products for an empty list
//! - [`error`] - Database error types
//! - [`repository`] - Product CRUD and sync batches
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shoplist_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("shopping.db")).await?;
//!
//! let to_buy = db.products().list(Some(false)).await?;
//! let outcome = db.sync().apply_changes(changes).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::product::ProductRepository;
pub use repository::sync::{SyncOutcome, SyncRepository};
