//! # Repository Module
//!
//! Database repository implementations for Shoplist.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  db.products().list(Some(false))                               │
//! │       ▼                                                                 │
//! │  ProductRepository                 SyncRepository                      │
//! │  ├── list(&self, filter)           └── apply_changes(&self, changes)   │
//! │  ├── get_by_id(&self, id)                                              │
//! │  ├── insert(&self, new)                                                │
//! │  ├── update(&self, id, input)                                          │
//! │  ├── delete(&self, id)                                                 │
//! │  └── stats(&self)                                                      │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - Product CRUD and statistics
//! - [`sync::SyncRepository`] - Best-effort application of client change batches

pub mod product;
pub mod sync;
