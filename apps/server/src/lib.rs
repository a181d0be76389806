//! # Shoplist Server
//!
//! HTTP API for a shopping list shared by the devices on a home network.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Server Layers                                   │
//! │                                                                         │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────────┐│
//! │  │  router        │  │  routes        │  │  response / error          ││
//! │  │                │  │                │  │                            ││
//! │  │ • CORS         │  │ • products     │  │ • Envelope                 ││
//! │  │ • TraceLayer   │─►│ • sync         │─►│ • ApiError → status code   ││
//! │  │ • 404 / 405    │  │ • system       │  │                            ││
//! │  └────────────────┘  └────────────────┘  └────────────────────────────┘│
//! │                              │                                          │
//! │                              ▼                                          │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  AppState { db: Database }                                        │  │
//! │  │                                                                   │  │
//! │  │  shoplist-core (validation)      shoplist-db (SQLite)            │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! See [`config`] for the keys and their `SHOPLIST_*` environment variables.

pub mod config;
pub mod error;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;

// Re-exports
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use router::build_router;
pub use state::AppState;
