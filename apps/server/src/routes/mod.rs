//! Route handlers, one module per resource.

pub mod products;
pub mod sync;
pub mod system;
