//! Domain models for the Mini Inventory server
//!
//! Re-exports the shared crate's models; database-facing row types live
//! next to the services that query them.

pub use shared::models::*;
