//! Shared types and computations for the Mini Inventory system
//!
//! This crate holds the domain types, derived-value computations (stock,
//! status, financial summary), and input validation helpers. Everything here
//! is usable without a database connection, which is what the test suite
//! leans on.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::*;
