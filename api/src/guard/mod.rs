//! Request guards
//!
//! Middleware that runs before the data endpoints.

pub mod database;

pub use database::require_database;
