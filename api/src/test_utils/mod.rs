//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! The mocks implement the repository ports in memory, so services and the
//! full router can be exercised without PostgreSQL.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
