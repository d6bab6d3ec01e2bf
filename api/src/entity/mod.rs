//! SeaORM entities
//!
//! Table models mapped one-to-one onto the PostgreSQL schema in `sql/schema.sql`.

pub mod paciente;
