//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod atencion_repo;
pub mod paciente_repo;
pub mod probe;
pub mod procedure_repo;

#[cfg(test)]
mod integration_tests;

pub use atencion_repo::PostgresAtencionRepository;
pub use paciente_repo::PostgresPacienteRepository;
pub use probe::PostgresDatabaseProbe;
pub use procedure_repo::PostgresProcedureRepository;
