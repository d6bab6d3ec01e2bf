//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod atenciones;
pub mod fallback;
pub mod health;
pub mod pacientes;
pub mod procedures;

pub use atenciones::{get_copago, get_monto_final, get_reporte_costosas};
pub use fallback::{method_not_allowed, not_found};
pub use health::health;
pub use pacientes::{delete_paciente, get_paciente, list_pacientes};
pub use procedures::execute_procedure;
