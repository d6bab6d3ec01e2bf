//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services validate input, call the repository ports and translate failures
//! into HTTP-facing errors.

pub mod atencion_service;
pub mod health_service;
pub mod paciente_service;
pub mod procedure_service;

pub use atencion_service::AtencionService;
pub use health_service::{DatabaseStatus, HealthService};
pub use paciente_service::PacienteService;
pub use procedure_service::ProcedureService;
