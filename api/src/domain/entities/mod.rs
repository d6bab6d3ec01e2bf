//! Domain entities
//!
//! Pure domain models representing clinic records.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod atencion;
pub mod paciente;
pub mod procedimiento;

pub use atencion::{AtencionCostosa, AtencionId, MontoMinimo};
pub use paciente::{Paciente, PacienteRun};
pub use procedimiento::{ProcedureOutcome, ProcedureParams};
