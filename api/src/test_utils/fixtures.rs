//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::NaiveDate;

use crate::domain::entities::{AtencionCostosa, AtencionId, Paciente, PacienteRun};

/// Create a test patient with the given RUN
pub fn test_paciente(run: i32) -> Paciente {
    Paciente {
        pac_run: PacienteRun(run),
        dv_run: "K".to_string(),
        pnombre: format!("Paciente{}", run),
        snombre: None,
        apaterno: "Prueba".to_string(),
        amaterno: Some("Test".to_string()),
        fecha_nacimiento: NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
        telefono: Some("+56900000000".to_string()),
        sal_id: Some(1),
    }
}

/// Create a report row with the given id and cost
pub fn test_atencion_costosa(id: i32, costo: f64) -> AtencionCostosa {
    AtencionCostosa {
        ate_id: AtencionId(id),
        fecha_atencion: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        pac_run: 11111111,
        nombre_paciente: "Ana Rojas Soto".to_string(),
        especialidad: Some("Cardiología".to_string()),
        costo,
    }
}
