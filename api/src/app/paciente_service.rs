//! Paciente service
//!
//! Listing, lookup and deletion of patients.

use std::sync::Arc;

use crate::domain::entities::{Paciente, PacienteRun};
use crate::domain::ports::PacienteRepository;
use crate::error::AppError;

pub const PACIENTE_NO_ENCONTRADO: &str = "Paciente no encontrado";

/// Service for patient records
pub struct PacienteService<PR>
where
    PR: PacienteRepository + ?Sized,
{
    pacientes: Arc<PR>,
}

impl<PR> PacienteService<PR>
where
    PR: PacienteRepository + ?Sized,
{
    pub fn new(pacientes: Arc<PR>) -> Self {
        Self { pacientes }
    }

    /// All patients ordered by RUN
    pub async fn list(&self) -> Result<Vec<Paciente>, AppError> {
        tracing::info!("Obteniendo pacientes");

        let pacientes = self
            .pacientes
            .find_all()
            .await
            .map_err(|e| AppError::database("Error al obtener pacientes", e))?;

        tracing::info!(count = pacientes.len(), "Pacientes obtenidos");
        Ok(pacientes)
    }

    pub async fn get(&self, run: &PacienteRun) -> Result<Paciente, AppError> {
        let paciente = self
            .pacientes
            .find_by_run(run)
            .await
            .map_err(|e| AppError::database("Error al obtener paciente", e))?
            .ok_or_else(|| AppError::NotFound(PACIENTE_NO_ENCONTRADO.to_string()))?;

        tracing::debug!(run = %run, nombre = %paciente.nombre_completo(), "Paciente encontrado");
        Ok(paciente)
    }

    /// Delete a patient; a delete that touches no row is reported as not found
    pub async fn delete(&self, run: &PacienteRun) -> Result<(), AppError> {
        let deleted = self
            .pacientes
            .delete_by_run(run)
            .await
            .map_err(|e| AppError::database("Error al eliminar paciente", e))?;

        if deleted == 0 {
            return Err(AppError::NotFound(PACIENTE_NO_ENCONTRADO.to_string()));
        }

        tracing::info!(run = %run, "Paciente eliminado");
        Ok(())
    }
}
