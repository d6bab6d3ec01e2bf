//! Procedure service
//!
//! Runs the configured two-parameter database function.

use std::sync::Arc;

use crate::domain::entities::{ProcedureOutcome, ProcedureParams};
use crate::domain::ports::ProcedureRepository;
use crate::error::AppError;

pub struct ProcedureService<XR>
where
    XR: ProcedureRepository + ?Sized,
{
    procedures: Arc<XR>,
}

impl<XR> ProcedureService<XR>
where
    XR: ProcedureRepository + ?Sized,
{
    pub fn new(procedures: Arc<XR>) -> Self {
        Self { procedures }
    }

    /// Validate the raw parameters and run the function
    pub async fn execute(
        &self,
        param1: Option<&str>,
        param2: Option<&str>,
    ) -> Result<ProcedureOutcome, AppError> {
        let params = ProcedureParams::new(param1, param2).map_err(AppError::BadRequest)?;

        tracing::info!(param1 = %params.param1, param2 = %params.param2, "Ejecutando procedimiento");

        let outcome = self
            .procedures
            .execute(&params)
            .await
            .map_err(|e| AppError::database("Error al ejecutar el procedimiento", e))?;

        tracing::info!(rows = outcome.rows.len(), "Procedimiento ejecutado");
        Ok(outcome)
    }
}
