//! Atención service
//!
//! Copayment and final-amount calculations, and the costly-attention report.

use std::sync::Arc;

use crate::domain::entities::{AtencionCostosa, AtencionId, MontoMinimo};
use crate::domain::ports::AtencionRepository;
use crate::error::AppError;

pub const ATENCION_NO_ENCONTRADA: &str = "Atención no encontrada";

/// Service for attention calculations
pub struct AtencionService<AR>
where
    AR: AtencionRepository + ?Sized,
{
    atenciones: Arc<AR>,
}

impl<AR> AtencionService<AR>
where
    AR: AtencionRepository + ?Sized,
{
    pub fn new(atenciones: Arc<AR>) -> Self {
        Self { atenciones }
    }

    /// Copayment for an attention.
    ///
    /// The calculation logs its own failures in `log_errores_proceso`, so the
    /// client gets a pointer there instead of the driver message.
    pub async fn copago(&self, id: &AtencionId) -> Result<f64, AppError> {
        tracing::info!(atencion_id = %id, "Calculando copago");

        let copago = self
            .atenciones
            .calcular_copago(id)
            .await
            .map_err(|e| {
                AppError::database_with_hint(
                    "Error al calcular el copago.",
                    "La atención no existe o tiene datos inválidos. Revise el log de la BD.",
                    e,
                )
            })?
            .ok_or_else(|| AppError::NotFound(ATENCION_NO_ENCONTRADA.to_string()))?;

        tracing::info!(atencion_id = %id, copago, "Copago calculado");
        Ok(copago)
    }

    pub async fn monto_final(&self, id: &AtencionId) -> Result<f64, AppError> {
        tracing::info!(atencion_id = %id, "Calculando monto final");

        let monto = self
            .atenciones
            .calcular_monto_final(id)
            .await
            .map_err(|e| AppError::database("Error al calcular monto final.", e))?
            .ok_or_else(|| AppError::NotFound(ATENCION_NO_ENCONTRADA.to_string()))?;

        tracing::info!(atencion_id = %id, monto_final = monto, "Monto final calculado");
        Ok(monto)
    }

    /// Attentions whose cost is at least `monto_minimo`
    pub async fn reporte_costosas(
        &self,
        monto_minimo: MontoMinimo,
    ) -> Result<Vec<AtencionCostosa>, AppError> {
        tracing::info!(monto_minimo = monto_minimo.0, "Generando reporte de atenciones costosas");

        self.atenciones
            .reporte_costosas(monto_minimo)
            .await
            .map_err(|e| {
                AppError::database_with_hint(
                    "Error al generar el reporte.",
                    "Revise el log de la BD (tabla log_errores_proceso).",
                    e,
                )
            })
    }
}
