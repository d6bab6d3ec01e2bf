//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};

use crate::domain::entities::{
    AtencionCostosa, AtencionId, MontoMinimo, Paciente, PacienteRun, ProcedureOutcome,
    ProcedureParams,
};
use crate::error::DomainError;

/// Repository for Paciente rows
#[async_trait]
pub trait PacienteRepository: Send + Sync {
    /// All patients ordered by RUN
    async fn find_all(&self) -> Result<Vec<Paciente>, DomainError>;

    /// Find a patient by RUN
    async fn find_by_run(&self, run: &PacienteRun) -> Result<Option<Paciente>, DomainError>;

    /// Delete a patient, returning the number of rows removed
    async fn delete_by_run(&self, run: &PacienteRun) -> Result<u64, DomainError>;
}

/// Stored calculations and reports over attentions
#[async_trait]
pub trait AtencionRepository: Send + Sync {
    /// `pkg_calculos_clinica.fn_calcular_copago`; `None` when the function yields NULL
    async fn calcular_copago(&self, id: &AtencionId) -> Result<Option<f64>, DomainError>;

    /// `pkg_gestion_atenciones.fn_calcular_monto_final`; `None` when the function yields NULL
    async fn calcular_monto_final(&self, id: &AtencionId) -> Result<Option<f64>, DomainError>;

    /// `pkg_reportes_clinica.fn_get_reporte_costosas`
    async fn reporte_costosas(
        &self,
        monto_minimo: MontoMinimo,
    ) -> Result<Vec<AtencionCostosa>, DomainError>;
}

/// The configurable two-parameter database function
#[async_trait]
pub trait ProcedureRepository: Send + Sync {
    async fn execute(&self, params: &ProcedureParams) -> Result<ProcedureOutcome, DomainError>;
}

/// Result of a connectivity probe
#[derive(Debug, Clone)]
pub struct ProbeResult {
    pub user: String,
    pub timestamp: DateTime<FixedOffset>,
}

/// Connectivity check against the database server
#[async_trait]
pub trait DatabaseProbe: Send + Sync {
    async fn probe(&self) -> Result<ProbeResult, DomainError>;
}
