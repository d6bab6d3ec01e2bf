//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::{FixedOffset, TimeZone};
use serde_json::Value as JsonValue;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    AtencionCostosa, AtencionId, MontoMinimo, Paciente, PacienteRun, ProcedureOutcome,
    ProcedureParams,
};
use crate::domain::ports::{
    AtencionRepository, DatabaseProbe, PacienteRepository, ProbeResult, ProcedureRepository,
};
use crate::error::DomainError;

// ============================================================================
// In-Memory Paciente Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryPacienteRepository {
    pacientes: Arc<RwLock<BTreeMap<PacienteRun, Paciente>>>,
}

impl InMemoryPacienteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a patient for testing
    pub fn with_paciente(self, paciente: Paciente) -> Self {
        self.pacientes
            .write()
            .unwrap()
            .insert(paciente.pac_run, paciente);
        self
    }
}

#[async_trait]
impl PacienteRepository for InMemoryPacienteRepository {
    async fn find_all(&self) -> Result<Vec<Paciente>, DomainError> {
        let pacientes = self.pacientes.read().unwrap();
        Ok(pacientes.values().cloned().collect())
    }

    async fn find_by_run(&self, run: &PacienteRun) -> Result<Option<Paciente>, DomainError> {
        let pacientes = self.pacientes.read().unwrap();
        Ok(pacientes.get(run).cloned())
    }

    async fn delete_by_run(&self, run: &PacienteRun) -> Result<u64, DomainError> {
        let mut pacientes = self.pacientes.write().unwrap();
        Ok(pacientes.remove(run).map_or(0, |_| 1))
    }
}

// ============================================================================
// In-Memory Atencion Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryAtencionRepository {
    copagos: Arc<RwLock<HashMap<AtencionId, f64>>>,
    montos_finales: Arc<RwLock<HashMap<AtencionId, f64>>>,
    atenciones: Arc<RwLock<Vec<AtencionCostosa>>>,
}

impl InMemoryAtencionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_copago(self, id: AtencionId, copago: f64) -> Self {
        self.copagos.write().unwrap().insert(id, copago);
        self
    }

    pub fn with_monto_final(self, id: AtencionId, monto: f64) -> Self {
        self.montos_finales.write().unwrap().insert(id, monto);
        self
    }

    pub fn with_atencion(self, atencion: AtencionCostosa) -> Self {
        self.atenciones.write().unwrap().push(atencion);
        self
    }
}

#[async_trait]
impl AtencionRepository for InMemoryAtencionRepository {
    async fn calcular_copago(&self, id: &AtencionId) -> Result<Option<f64>, DomainError> {
        Ok(self.copagos.read().unwrap().get(id).copied())
    }

    async fn calcular_monto_final(&self, id: &AtencionId) -> Result<Option<f64>, DomainError> {
        Ok(self.montos_finales.read().unwrap().get(id).copied())
    }

    async fn reporte_costosas(
        &self,
        monto_minimo: MontoMinimo,
    ) -> Result<Vec<AtencionCostosa>, DomainError> {
        let mut rows: Vec<AtencionCostosa> = self
            .atenciones
            .read()
            .unwrap()
            .iter()
            .filter(|a| a.costo >= monto_minimo.0)
            .cloned()
            .collect();

        rows.sort_by(|a, b| b.costo.total_cmp(&a.costo).then(a.ate_id.0.cmp(&b.ate_id.0)));
        Ok(rows)
    }
}

// ============================================================================
// In-Memory Procedure Repository
// ============================================================================

/// Returns canned rows and records every call
#[derive(Default)]
pub struct InMemoryProcedureRepository {
    rows: Vec<JsonValue>,
    calls: Arc<RwLock<Vec<ProcedureParams>>>,
}

impl InMemoryProcedureRepository {
    pub fn new(rows: Vec<JsonValue>) -> Self {
        Self {
            rows,
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<ProcedureParams> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl ProcedureRepository for InMemoryProcedureRepository {
    async fn execute(&self, params: &ProcedureParams) -> Result<ProcedureOutcome, DomainError> {
        self.calls.write().unwrap().push(params.clone());
        Ok(ProcedureOutcome {
            rows: self.rows.clone(),
        })
    }
}

// ============================================================================
// Probes
// ============================================================================

/// Probe that always succeeds with a fixed user and timestamp
pub struct StaticProbe {
    user: String,
}

impl StaticProbe {
    pub fn new(user: &str) -> Self {
        Self {
            user: user.to_string(),
        }
    }
}

#[async_trait]
impl DatabaseProbe for StaticProbe {
    async fn probe(&self) -> Result<ProbeResult, DomainError> {
        let offset = FixedOffset::west_opt(3 * 3600).unwrap();
        Ok(ProbeResult {
            user: self.user.clone(),
            timestamp: offset.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        })
    }
}

// ============================================================================
// Failing Repository
// ============================================================================

/// Every operation fails with the same database error
pub struct FailingRepository {
    message: String,
}

impl FailingRepository {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    fn error(&self) -> DomainError {
        DomainError::Database(self.message.clone())
    }
}

#[async_trait]
impl PacienteRepository for FailingRepository {
    async fn find_all(&self) -> Result<Vec<Paciente>, DomainError> {
        Err(self.error())
    }

    async fn find_by_run(&self, _run: &PacienteRun) -> Result<Option<Paciente>, DomainError> {
        Err(self.error())
    }

    async fn delete_by_run(&self, _run: &PacienteRun) -> Result<u64, DomainError> {
        Err(self.error())
    }
}

#[async_trait]
impl AtencionRepository for FailingRepository {
    async fn calcular_copago(&self, _id: &AtencionId) -> Result<Option<f64>, DomainError> {
        Err(self.error())
    }

    async fn calcular_monto_final(&self, _id: &AtencionId) -> Result<Option<f64>, DomainError> {
        Err(self.error())
    }

    async fn reporte_costosas(
        &self,
        _monto_minimo: MontoMinimo,
    ) -> Result<Vec<AtencionCostosa>, DomainError> {
        Err(self.error())
    }
}

#[async_trait]
impl ProcedureRepository for FailingRepository {
    async fn execute(&self, _params: &ProcedureParams) -> Result<ProcedureOutcome, DomainError> {
        Err(self.error())
    }
}

#[async_trait]
impl DatabaseProbe for FailingRepository {
    async fn probe(&self) -> Result<ProbeResult, DomainError> {
        Err(self.error())
    }
}
