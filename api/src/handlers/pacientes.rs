//! Paciente handlers
//!
//! Endpoints for listing, reading and deleting patients.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use serde::Serialize;

use crate::domain::entities::{Paciente, PacienteRun};
use crate::error::AppError;
use crate::AppState;

/// Response for a successful delete
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

/// RUN from the path; extractor failures become JSON 400s like any other bad input
fn parse_run(run: Result<Path<String>, PathRejection>) -> Result<PacienteRun, AppError> {
    let Path(run) = run.map_err(|e| AppError::BadRequest(e.body_text()))?;
    run.parse().map_err(AppError::BadRequest)
}

/// GET /api/pacientes
pub async fn list_pacientes(
    State(state): State<AppState>,
) -> Result<Json<Vec<Paciente>>, AppError> {
    let pacientes = state.paciente_service.list().await?;
    Ok(Json(pacientes))
}

/// GET /api/pacientes/:run
pub async fn get_paciente(
    State(state): State<AppState>,
    run: Result<Path<String>, PathRejection>,
) -> Result<Json<Paciente>, AppError> {
    let run = parse_run(run)?;
    let paciente = state.paciente_service.get(&run).await?;
    Ok(Json(paciente))
}

/// DELETE /api/pacientes/:run
pub async fn delete_paciente(
    State(state): State<AppState>,
    run: Result<Path<String>, PathRejection>,
) -> Result<Json<DeleteResponse>, AppError> {
    let run = parse_run(run)?;
    state.paciente_service.delete(&run).await?;

    Ok(Json(DeleteResponse {
        success: true,
        message: "Paciente eliminado exitosamente".to_string(),
    }))
}
