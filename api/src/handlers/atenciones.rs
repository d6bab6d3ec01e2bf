//! Atención handlers
//!
//! Copayment, final amount and the costly-attention report.

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{AtencionCostosa, AtencionId, MontoMinimo};
use crate::error::AppError;
use crate::AppState;

const CALCULO_EXITOSO: &str = "Cálculo exitoso";

#[derive(Debug, Serialize)]
pub struct CopagoResponse {
    pub atencion_id: AtencionId,
    pub copago_calculado: f64,
    pub mensaje: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MontoFinalResponse {
    pub atencion_id: AtencionId,
    pub monto_final: f64,
    pub mensaje: &'static str,
}

/// Query parameters for the report
#[derive(Debug, Deserialize)]
pub struct ReporteQuery {
    /// Minimum cost; absent or empty means 0
    pub monto: Option<String>,
}

/// Attention id from the path; extractor failures become JSON 400s
fn parse_atencion_id(id: Result<Path<String>, PathRejection>) -> Result<AtencionId, AppError> {
    let Path(id) = id.map_err(|e| AppError::BadRequest(e.body_text()))?;
    id.parse().map_err(AppError::BadRequest)
}

/// GET /api/copago/:idAtencion
pub async fn get_copago(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<CopagoResponse>, AppError> {
    let id = parse_atencion_id(id)?;
    let copago = state.atencion_service.copago(&id).await?;

    Ok(Json(CopagoResponse {
        atencion_id: id,
        copago_calculado: copago,
        mensaje: CALCULO_EXITOSO,
    }))
}

/// GET /api/monto-final/:idAtencion
pub async fn get_monto_final(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<MontoFinalResponse>, AppError> {
    let id = parse_atencion_id(id)?;
    let monto = state.atencion_service.monto_final(&id).await?;

    Ok(Json(MontoFinalResponse {
        atencion_id: id,
        monto_final: monto,
        mensaje: CALCULO_EXITOSO,
    }))
}

/// GET /api/reporte-costosas?monto=
pub async fn get_reporte_costosas(
    State(state): State<AppState>,
    query: Result<Query<ReporteQuery>, QueryRejection>,
) -> Result<Json<Vec<AtencionCostosa>>, AppError> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let monto_minimo = MontoMinimo::parse(query.monto.as_deref()).map_err(AppError::BadRequest)?;
    let rows = state.atencion_service.reporte_costosas(monto_minimo).await?;
    Ok(Json(rows))
}
