//! Procedure handler
//!
//! Runs the configured database function with two parameters from the form.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::AppError;
use crate::AppState;

/// Request body; parameters may arrive as strings or plain JSON scalars
#[derive(Debug, Deserialize)]
pub struct ExecuteProcedureRequest {
    #[serde(default)]
    pub param1: Option<JsonValue>,
    #[serde(default)]
    pub param2: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
pub struct ExecuteProcedureResponse {
    pub success: bool,
    pub message: String,
    pub data: Vec<JsonValue>,
}

/// Text form of a scalar parameter; null, arrays and objects count as missing
fn param_text(value: Option<&JsonValue>) -> Option<String> {
    match value? {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// POST /api/execute-procedure
pub async fn execute_procedure(
    State(state): State<AppState>,
    payload: Result<Json<ExecuteProcedureRequest>, JsonRejection>,
) -> Result<Json<ExecuteProcedureResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let param1 = param_text(request.param1.as_ref());
    let param2 = param_text(request.param2.as_ref());

    let outcome = state
        .procedure_service
        .execute(param1.as_deref(), param2.as_deref())
        .await?;

    Ok(Json(ExecuteProcedureResponse {
        success: true,
        message: "Procedimiento ejecutado exitosamente".to_string(),
        data: outcome.rows,
    }))
}
