//! Health handler

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::error::{DomainError, UNAVAILABLE_MESSAGE};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub version: &'static str,
}

/// GET /api/health
///
/// Reports 503 when the startup probe failed, otherwise probes the database again.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    if !state.health_service.is_connected() {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                status: "ERROR",
                timestamp: None,
                database: Some("Disconnected"),
                message: Some(UNAVAILABLE_MESSAGE.to_string()),
                version: env!("CARGO_PKG_VERSION"),
            }),
        );
    }

    match state.health_service.check().await {
        Ok(probe) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "OK",
                timestamp: Some(probe.timestamp.to_rfc3339()),
                database: Some("Connected to PostgreSQL"),
                message: None,
                version: env!("CARGO_PKG_VERSION"),
            }),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Health check error");
            let message = match e {
                DomainError::Database(message) => message,
                other => other.to_string(),
            };
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthResponse {
                    status: "ERROR",
                    timestamp: None,
                    database: None,
                    message: Some(message),
                    version: env!("CARGO_PKG_VERSION"),
                }),
            )
        }
    }
}
