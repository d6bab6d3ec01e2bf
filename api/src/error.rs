//! Unified error types for the Clínica API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Repository and business rule errors
//! - `ConfigError`: Configuration loading errors
//! - `AppError`: Application layer errors (rendered as `{error, details}` HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Configuration errors, raised once at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// A failed database operation, with a client-facing message and detail string.
    /// `cause` is the driver message, logged when the response is rendered.
    #[error("{message}: {cause}")]
    Database {
        message: String,
        details: String,
        cause: String,
    },

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database unavailable")]
    Unavailable,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Wrap a domain error from a failed operation, surfacing the driver detail.
    ///
    /// Not-found and validation errors keep their own status.
    pub fn database(message: &str, err: DomainError) -> Self {
        match err {
            DomainError::Database(details) | DomainError::Internal(details) => {
                AppError::Database {
                    message: message.to_string(),
                    cause: details.clone(),
                    details,
                }
            }
            other => AppError::Domain(other),
        }
    }

    /// Like [`AppError::database`] but replaces the driver detail with a fixed hint.
    ///
    /// The driver message is kept as the logged cause instead of being returned.
    pub fn database_with_hint(message: &str, hint: &str, err: DomainError) -> Self {
        match err {
            DomainError::Database(cause) | DomainError::Internal(cause) => AppError::Database {
                message: message.to_string(),
                details: hint.to_string(),
                cause,
            },
            other => AppError::Domain(other),
        }
    }
}

/// Error response body for JSON responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

pub const UNAVAILABLE_MESSAGE: &str = "No hay conexión a la base de datos";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            AppError::Domain(DomainError::NotFound(msg)) | AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, msg, None)
            }
            AppError::Domain(DomainError::Validation(msg)) | AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                "Solicitud inválida".to_string(),
                Some(msg),
            ),
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error de base de datos".to_string(),
                    Some(msg),
                )
            }
            AppError::Domain(DomainError::Internal(msg)) | AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error interno del servidor".to_string(),
                    None,
                )
            }
            AppError::Database {
                message,
                details,
                cause,
            } => {
                tracing::error!(error = %cause, "{}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message, Some(details))
            }
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Método no permitido".to_string(),
                None,
            ),
            AppError::Unavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                UNAVAILABLE_MESSAGE.to_string(),
                Some(
                    "El servidor no pudo conectarse a la base de datos. Revisa los logs del servidor."
                        .to_string(),
                ),
            ),
        };

        (status, Json(ErrorResponse { error, details })).into_response()
    }
}
