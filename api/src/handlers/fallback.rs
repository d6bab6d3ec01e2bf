//! Fallback handlers
//!
//! Unknown paths and unsupported methods answer with the same JSON error body
//! as every other failure.

use axum::http::Uri;

use crate::error::AppError;

pub const RUTA_NO_ENCONTRADA: &str = "Ruta no encontrada";

/// Any path outside the routing table
pub async fn not_found(uri: Uri) -> AppError {
    tracing::debug!(path = %uri.path(), "Ruta no encontrada");
    AppError::NotFound(RUTA_NO_ENCONTRADA.to_string())
}

/// A known path requested with a method it does not serve
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
