//! Database availability middleware

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};

use crate::error::AppError;
use crate::AppState;

/// Reject requests with 503 when the startup probe could not reach the database
pub async fn require_database(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    if !state.health_service.is_connected() {
        tracing::error!(
            path = %request.uri().path(),
            "Intento de consulta sin conexión a la base de datos"
        );
        return Err(AppError::Unavailable);
    }

    Ok(next.run(request).await)
}
