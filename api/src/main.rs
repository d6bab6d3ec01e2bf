//! Clínica API Server
//!
//! REST endpoints over the clinic's PostgreSQL database: patients, copayment and
//! final-amount calculations, the costly-attention report and a generic procedure call.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use sea_orm::{ConnectOptions, Database};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod guard;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{
    PostgresAtencionRepository, PostgresDatabaseProbe, PostgresPacienteRepository,
    PostgresProcedureRepository,
};
use app::{AtencionService, DatabaseStatus, HealthService, PacienteService, ProcedureService};
use config::Config;
use domain::ports::{AtencionRepository, DatabaseProbe, PacienteRepository, ProcedureRepository};
use error::ConfigError;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub paciente_service: Arc<PacienteService<dyn PacienteRepository>>,
    pub atencion_service: Arc<AtencionService<dyn AtencionRepository>>,
    pub procedure_service: Arc<ProcedureService<dyn ProcedureRepository>>,
    pub health_service: Arc<HealthService<dyn DatabaseProbe>>,
}

impl AppState {
    pub fn new(
        pacientes: Arc<dyn PacienteRepository>,
        atenciones: Arc<dyn AtencionRepository>,
        procedures: Arc<dyn ProcedureRepository>,
        probe: Arc<dyn DatabaseProbe>,
        status: Arc<DatabaseStatus>,
    ) -> Self {
        Self {
            paciente_service: Arc::new(PacienteService::new(pacientes)),
            atencion_service: Arc::new(AtencionService::new(atenciones)),
            procedure_service: Arc::new(ProcedureService::new(procedures)),
            health_service: Arc::new(HealthService::new(probe, status)),
        }
    }
}

/// Build the `/api` router
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    // Data routes answer 503 while the database is unreachable
    let data_routes = Router::new()
        .route(
            "/pacientes",
            get(handlers::list_pacientes).fallback(handlers::method_not_allowed),
        )
        .route(
            "/pacientes/:run",
            get(handlers::get_paciente)
                .delete(handlers::delete_paciente)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/copago/:id_atencion",
            get(handlers::get_copago).fallback(handlers::method_not_allowed),
        )
        .route(
            "/monto-final/:id_atencion",
            get(handlers::get_monto_final).fallback(handlers::method_not_allowed),
        )
        .route(
            "/reporte-costosas",
            get(handlers::get_reporte_costosas).fallback(handlers::method_not_allowed),
        )
        .route(
            "/execute-procedure",
            post(handlers::execute_procedure).fallback(handlers::method_not_allowed),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            guard::require_database,
        ));

    let api = Router::new()
        .route(
            "/health",
            get(handlers::health).fallback(handlers::method_not_allowed),
        )
        .merge(data_routes);

    Router::new()
        .nest("/api", api)
        .fallback(handlers::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS for the dashboard origin, with credentials
fn cors_layer(config: &Config) -> Result<CorsLayer, ConfigError> {
    Ok(CorsLayer::new()
        .allow_origin(config.cors_origin()?)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,clinica_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Clínica API...");

    // Load configuration
    let config = Config::from_env().context("Invalid configuration")?;
    tracing::info!(
        database_url = %config.redacted_database_url(),
        client_url = %config.client_url,
        procedure = %config.procedure_name,
        max_connections = config.max_connections,
        "Configuration loaded"
    );

    // The pool connects on first use; the probe below decides whether we are connected
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.max_connections)
        .connect_timeout(config.connect_timeout)
        .acquire_timeout(config.connect_timeout)
        .connect_lazy(true)
        .sqlx_logging(false);
    let db = Database::connect(options)
        .await
        .context("Failed to create database pool")?;

    // Create adapters
    let pacientes: Arc<dyn PacienteRepository> =
        Arc::new(PostgresPacienteRepository::new(db.clone()));
    let atenciones: Arc<dyn AtencionRepository> =
        Arc::new(PostgresAtencionRepository::new(db.clone()));
    let procedures: Arc<dyn ProcedureRepository> = Arc::new(PostgresProcedureRepository::new(
        db.clone(),
        &config.procedure_name,
    ));
    let probe: Arc<dyn DatabaseProbe> = Arc::new(PostgresDatabaseProbe::new(db.clone()));

    let state = AppState::new(
        pacientes,
        atenciones,
        procedures,
        probe,
        Arc::new(DatabaseStatus::default()),
    );

    tracing::info!("Connecting to database...");
    match state.health_service.initialize().await {
        Ok(probe) => tracing::info!(
            user = %probe.user,
            timestamp = %probe.timestamp.to_rfc3339(),
            "Database connected"
        ),
        Err(e) => {
            tracing::error!(error = %e, "Database connection failed; data endpoints will answer 503");
            tracing::warn!(
                "Check DATABASE_URL, that the server is reachable, and that sql/schema.sql was applied"
            );
        }
    }

    let app = build_router(state, cors_layer(&config)?);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    db.close().await.ok();
    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, starting shutdown"),
        _ = terminate => tracing::info!("Received SIGTERM, starting shutdown"),
    }
}
