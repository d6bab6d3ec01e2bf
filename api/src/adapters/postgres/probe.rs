//! PostgreSQL connectivity probe

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};

use crate::domain::ports::{DatabaseProbe, ProbeResult};
use crate::error::DomainError;

const PROBE_SQL: &str = "SELECT current_user::text AS usuario, now() AS momento";

pub struct PostgresDatabaseProbe {
    db: DatabaseConnection,
}

impl PostgresDatabaseProbe {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DatabaseProbe for PostgresDatabaseProbe {
    async fn probe(&self) -> Result<ProbeResult, DomainError> {
        let row = self
            .db
            .query_one(Statement::from_string(DatabaseBackend::Postgres, PROBE_SQL))
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
            .ok_or_else(|| DomainError::Database("Probe returned no rows".to_string()))?;

        let user: String = row
            .try_get("", "usuario")
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let timestamp: DateTime<FixedOffset> = row
            .try_get("", "momento")
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(ProbeResult { user, timestamp })
    }
}
