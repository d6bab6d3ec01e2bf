//! PostgreSQL adapter for ProcedureRepository

use async_trait::async_trait;
use sea_orm::{DatabaseBackend, DatabaseConnection, FromQueryResult, JsonValue, Statement};

use crate::domain::entities::{ProcedureOutcome, ProcedureParams};
use crate::domain::ports::ProcedureRepository;
use crate::error::DomainError;

/// Calls a set-returning `(text, text)` function chosen at startup.
///
/// The function name is interpolated into the SQL, so it must already be
/// validated as an identifier (see `config::is_sql_identifier`).
pub struct PostgresProcedureRepository {
    db: DatabaseConnection,
    sql: String,
}

impl PostgresProcedureRepository {
    pub fn new(db: DatabaseConnection, procedure_name: &str) -> Self {
        Self {
            db,
            sql: format!("SELECT * FROM {}($1, $2)", procedure_name),
        }
    }
}

#[async_trait]
impl ProcedureRepository for PostgresProcedureRepository {
    async fn execute(&self, params: &ProcedureParams) -> Result<ProcedureOutcome, DomainError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            &self.sql,
            [params.param1.clone().into(), params.param2.clone().into()],
        );

        let rows = JsonValue::find_by_statement(stmt)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(ProcedureOutcome { rows })
    }
}
