//! PostgreSQL adapter for AtencionRepository
//!
//! The clinic's calculation packages live in their own schemas
//! (`pkg_calculos_clinica`, `pkg_gestion_atenciones`, `pkg_reportes_clinica`),
//! so each call is a single `SELECT` on a schema-qualified function.

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, FromQueryResult, Statement,
};

use crate::domain::entities::{AtencionCostosa, AtencionId, MontoMinimo};
use crate::domain::ports::AtencionRepository;
use crate::error::DomainError;

const COPAGO_SQL: &str =
    "SELECT pkg_calculos_clinica.fn_calcular_copago($1)::float8 AS resultado";

const MONTO_FINAL_SQL: &str =
    "SELECT pkg_gestion_atenciones.fn_calcular_monto_final($1)::float8 AS resultado";

const REPORTE_COSTOSAS_SQL: &str = r#"
    SELECT ate_id, fecha_atencion, pac_run, nombre_paciente, especialidad,
           costo::float8 AS costo
    FROM pkg_reportes_clinica.fn_get_reporte_costosas($1::numeric)
"#;

/// Row shape returned by `fn_get_reporte_costosas`
#[derive(Debug, FromQueryResult)]
struct ReporteRow {
    ate_id: i32,
    fecha_atencion: NaiveDate,
    pac_run: i32,
    nombre_paciente: String,
    especialidad: Option<String>,
    costo: f64,
}

impl From<ReporteRow> for AtencionCostosa {
    fn from(row: ReporteRow) -> Self {
        AtencionCostosa {
            ate_id: AtencionId(row.ate_id),
            fecha_atencion: row.fecha_atencion,
            pac_run: row.pac_run,
            nombre_paciente: row.nombre_paciente,
            especialidad: row.especialidad,
            costo: row.costo,
        }
    }
}

/// PostgreSQL implementation of AtencionRepository
pub struct PostgresAtencionRepository {
    db: DatabaseConnection,
}

impl PostgresAtencionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Run a scalar function call and read its single `resultado` column
    async fn scalar(&self, sql: &str, id: &AtencionId) -> Result<Option<f64>, DomainError> {
        let stmt =
            Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, [id.0.into()]);

        let row = self
            .db
            .query_one(stmt)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        match row {
            Some(row) => row
                .try_get::<Option<f64>>("", "resultado")
                .map_err(|e| DomainError::Database(e.to_string())),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl AtencionRepository for PostgresAtencionRepository {
    async fn calcular_copago(&self, id: &AtencionId) -> Result<Option<f64>, DomainError> {
        self.scalar(COPAGO_SQL, id).await
    }

    async fn calcular_monto_final(&self, id: &AtencionId) -> Result<Option<f64>, DomainError> {
        self.scalar(MONTO_FINAL_SQL, id).await
    }

    async fn reporte_costosas(
        &self,
        monto_minimo: MontoMinimo,
    ) -> Result<Vec<AtencionCostosa>, DomainError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            REPORTE_COSTOSAS_SQL,
            [monto_minimo.0.into()],
        );

        let rows = ReporteRow::find_by_statement(stmt)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }
}
