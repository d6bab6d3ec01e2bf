//! PostgreSQL adapter for PacienteRepository

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::domain::entities::{Paciente, PacienteRun};
use crate::domain::ports::PacienteRepository;
use crate::entity::paciente;
use crate::error::DomainError;

/// PostgreSQL implementation of PacienteRepository
pub struct PostgresPacienteRepository {
    db: DatabaseConnection,
}

impl PostgresPacienteRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PacienteRepository for PostgresPacienteRepository {
    async fn find_all(&self) -> Result<Vec<Paciente>, DomainError> {
        let results = paciente::Entity::find()
            .order_by_asc(paciente::Column::PacRun)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_run(&self, run: &PacienteRun) -> Result<Option<Paciente>, DomainError> {
        let result = paciente::Entity::find_by_id(run.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn delete_by_run(&self, run: &PacienteRun) -> Result<u64, DomainError> {
        let result = paciente::Entity::delete_by_id(run.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected)
    }
}

/// Convert SeaORM model to domain entity
impl From<paciente::Model> for Paciente {
    fn from(model: paciente::Model) -> Self {
        Paciente {
            pac_run: PacienteRun(model.pac_run),
            dv_run: model.dv_run,
            pnombre: model.pnombre,
            snombre: model.snombre,
            apaterno: model.apaterno,
            amaterno: model.amaterno,
            fecha_nacimiento: model.fecha_nacimiento,
            telefono: model.telefono,
            sal_id: model.sal_id,
        }
    }
}
