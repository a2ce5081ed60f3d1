use std::{sync::Arc, time::Instant};

use sea_orm::{ConnectionTrait, DatabaseConnection};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
};

#[derive(Debug, Clone)]
pub struct PostgresHealthCheckRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresHealthCheckRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl HealthCheckRepository for PostgresHealthCheckRepository {
    async fn health(&self) -> Result<u64, CoreError> {
        let start = Instant::now();

        self.db.execute_unprepared("SELECT 1").await.map_err(|e| {
            error!("Database health query failed: {}", e);
            CoreError::ServiceUnavailable(e.to_string())
        })?;

        Ok(start.elapsed().as_millis() as u64)
    }

    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        match self.db.ping().await {
            Ok(()) => Ok(DatabaseHealthStatus::up()),
            Err(e) => {
                error!("Database is not ready: {}", e);
                Ok(DatabaseHealthStatus::down(e.to_string()))
            }
        }
    }
}
