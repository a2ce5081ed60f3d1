use std::{sync::Arc, time::Duration};

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{error, info};

#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub database_url: String,
}

/// Owns the connection pool shared by every repository.
#[derive(Debug, Clone)]
pub struct Postgres {
    db: Arc<DatabaseConnection>,
}

impl Postgres {
    pub async fn new(config: PostgresConfig) -> Result<Self, anyhow::Error> {
        let mut options = ConnectOptions::new(config.database_url);
        options
            .max_connections(10)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(10))
            .sqlx_logging(false);

        let db = Database::connect(options).await.map_err(|e| {
            error!("Failed to connect to database: {}", e);
            e
        })?;

        sqlx::migrate!("./migrations")
            .run(db.get_postgres_connection_pool())
            .await?;

        db.ping().await?;
        info!("Connected to database and applied migrations");

        Ok(Self { db: Arc::new(db) })
    }

    pub fn get_db(&self) -> Arc<DatabaseConnection> {
        self.db.clone()
    }

    /// Closes the pool shared by every repository holding this connection.
    pub async fn close(&self) {
        self.db.get_postgres_connection_pool().close().await;
    }
}
