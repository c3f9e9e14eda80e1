use crate::config::DatabaseConfig;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};
use std::time::Duration;
use tracing::info;

// sea-orm cannot clear the pool's lifetime limits, so pinned connections get
// one long enough to never expire.
const PINNED_CONNECTION_LIFETIME: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Owns the connection pool shared by every request.
#[derive(Clone)]
pub struct DatabaseService {
    pub(crate) database_connection: DatabaseConnection,
    pub(crate) composite_atomic: bool,
}

/// An in-memory database lives and dies with its only connection, so that
/// connection is never recycled by the pool.
pub(crate) fn connect_options(config: &DatabaseConfig) -> ConnectOptions {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .sqlx_logging(false);
    if config.is_in_memory() {
        options
            .max_lifetime(PINNED_CONNECTION_LIFETIME)
            .idle_timeout(PINNED_CONNECTION_LIFETIME);
    }
    options
}

impl DatabaseService {
    pub async fn new(config: &DatabaseConfig) -> Result<Self, DbErr> {
        info!("Connecting to database...");
        let database_connection = Database::connect(connect_options(config)).await?;

        info!("Running migrations...");
        Migrator::up(&database_connection, None).await?;
        info!("Database ready.");

        Ok(Self { database_connection, composite_atomic: false })
    }

    /// Wrap both writes of the employee-department create in one transaction.
    pub fn with_composite_atomic(mut self, atomic: bool) -> Self {
        self.composite_atomic = atomic;
        self
    }

    /// Opens a unit of work. Nothing written through it is visible elsewhere
    /// until `commit` succeeds; dropping it uncommitted rolls back.
    pub(crate) async fn begin(&self) -> Result<DatabaseTransaction, DbErr> {
        self.database_connection.begin().await
    }

    pub async fn ping(&self) -> Result<(), DbErr> {
        self.database_connection.ping().await
    }
}
