use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

use super::super::config::DatabaseBackendConfig;
use super::{
    SqlitePropertyInserter, SqlitePropertyReader, SqliteReservationReader, SqliteUserInserter,
    SqliteUserReader,
};
use crate::backend::database::{
    UnifiedPropertyInsertOps, UnifiedPropertyReadOps, UnifiedReservationReadOps,
    UnifiedUserInsertOps, UnifiedUserReadOps,
};
use crate::backend::{Backend, DatabaseType, PropertyBackend, ReservationBackend, UserBackend};
use crate::error::{AppError, AppResult};
use crate::models::{FilterCriteria, NewProperty, NewUser, Property, PropertyListing, Reservation, User};

/// SQLite database backend implementation
pub struct SqliteBackend {
    pool: SqlitePool,
    user_read_ops: UnifiedUserReadOps<SqliteUserReader>,
    user_insert_ops: UnifiedUserInsertOps<SqliteUserInserter>,
    reservation_read_ops: UnifiedReservationReadOps<SqliteReservationReader>,
    property_read_ops: UnifiedPropertyReadOps<SqlitePropertyReader>,
    property_insert_ops: UnifiedPropertyInsertOps<SqlitePropertyInserter>,
}

impl SqliteBackend {
    /// Create a new SQLite backend instance around an existing pool
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            user_read_ops: UnifiedUserReadOps::new(SqliteUserReader::new(pool.clone())),
            user_insert_ops: UnifiedUserInsertOps::new(SqliteUserInserter::new(pool.clone())),
            reservation_read_ops: UnifiedReservationReadOps::new(SqliteReservationReader::new(
                pool.clone(),
            )),
            property_read_ops: UnifiedPropertyReadOps::new(
                SqlitePropertyReader::new(pool.clone()),
                DatabaseType::SQLite,
            ),
            property_insert_ops: UnifiedPropertyInsertOps::new(SqlitePropertyInserter::new(
                pool.clone(),
            )),
            pool,
        }
    }

    /// Get the connection pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl Backend for SqliteBackend {
    async fn connect(config: &DatabaseBackendConfig) -> AppResult<Self> {
        config
            .validate()
            .map_err(|e| AppError::Configuration(format!("Invalid backend config: {}", e)))?;

        let url = if config.is_memory_database() {
            "sqlite::memory:"
        } else {
            config.connection_url.as_str()
        };
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| AppError::Configuration(format!("Invalid SQLite URL: {}", e)))?
            .create_if_missing(true);

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout));
        if config.is_memory_database() {
            // The in-memory database is dropped once its last connection closes.
            pool_options = pool_options.idle_timeout(None).max_lifetime(None);
        }

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to SQLite: {}", e)))?;

        info!(url = %config.connection_url, "Connected to SQLite");
        Ok(Self::new(pool))
    }

    fn database_type(&self) -> DatabaseType {
        DatabaseType::SQLite
    }

    async fn health_check(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Health check failed: {}", e)))?;

        Ok(())
    }

    async fn init_schema(&self) -> AppResult<()> {
        super::schema::init_schema(&self.pool).await
    }

    async fn cleanup(&self) -> AppResult<()> {
        self.pool.close().await;
        Ok(())
    }
}

#[async_trait]
impl UserBackend for SqliteBackend {
    async fn get_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.user_read_ops.get_user_by_email(email).await
    }

    async fn get_user_by_id(&self, id: i32) -> AppResult<Option<User>> {
        self.user_read_ops.get_user_by_id(id).await
    }

    async fn add_user(&self, user: &NewUser) -> AppResult<User> {
        self.user_insert_ops.add_user(user).await
    }
}

#[async_trait]
impl ReservationBackend for SqliteBackend {
    async fn get_reservations_for_guest(
        &self,
        guest_id: i32,
        limit: Option<i64>,
    ) -> AppResult<Vec<Reservation>> {
        self.reservation_read_ops
            .get_reservations_for_guest(guest_id, limit)
            .await
    }
}

#[async_trait]
impl PropertyBackend for SqliteBackend {
    async fn get_all_properties(
        &self,
        criteria: &FilterCriteria,
        limit: Option<i64>,
    ) -> AppResult<Vec<PropertyListing>> {
        self.property_read_ops.get_all_properties(criteria, limit).await
    }

    async fn add_property(&self, property: &NewProperty) -> AppResult<Property> {
        self.property_insert_ops.add_property(property).await
    }
}
