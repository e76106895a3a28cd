use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

use super::super::config::DatabaseBackendConfig;
use super::{
    PostgresPropertyInserter, PostgresPropertyReader, PostgresReservationReader,
    PostgresUserInserter, PostgresUserReader,
};
use crate::backend::database::{
    UnifiedPropertyInsertOps, UnifiedPropertyReadOps, UnifiedReservationReadOps,
    UnifiedUserInsertOps, UnifiedUserReadOps,
};
use crate::backend::{Backend, DatabaseType, PropertyBackend, ReservationBackend, UserBackend};
use crate::error::{AppError, AppResult};
use crate::models::{FilterCriteria, NewProperty, NewUser, Property, PropertyListing, Reservation, User};

/// PostgreSQL database backend implementation
pub struct PostgresBackend {
    pool: PgPool,
    user_read_ops: UnifiedUserReadOps<PostgresUserReader>,
    user_insert_ops: UnifiedUserInsertOps<PostgresUserInserter>,
    reservation_read_ops: UnifiedReservationReadOps<PostgresReservationReader>,
    property_read_ops: UnifiedPropertyReadOps<PostgresPropertyReader>,
    property_insert_ops: UnifiedPropertyInsertOps<PostgresPropertyInserter>,
}

impl PostgresBackend {
    /// Create a new PostgreSQL backend instance around an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self {
            user_read_ops: UnifiedUserReadOps::new(PostgresUserReader::new(pool.clone())),
            user_insert_ops: UnifiedUserInsertOps::new(PostgresUserInserter::new(pool.clone())),
            reservation_read_ops: UnifiedReservationReadOps::new(PostgresReservationReader::new(
                pool.clone(),
            )),
            property_read_ops: UnifiedPropertyReadOps::new(
                PostgresPropertyReader::new(pool.clone()),
                DatabaseType::PostgreSQL,
            ),
            property_insert_ops: UnifiedPropertyInsertOps::new(PostgresPropertyInserter::new(
                pool.clone(),
            )),
            pool,
        }
    }

    /// Get the connection pool reference
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Backend for PostgresBackend {
    async fn connect(config: &DatabaseBackendConfig) -> AppResult<Self> {
        config
            .validate()
            .map_err(|e| AppError::Configuration(format!("Invalid backend config: {}", e)))?;

        let mut options = PgConnectOptions::from_str(&config.connection_url)
            .map_err(|e| AppError::Configuration(format!("Invalid PostgreSQL URL: {}", e)))?;
        if let Some(application_name) = &config.application_name {
            options = options.application_name(application_name);
        }

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
            .connect_with(options)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to PostgreSQL: {}", e)))?;

        info!(max_connections = config.max_connections, "Connected to PostgreSQL");
        Ok(Self::new(pool))
    }

    fn database_type(&self) -> DatabaseType {
        DatabaseType::PostgreSQL
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
impl UserBackend for PostgresBackend {
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
impl ReservationBackend for PostgresBackend {
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
impl PropertyBackend for PostgresBackend {
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
