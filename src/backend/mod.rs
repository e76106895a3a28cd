use crate::error::AppResult;
use crate::models::{FilterCriteria, NewProperty, NewUser, Property, PropertyListing, Reservation, User};
use async_trait::async_trait;
use std::sync::Arc;

pub mod database;

/// Supported database backend types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DatabaseType {
    PostgreSQL,
    SQLite,
}

impl DatabaseType {
    /// Positional parameter placeholder for the given 1-based index
    ///
    /// - PostgreSQL: $1, $2, $3...
    /// - SQLite: ?1, ?2, ?3...
    pub fn placeholder(&self, index: usize) -> String {
        match self {
            DatabaseType::PostgreSQL => format!("${}", index),
            DatabaseType::SQLite => format!("?{}", index),
        }
    }

    /// Parse the `type` value used in configuration files
    pub fn from_config_name(name: &str) -> Option<Self> {
        match name {
            "postgresql" | "postgres" => Some(DatabaseType::PostgreSQL),
            "sqlite" => Some(DatabaseType::SQLite),
            _ => None,
        }
    }
}

/// Core backend abstraction
///
/// Each database implementation (PostgreSQL, SQLite) owns its connection
/// pool and implements this trait together with the resource traits below.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Connect and initialize the storage backend
    async fn connect(config: &crate::backend::database::DatabaseBackendConfig) -> AppResult<Self>
    where
        Self: Sized;

    /// The SQL dialect this backend speaks
    fn database_type(&self) -> DatabaseType;

    /// Check if the storage backend is healthy and accessible
    async fn health_check(&self) -> AppResult<()>;

    /// Create the LightBnB tables if they do not exist yet
    async fn init_schema(&self) -> AppResult<()>;

    /// Clean up resources when storage is no longer needed
    async fn cleanup(&self) -> AppResult<()> {
        Ok(())
    }
}

/// User lookups and registration
#[async_trait]
pub trait UserBackend: Backend {
    /// Find a user by email (case-insensitive)
    async fn get_user_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find a user by id
    async fn get_user_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Insert a new user and return the stored row
    async fn add_user(&self, user: &NewUser) -> AppResult<User>;
}

/// Reservation listing for guests
#[async_trait]
pub trait ReservationBackend: Backend {
    /// List a guest's reservations ordered by start date; `limit` defaults to 10
    async fn get_reservations_for_guest(
        &self,
        guest_id: i32,
        limit: Option<i64>,
    ) -> AppResult<Vec<Reservation>>;
}

/// Property search and creation
#[async_trait]
pub trait PropertyBackend: Backend {
    /// Search properties by filter criteria; `limit` defaults to 10
    async fn get_all_properties(
        &self,
        criteria: &FilterCriteria,
        limit: Option<i64>,
    ) -> AppResult<Vec<PropertyListing>>;

    /// Insert a new property and return the stored row
    async fn add_property(&self, property: &NewProperty) -> AppResult<Property>;
}

/// Combined backend interface for every LightBnB resource
pub trait LightBnbBackend: UserBackend + ReservationBackend + PropertyBackend {}

/// Automatic implementation for any type that implements all resource traits
impl<T> LightBnbBackend for T where T: UserBackend + ReservationBackend + PropertyBackend {}

/// Factory for creating backend instances
pub struct BackendFactory;

impl BackendFactory {
    /// Create a backend based on configuration
    pub async fn create(
        config: &crate::backend::database::DatabaseBackendConfig,
    ) -> AppResult<Arc<dyn LightBnbBackend>> {
        let backend = Self::create_backend(config).await?;
        Ok(Arc::from(backend))
    }

    /// Create a backend based on configuration (returns Box)
    pub async fn create_backend(
        config: &crate::backend::database::DatabaseBackendConfig,
    ) -> AppResult<Box<dyn LightBnbBackend>> {
        match config.database_type {
            DatabaseType::PostgreSQL => {
                let backend =
                    crate::backend::database::postgres::PostgresBackend::connect(config).await?;
                Ok(Box::new(backend))
            }
            DatabaseType::SQLite => {
                let backend =
                    crate::backend::database::sqlite::SqliteBackend::connect(config).await?;
                Ok(Box::new(backend))
            }
        }
    }
}
