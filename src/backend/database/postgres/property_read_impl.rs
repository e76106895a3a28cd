use async_trait::async_trait;
use sqlx::PgPool;

use super::super::property_query::{PropertyQuery, QueryParam};
use super::super::property_read::PropertyReader;
use crate::error::{AppError, AppResult};
use crate::models::PropertyListing;

/// PostgreSQL-specific implementation of PropertyReader
pub struct PostgresPropertyReader {
    pool: PgPool,
}

impl PostgresPropertyReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PropertyReader for PostgresPropertyReader {
    async fn execute_property_query(
        &self,
        query: &PropertyQuery,
    ) -> AppResult<Vec<PropertyListing>> {
        let mut statement = sqlx::query_as::<_, PropertyListing>(&query.sql);
        for param in &query.params {
            statement = match param {
                QueryParam::Text(value) => statement.bind(value.as_str()),
                QueryParam::Integer(value) => statement.bind(*value),
                QueryParam::Float(value) => statement.bind(*value),
            };
        }

        statement
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to search properties: {}", e)))
    }
}
