use async_trait::async_trait;
use sqlx::SqlitePool;

use super::super::property_insert::{insert_property_sql, PropertyInserter};
use crate::backend::DatabaseType;
use crate::error::{map_insert_error, AppResult};
use crate::models::{NewProperty, Property};

/// SQLite-specific implementation of PropertyInserter
pub struct SqlitePropertyInserter {
    pool: SqlitePool,
}

impl SqlitePropertyInserter {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PropertyInserter for SqlitePropertyInserter {
    async fn execute_property_insert(&self, property: NewProperty) -> AppResult<Property> {
        let sql = insert_property_sql(DatabaseType::SQLite);
        sqlx::query_as::<_, Property>(&sql)
            .bind(property.owner_id)
            .bind(&property.title)
            .bind(&property.description)
            .bind(&property.thumbnail_photo_url)
            .bind(&property.cover_photo_url)
            .bind(property.cost_per_night)
            .bind(&property.street)
            .bind(&property.city)
            .bind(&property.province)
            .bind(&property.post_code)
            .bind(&property.country)
            .bind(property.parking_spaces)
            .bind(property.number_of_bathrooms)
            .bind(property.number_of_bedrooms)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_insert_error(e, "Property"))
    }
}
