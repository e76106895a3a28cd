use crate::error::{AppError, AppResult};
use sqlx::SqlitePool;

/// Initialize the LightBnB schema for SQLite
///
/// Mirrors the PostgreSQL tables with SQLite column types.
pub async fn init_schema(pool: &SqlitePool) -> AppResult<()> {
    let statements = [
        (
            "users",
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                password TEXT NOT NULL
            )
            "#,
        ),
        (
            "properties",
            r#"
            CREATE TABLE IF NOT EXISTS properties (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                owner_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                title TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                thumbnail_photo_url TEXT NOT NULL,
                cover_photo_url TEXT NOT NULL,
                cost_per_night INTEGER NOT NULL DEFAULT 0,
                parking_spaces INTEGER NOT NULL DEFAULT 0,
                number_of_bathrooms INTEGER NOT NULL DEFAULT 0,
                number_of_bedrooms INTEGER NOT NULL DEFAULT 0,
                country TEXT NOT NULL,
                street TEXT NOT NULL,
                city TEXT NOT NULL,
                province TEXT NOT NULL,
                post_code TEXT NOT NULL
            )
            "#,
        ),
        (
            "reservations",
            r#"
            CREATE TABLE IF NOT EXISTS reservations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                start_date DATE NOT NULL,
                end_date DATE NOT NULL,
                property_id INTEGER NOT NULL REFERENCES properties(id) ON DELETE CASCADE,
                guest_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE
            )
            "#,
        ),
        (
            "property_reviews",
            r#"
            CREATE TABLE IF NOT EXISTS property_reviews (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                guest_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                property_id INTEGER NOT NULL REFERENCES properties(id) ON DELETE CASCADE,
                reservation_id INTEGER NOT NULL REFERENCES reservations(id) ON DELETE CASCADE,
                rating INTEGER NOT NULL DEFAULT 0,
                message TEXT
            )
            "#,
        ),
    ];

    for (table, sql) in statements {
        sqlx::query(sql)
            .execute(pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to create {} table: {}", table, e)))?;
    }

    create_indexes(pool).await?;

    Ok(())
}

/// Create performance indexes
async fn create_indexes(pool: &SqlitePool) -> AppResult<()> {
    let indexes = [
        "CREATE INDEX IF NOT EXISTS idx_users_email ON users (LOWER(email))",
        "CREATE INDEX IF NOT EXISTS idx_properties_owner_id ON properties (owner_id)",
        "CREATE INDEX IF NOT EXISTS idx_properties_cost_per_night ON properties (cost_per_night)",
        "CREATE INDEX IF NOT EXISTS idx_reservations_guest_id ON reservations (guest_id)",
        "CREATE INDEX IF NOT EXISTS idx_property_reviews_property_id ON property_reviews (property_id)",
    ];

    for index_sql in indexes {
        sqlx::query(index_sql)
            .execute(pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to create index: {}", e)))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    #[tokio::test]
    async fn test_schema_creation_is_idempotent() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        init_schema(&pool).await.unwrap();
        init_schema(&pool).await.unwrap();

        for table in ["users", "properties", "reservations", "property_reviews"] {
            let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table))
                .fetch_one(&pool)
                .await
                .unwrap();
            assert_eq!(count.0, 0, "table {} should start empty", table);
        }
    }
}
