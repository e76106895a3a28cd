use crate::error::{AppError, AppResult};
use sqlx::PgPool;

/// Initialize the LightBnB schema for PostgreSQL
///
/// Creates users, properties, reservations and property reviews with their
/// foreign keys, plus the indexes used by searches.
pub async fn init_schema(pool: &PgPool) -> AppResult<()> {
    let statements = [
        (
            "users",
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id SERIAL PRIMARY KEY NOT NULL,
                name VARCHAR(255) NOT NULL,
                email VARCHAR(255) NOT NULL UNIQUE,
                password VARCHAR(255) NOT NULL
            )
            "#,
        ),
        (
            "properties",
            r#"
            CREATE TABLE IF NOT EXISTS properties (
                id SERIAL PRIMARY KEY NOT NULL,
                owner_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                title VARCHAR(255) NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                thumbnail_photo_url VARCHAR(255) NOT NULL,
                cover_photo_url VARCHAR(255) NOT NULL,
                cost_per_night INTEGER NOT NULL DEFAULT 0,
                parking_spaces INTEGER NOT NULL DEFAULT 0,
                number_of_bathrooms INTEGER NOT NULL DEFAULT 0,
                number_of_bedrooms INTEGER NOT NULL DEFAULT 0,
                country VARCHAR(255) NOT NULL,
                street VARCHAR(255) NOT NULL,
                city VARCHAR(255) NOT NULL,
                province VARCHAR(255) NOT NULL,
                post_code VARCHAR(255) NOT NULL
            )
            "#,
        ),
        (
            "reservations",
            r#"
            CREATE TABLE IF NOT EXISTS reservations (
                id SERIAL PRIMARY KEY NOT NULL,
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
                id SERIAL PRIMARY KEY NOT NULL,
                guest_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                property_id INTEGER NOT NULL REFERENCES properties(id) ON DELETE CASCADE,
                reservation_id INTEGER NOT NULL REFERENCES reservations(id) ON DELETE CASCADE,
                rating SMALLINT NOT NULL DEFAULT 0,
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
async fn create_indexes(pool: &PgPool) -> AppResult<()> {
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
