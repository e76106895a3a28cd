use async_trait::async_trait;
use sqlx::SqlitePool;

use super::super::user_read::{select_user_by_email_sql, select_user_by_id_sql, UserReader};
use crate::backend::DatabaseType;
use crate::error::{AppError, AppResult};
use crate::models::User;

/// SQLite-specific implementation of UserReader
pub struct SqliteUserReader {
    pool: SqlitePool,
}

impl SqliteUserReader {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserReader for SqliteUserReader {
    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let sql = select_user_by_email_sql(DatabaseType::SQLite);
        sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to find user by email: {}", e)))
    }

    async fn find_user_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let sql = select_user_by_id_sql(DatabaseType::SQLite);
        sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to find user: {}", e)))
    }
}
