use async_trait::async_trait;
use sqlx::PgPool;

use super::super::user_insert::{
    count_users_by_email_sql, insert_user_sql, PreparedUserData, UserInserter,
};
use crate::backend::DatabaseType;
use crate::error::{map_insert_error, AppError, AppResult};
use crate::models::User;

/// PostgreSQL-specific implementation of UserInserter
pub struct PostgresUserInserter {
    pool: PgPool,
}

impl PostgresUserInserter {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Check for case-insensitive duplicate email
    async fn check_duplicate_email(&self, email: &str) -> AppResult<()> {
        let sql = count_users_by_email_sql(DatabaseType::PostgreSQL);

        let count: i64 = sqlx::query_scalar(&sql)
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to check duplicate email: {}", e)))?;

        if count > 0 {
            return Err(AppError::BadRequest("User already exists".to_string()));
        }

        Ok(())
    }
}

#[async_trait]
impl UserInserter for PostgresUserInserter {
    async fn execute_user_insert(&self, data: PreparedUserData) -> AppResult<User> {
        self.check_duplicate_email(&data.email).await?;

        let sql = insert_user_sql(DatabaseType::PostgreSQL);
        sqlx::query_as::<_, User>(&sql)
            .bind(&data.name)
            .bind(&data.email)
            .bind(&data.password)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_insert_error(e, "User"))
    }
}
