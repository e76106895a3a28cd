use async_trait::async_trait;
use email_address::EmailAddress;
use tracing::{error, info};

use crate::backend::DatabaseType;
use crate::error::{AppError, AppResult};
use crate::models::{NewUser, User};

/// Prepared user data for database insertion
#[derive(Debug, Clone)]
pub struct PreparedUserData {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Database-specific adapter for user INSERT operations
#[async_trait]
pub trait UserInserter: Send + Sync {
    /// Execute user insert and return the stored row
    async fn execute_user_insert(&self, data: PreparedUserData) -> AppResult<User>;
}

/// Statement inserting one user and returning the stored row
pub fn insert_user_sql(database_type: DatabaseType) -> String {
    format!(
        "INSERT INTO users (name, email, password) VALUES ({}, {}, {}) RETURNING *",
        database_type.placeholder(1),
        database_type.placeholder(2),
        database_type.placeholder(3)
    )
}

/// Statement counting users that already own an email, ignoring case
pub fn count_users_by_email_sql(database_type: DatabaseType) -> String {
    format!(
        "SELECT COUNT(*) FROM users WHERE LOWER(email) = LOWER({})",
        database_type.placeholder(1)
    )
}

/// Shared business logic for user INSERT operations
pub struct UserInsertProcessor;

impl UserInsertProcessor {
    /// Validate and normalize a new user before it reaches the database
    pub fn prepare_user_for_insert(user: &NewUser) -> AppResult<PreparedUserData> {
        let name = user.name.trim().to_string();
        let email = user.email.trim().to_string();

        if name.is_empty() {
            return Err(AppError::BadRequest("name is required".to_string()));
        }
        if email.is_empty() {
            return Err(AppError::BadRequest("email is required".to_string()));
        }
        if !EmailAddress::is_valid(&email) {
            return Err(AppError::BadRequest(format!("invalid email: {}", email)));
        }
        if user.password.is_empty() {
            return Err(AppError::BadRequest("password is required".to_string()));
        }

        Ok(PreparedUserData {
            name,
            email,
            password: user.password.clone(),
        })
    }
}

/// Unified user insert operations
pub struct UnifiedUserInsertOps<T: UserInserter> {
    inserter: T,
}

impl<T: UserInserter> UnifiedUserInsertOps<T> {
    pub fn new(inserter: T) -> Self {
        Self { inserter }
    }

    /// Add a new user to the database
    pub async fn add_user(&self, user: &NewUser) -> AppResult<User> {
        let data = UserInsertProcessor::prepare_user_for_insert(user)?;
        let created = self.inserter.execute_user_insert(data).await.map_err(|e| {
            error!("Error adding user: {}", e);
            e
        })?;
        info!(user_id = created.id, "Added user");
        Ok(created)
    }
}
