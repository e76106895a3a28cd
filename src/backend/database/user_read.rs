//! User read operations
//!
//! Common interfaces for user lookups that work across database backends.

use crate::backend::DatabaseType;
use crate::error::AppResult;
use crate::models::User;
use async_trait::async_trait;
use tracing::{debug, error};

/// Statement for a case-insensitive email lookup
pub fn select_user_by_email_sql(database_type: DatabaseType) -> String {
    format!(
        "SELECT * FROM users WHERE LOWER(email) = LOWER({})",
        database_type.placeholder(1)
    )
}

/// Statement for an id lookup
pub fn select_user_by_id_sql(database_type: DatabaseType) -> String {
    format!("SELECT * FROM users WHERE id = {}", database_type.placeholder(1))
}

/// Trait for user read operations
#[async_trait]
pub trait UserReader: Send + Sync {
    /// First user row whose email matches, ignoring case
    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// First user row with the given id
    async fn find_user_by_id(&self, id: i32) -> AppResult<Option<User>>;
}

/// Unified user read operations
///
/// Wraps a database-specific reader, re-checks that the returned row really
/// is the requested user and logs failures before passing them on.
pub struct UnifiedUserReadOps<T: UserReader> {
    reader: T,
}

impl<T: UserReader> UnifiedUserReadOps<T> {
    pub fn new(reader: T) -> Self {
        Self { reader }
    }

    /// Find a user by email (case-insensitive)
    pub async fn get_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        debug!("Looking up user by email");
        let user = self.reader.find_user_by_email(email).await.map_err(|e| {
            error!("Error querying database: {}", e);
            e
        })?;

        Ok(user.filter(|user| user.email.to_lowercase() == email.to_lowercase()))
    }

    /// Find a user by id
    pub async fn get_user_by_id(&self, id: i32) -> AppResult<Option<User>> {
        debug!(user_id = id, "Looking up user by id");
        let user = self.reader.find_user_by_id(id).await.map_err(|e| {
            error!("Error querying database: {}", e);
            e
        })?;

        Ok(user.filter(|user| user.id == id))
    }
}
