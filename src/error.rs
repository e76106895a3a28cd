use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Database(String),
    Serialization(serde_json::Error),
    BadRequest(String),
    Internal(String),
    Configuration(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Database(e) => write!(f, "Database error: {}", e),
            AppError::Serialization(e) => write!(f, "Serialization error: {}", e),
            AppError::BadRequest(e) => write!(f, "Bad request: {}", e),
            AppError::Internal(e) => write!(f, "Internal error: {}", e),
            AppError::Configuration(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err)
    }
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Whether the failure came from the database layer rather than the caller's input
    pub fn is_data_access(&self) -> bool {
        matches!(self, AppError::Database(_))
    }
}

/// Map an sqlx failure on INSERT to an `AppError`
///
/// Unique constraint violations are the caller's fault and become
/// `BadRequest`; everything else is an opaque database failure.
pub fn map_insert_error(error: sqlx::Error, resource_type: &str) -> AppError {
    let error_str = error.to_string();
    if error_str.contains("duplicate key") || error_str.contains("UNIQUE constraint") {
        if error_str.contains("email") {
            AppError::BadRequest("Email already exists".to_string())
        } else {
            AppError::BadRequest(format!("{} already exists", resource_type))
        }
    } else {
        AppError::Database(format!("Failed to create {}: {}", resource_type, error_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        let err = AppError::Database("connection refused".to_string());
        assert_eq!(err.to_string(), "Database error: connection refused");

        let err = AppError::BadRequest("name is required".to_string());
        assert_eq!(err.to_string(), "Bad request: name is required");
    }

    #[test]
    fn test_is_data_access() {
        assert!(AppError::Database("boom".to_string()).is_data_access());
        assert!(!AppError::BadRequest("bad".to_string()).is_data_access());
        assert!(!AppError::Configuration("missing".to_string()).is_data_access());
    }

    #[test]
    fn test_map_insert_error_falls_back_to_database() {
        let err = map_insert_error(sqlx::Error::RowNotFound, "Property");
        match err {
            AppError::Database(msg) => assert!(msg.starts_with("Failed to create Property")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
