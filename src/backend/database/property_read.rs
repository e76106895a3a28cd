//! Property search operations

use crate::backend::DatabaseType;
use crate::error::AppResult;
use crate::models::{FilterCriteria, PropertyListing};
use async_trait::async_trait;
use tracing::{debug, error};

use super::property_query::{build_property_query_for, PropertyQuery, DEFAULT_LIMIT};

/// Trait for executing a built property search
#[async_trait]
pub trait PropertyReader: Send + Sync {
    /// Run the statement, binding parameters in order
    async fn execute_property_query(&self, query: &PropertyQuery)
        -> AppResult<Vec<PropertyListing>>;
}

/// Unified property read operations
///
/// Builds the search statement in the reader's dialect and hands it to the
/// database-specific reader for execution.
pub struct UnifiedPropertyReadOps<T: PropertyReader> {
    reader: T,
    database_type: DatabaseType,
}

impl<T: PropertyReader> UnifiedPropertyReadOps<T> {
    pub fn new(reader: T, database_type: DatabaseType) -> Self {
        Self {
            reader,
            database_type,
        }
    }

    pub async fn get_all_properties(
        &self,
        criteria: &FilterCriteria,
        limit: Option<i64>,
    ) -> AppResult<Vec<PropertyListing>> {
        let query =
            build_property_query_for(self.database_type, criteria, limit.unwrap_or(DEFAULT_LIMIT));
        debug!(sql = %query.sql, params = ?query.params, "Searching properties");

        self.reader.execute_property_query(&query).await.map_err(|e| {
            error!("Error querying database: {}", e);
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::database::property_query::QueryParam;
    use std::sync::Mutex;

    struct CapturingReader {
        last: Mutex<Option<PropertyQuery>>,
    }

    #[async_trait]
    impl PropertyReader for CapturingReader {
        async fn execute_property_query(
            &self,
            query: &PropertyQuery,
        ) -> AppResult<Vec<PropertyListing>> {
            *self.last.lock().unwrap() = Some(query.clone());
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_builds_in_reader_dialect_with_default_limit() {
        let ops = UnifiedPropertyReadOps::new(
            CapturingReader {
                last: Mutex::new(None),
            },
            DatabaseType::SQLite,
        );

        let criteria = FilterCriteria::default().with_city("Van");
        ops.get_all_properties(&criteria, None).await.unwrap();

        let query = ops.reader.last.lock().unwrap().clone().unwrap();
        assert!(query.sql.contains("city LIKE ?1"));
        assert_eq!(query.params.last(), Some(&QueryParam::Integer(10)));
    }
}
