use std::sync::Arc;
use tracing::info;

use crate::backend::{Backend, BackendFactory, LightBnbBackend};
use crate::config::AppConfig;
use crate::error::AppResult;

/// Connect the configured backend, verify it and make sure the tables exist
pub async fn initialize_backend(config: &AppConfig) -> AppResult<Arc<dyn LightBnbBackend>> {
    let backend_config = config.to_backend_config()?;

    let backend = BackendFactory::create(&backend_config).await?;
    backend.health_check().await?;
    backend.init_schema().await?;

    info!(
        database_type = ?backend.database_type(),
        "Initialized LightBnB schema"
    );

    Ok(backend)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::PropertyBackend;
    use crate::models::FilterCriteria;

    #[tokio::test]
    async fn test_initialize_default_backend() {
        let backend = initialize_backend(&AppConfig::default_config())
            .await
            .unwrap();

        let listings = backend
            .get_all_properties(&FilterCriteria::default(), None)
            .await
            .unwrap();
        assert!(listings.is_empty());
    }
}
