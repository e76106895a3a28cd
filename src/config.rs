use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use url::Url;

use crate::backend::database::DatabaseBackendConfig;
use crate::backend::DatabaseType;
use crate::error::{AppError, AppResult};

lazy_static! {
    /// `${VAR}` or `${VAR:-default}`
    static ref ENV_VAR_PATTERN: Regex =
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}").unwrap();
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    #[serde(rename = "type")]
    pub db_type: String,
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
}

fn default_max_connections() -> u32 {
    10
}

fn default_connection_timeout() -> u64 {
    30
}

impl AppConfig {
    /// Load configuration from YAML file
    pub fn load_from_file<P: AsRef<Path>>(config_path: P) -> Result<Self, String> {
        let path = config_path.as_ref();

        if !path.exists() {
            return Err(format!("Configuration file not found: {}", path.display()));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {}", path.display(), e))?;

        let expanded_content = Self::expand_env_vars(&content)?;

        let app_config: AppConfig = serde_yaml::from_str(&expanded_content)
            .map_err(|e| format!("Failed to parse config file {}: {}", path.display(), e))?;

        if DatabaseType::from_config_name(&app_config.database.db_type).is_none() {
            return Err(format!(
                "Unsupported database type: {}",
                app_config.database.db_type
            ));
        }

        Ok(app_config)
    }

    /// In-memory SQLite, for development and testing
    pub fn default_config() -> Self {
        AppConfig {
            database: DatabaseConfig {
                db_type: "sqlite".to_string(),
                url: ":memory:".to_string(),
                max_connections: 1,
                connection_timeout: default_connection_timeout(),
            },
        }
    }

    /// PostgreSQL configuration from `DB_USER`, `DB_PASSWORD`, `DB_HOST`,
    /// `DB_PORT` and `DATABASE`
    pub fn from_env_credentials() -> Result<Self, String> {
        let required = |name: &str| {
            std::env::var(name).map_err(|_| format!("Environment variable {} not found", name))
        };
        let optional =
            |name: &str, default: &str| std::env::var(name).unwrap_or_else(|_| default.to_string());

        let port = optional("DB_PORT", "5432")
            .parse::<u16>()
            .map_err(|e| format!("Invalid DB_PORT: {}", e))?;

        let url = postgres_url(
            &required("DB_USER")?,
            &required("DB_PASSWORD")?,
            &optional("DB_HOST", "localhost"),
            port,
            &optional("DATABASE", "lightbnb"),
        )?;

        Ok(AppConfig {
            database: DatabaseConfig {
                db_type: "postgresql".to_string(),
                url,
                max_connections: default_max_connections(),
                connection_timeout: default_connection_timeout(),
            },
        })
    }

    /// Expand environment variables in format ${VAR_NAME} or ${VAR_NAME:-default}
    fn expand_env_vars(content: &str) -> Result<String, String> {
        let mut missing = None;

        let expanded = ENV_VAR_PATTERN.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            match std::env::var(var_name) {
                Ok(value) => value,
                Err(_) => match caps.get(2) {
                    Some(default) => default.as_str().to_string(),
                    None => {
                        missing.get_or_insert_with(|| var_name.to_string());
                        String::new()
                    }
                },
            }
        });

        match missing {
            Some(var_name) => Err(format!(
                "Environment variable {} not found and no default provided",
                var_name
            )),
            None => Ok(expanded.into_owned()),
        }
    }

    /// Connection settings for [`crate::backend::BackendFactory`]
    pub fn to_backend_config(&self) -> AppResult<DatabaseBackendConfig> {
        let database_type =
            DatabaseType::from_config_name(&self.database.db_type).ok_or_else(|| {
                AppError::Configuration(format!(
                    "Unsupported database type: {}",
                    self.database.db_type
                ))
            })?;

        let config = DatabaseBackendConfig::new(database_type, self.database.url.clone())
            .with_max_connections(self.database.max_connections)
            .with_connection_timeout(self.database.connection_timeout)
            .with_application_name("lightbnb");

        config.validate().map_err(AppError::Configuration)?;
        Ok(config)
    }
}

/// Assemble a PostgreSQL URL, percent-encoding the user and password so
/// reserved characters stay inside the userinfo part
fn postgres_url(
    user: &str,
    password: &str,
    host: &str,
    port: u16,
    database: &str,
) -> Result<String, String> {
    let mut url = Url::parse(&format!("postgresql://{}", host))
        .map_err(|e| format!("Invalid DB_HOST '{}': {}", host, e))?;

    url.set_port(Some(port))
        .map_err(|_| format!("Cannot set port on host '{}'", host))?;
    url.set_username(user)
        .map_err(|_| format!("Cannot set user on host '{}'", host))?;
    url.set_password(Some(password))
        .map_err(|_| format!("Cannot set password on host '{}'", host))?;
    url.set_path(&format!("/{}", database));

    Ok(url.into())
}
