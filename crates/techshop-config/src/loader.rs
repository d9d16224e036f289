//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, ConfigError, Environment, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use techshop_core::ShopError;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Environment variable prefix, e.g. `TECHSHOP__SERVER__PORT=9000`.
pub const ENV_PREFIX: &str = "TECHSHOP";

/// Environment variable selecting the environment-specific file.
pub const ENVIRONMENT_VAR: &str = "TECHSHOP_ENVIRONMENT";

/// Where the active configuration came from.
///
/// Loading runs before the tracing subscriber exists, so the loader records
/// this instead of logging it; call [`ConfigLoader::log_sources`] once
/// tracing is installed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSources {
    /// Value of `TECHSHOP_ENVIRONMENT`, or `development`.
    pub environment: String,
    pub config_dir: PathBuf,
    /// Files that existed and were merged, in precedence order.
    pub files: Vec<PathBuf>,
    /// Path of the `.env` file, if one was found.
    pub env_file: Option<PathBuf>,
    pub warnings: Vec<String>,
}

struct Loaded {
    config: AppConfig,
    sources: ConfigSources,
}

/// Configuration loader with runtime refresh support.
#[derive(Clone)]
pub struct ConfigLoader {
    state: Arc<RwLock<Loaded>>,
    config_dir: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Sources, later ones overriding earlier ones:
    /// 1. `{dir}/default.toml`
    /// 2. `{dir}/{environment}.toml`
    /// 3. `{dir}/local.toml`
    /// 4. `TECHSHOP__*` environment variables
    pub fn new(config_dir: impl Into<PathBuf>) -> Result<Self, ShopError> {
        let config_dir = config_dir.into();
        let loaded = Self::load_config(&config_dir)?;

        Ok(Self {
            state: Arc::new(RwLock::new(loaded)),
            config_dir,
        })
    }

    /// Loads configuration from `./config`.
    pub fn from_default_location() -> Result<Self, ShopError> {
        Self::new("./config")
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.state.read().await.config.clone()
    }

    /// Returns the sources the current configuration was built from.
    pub async fn sources(&self) -> ConfigSources {
        self.state.read().await.sources.clone()
    }

    /// Logs the environment, merged files and any validation warnings.
    pub async fn log_sources(&self) {
        let state = self.state.read().await;
        let sources = &state.sources;

        info!(
            "Loaded configuration for environment '{}' from {}",
            sources.environment,
            sources.config_dir.display()
        );
        match &sources.env_file {
            Some(path) => debug!("Loaded .env file: {}", path.display()),
            None => debug!("No .env file loaded"),
        }
        for path in &sources.files {
            debug!("Merged config file: {}", path.display());
        }
        for warning in &sources.warnings {
            warn!("{}", warning);
        }
    }

    /// Reloads the configuration from disk.
    pub async fn reload(&self) -> Result<(), ShopError> {
        let loaded = Self::load_config(&self.config_dir)?;
        *self.state.write().await = loaded;
        info!("Configuration reloaded");
        self.log_sources().await;
        Ok(())
    }

    /// Gets a specific configuration value by dotted key path, e.g.
    /// `server.port`.
    pub async fn get_value<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let state = self.state.read().await;
        let json = serde_json::to_value(&state.config).ok()?;

        let mut current = &json;
        for part in key.split('.') {
            current = current.get(part)?;
        }

        serde_json::from_value(current.clone()).ok()
    }

    fn load_config(config_dir: &Path) -> Result<Loaded, ShopError> {
        let env_file = dotenvy::dotenv().ok();

        let environment =
            std::env::var(ENVIRONMENT_VAR).unwrap_or_else(|_| "development".to_string());

        let mut files = Vec::new();
        let mut builder = Config::builder();
        for name in ["default", environment.as_str(), "local"] {
            let path = config_dir.join(format!("{name}.toml"));
            if path.exists() {
                builder = builder.add_source(File::from(path.clone()).required(false));
                files.push(path);
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = builder
            .build()
            .and_then(Config::try_deserialize)
            .map_err(config_error_to_shop_error)?;

        let warnings = Self::validate_config(&config)?;
        Ok(Loaded {
            config,
            sources: ConfigSources {
                environment,
                config_dir: config_dir.to_path_buf(),
                files,
                env_file,
                warnings,
            },
        })
    }

    /// Rejects unusable settings and returns warnings for risky ones.
    fn validate_config(config: &AppConfig) -> Result<Vec<String>, ShopError> {
        if config.database.url.trim().is_empty() {
            return Err(ShopError::Configuration("Database URL is required".to_string()));
        }

        if config.database.max_connections < config.database.min_connections {
            return Err(ShopError::Configuration(format!(
                "database.max_connections ({}) is below database.min_connections ({})",
                config.database.max_connections, config.database.min_connections
            )));
        }

        let mut warnings = Vec::new();
        if config.app.is_production() && config.server.allows_any_origin() {
            warnings.push("CORS allows any origin in production".to_string());
        }

        Ok(warnings)
    }
}

fn config_error_to_shop_error(err: ConfigError) -> ShopError {
    ShopError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    #[tokio::test]
    async fn test_missing_directory_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ConfigLoader::new(dir.path().join("nope")).unwrap();
        let config = loader.get().await;
        assert_eq!(config.server.port, 8080);
    }

    #[tokio::test]
    async fn test_default_then_local_override() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "default.toml",
            "[server]\nport = 8181\nhost = \"127.0.0.1\"\n",
        );
        write(dir.path(), "local.toml", "[server]\nport = 8282\n");

        let loader = ConfigLoader::new(dir.path()).unwrap();
        let config = loader.get().await;
        assert_eq!(config.server.port, 8282);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[tokio::test]
    async fn test_get_value_by_path() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "default.toml", "[database]\nmax_connections = 42\n");

        let loader = ConfigLoader::new(dir.path()).unwrap();
        assert_eq!(loader.get_value::<u32>("database.max_connections").await, Some(42));
        assert_eq!(loader.get_value::<u32>("database.missing").await, None);
    }

    #[tokio::test]
    async fn test_reload_picks_up_changes() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "default.toml", "[server]\nport = 1000\n");
        let loader = ConfigLoader::new(dir.path()).unwrap();

        write(dir.path(), "default.toml", "[server]\nport = 2000\n");
        loader.reload().await.unwrap();
        assert_eq!(loader.get().await.server.port, 2000);
    }

    #[tokio::test]
    async fn test_sources_record_merged_files() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "default.toml", "[server]\nport = 1000\n");
        write(dir.path(), "local.toml", "[server]\nport = 1001\n");

        let loader = ConfigLoader::new(dir.path()).unwrap();
        let sources = loader.sources().await;

        assert_eq!(sources.config_dir, dir.path());
        assert_eq!(
            sources.files,
            vec![dir.path().join("default.toml"), dir.path().join("local.toml")]
        );
        assert!(!sources.environment.is_empty());
    }

    #[tokio::test]
    async fn test_log_sources_after_subscriber_install() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let dir = tempfile::tempdir().unwrap();
        let loader = ConfigLoader::new(dir.path()).unwrap();

        assert!(loader.sources().await.files.is_empty());
        loader.log_sources().await;
    }

    #[test]
    fn test_risky_settings_become_warnings() {
        let mut config = AppConfig::default();
        config.app.environment = "production".to_string();
        config.server.cors_origins = vec!["*".to_string()];

        let warnings = ConfigLoader::validate_config(&config).unwrap();
        assert_eq!(warnings, vec!["CORS allows any origin in production".to_string()]);
    }

    #[test]
    fn test_rejects_empty_database_url() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "default.toml", "[database]\nurl = \"\"\n");
        let err = ConfigLoader::new(dir.path()).err().unwrap();
        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
    }

    #[test]
    fn test_rejects_inverted_pool_bounds() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "default.toml",
            "[database]\nmin_connections = 8\nmax_connections = 4\n",
        );
        assert!(ConfigLoader::new(dir.path()).is_err());
    }
}
