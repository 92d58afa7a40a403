use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub data: DataConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let dataset_dir = env::var("APP_DATASET_DIR")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        let config = Self {
            environment,
            data: DataConfig { dataset_dir },
            telemetry: TelemetryConfig { log_level },
        };
        config.data.validate()?;
        Ok(config)
    }
}

/// Where the admissions dataset comes from.
#[derive(Debug, Clone, Default)]
pub struct DataConfig {
    /// Directory of CSV exports; the built-in reference dataset is used when absent.
    pub dataset_dir: Option<PathBuf>,
}

impl DataConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.dataset_dir {
            Some(path) if !path.is_dir() => {
                Err(ConfigError::DatasetDirNotFound { path: path.clone() })
            }
            _ => Ok(()),
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    DatasetDirNotFound { path: PathBuf },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::DatasetDirNotFound { path } => write!(
                f,
                "APP_DATASET_DIR must point to a directory ('{}' is not one)",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_DATASET_DIR");
        env::remove_var("APP_LOG_LEVEL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert!(config.data.dataset_dir.is_none());
        assert_eq!(config.telemetry.log_level, "warn");
    }

    #[test]
    fn blank_dataset_dir_is_ignored() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_DATASET_DIR", "   ");
        env::set_var("APP_ENV", "CI");
        let config = AppConfig::load().expect("config loads");
        assert!(config.data.dataset_dir.is_none());
        assert_eq!(config.environment, AppEnvironment::Test);
        reset_env();
    }

    #[test]
    fn rejects_missing_dataset_dir() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_DATASET_DIR", "/definitely/not/a/dataset/dir");
        match AppConfig::load() {
            Err(ConfigError::DatasetDirNotFound { path }) => {
                assert_eq!(path, PathBuf::from("/definitely/not/a/dataset/dir"));
            }
            other => panic!("expected missing dataset dir, got {other:?}"),
        }
        reset_env();
    }

    #[test]
    fn accepts_existing_dataset_dir() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let dir = env!("CARGO_MANIFEST_DIR");
        env::set_var("APP_DATASET_DIR", dir);
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.data.dataset_dir, Some(PathBuf::from(dir)));
        reset_env();
    }
}
