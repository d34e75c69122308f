use crate::{ConfigError, ConfigErrorResult, LoggingConfig, SessionConfig};

use std::path::PathBuf;

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub session: SessionConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for SD_CONFIG_DIR env var, else use ./.sd/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply SD_* environment variable overrides
    /// 5. Check for legacy ~/.sd/config.toml and warn
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        Self::warn_on_legacy_config(&config_dir);

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: SD_CONFIG_DIR env var > ./.sd/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("SD_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".sd"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.session.validate()?;
        Ok(())
    }

    /// Absolute path of the persisted session record.
    pub fn session_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.session.file))
    }

    /// Absolute path of the log file, when file logging is configured.
    pub fn log_file_path(&self) -> Result<Option<PathBuf>, ConfigError> {
        let Some(file) = &self.logging.file else {
            return Ok(None);
        };
        let config_dir = Self::config_dir()?;
        Ok(Some(config_dir.join(file)))
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  logging: {} (colored: {})",
            self.logging.level, self.logging.colored
        );
        info!(
            "  session: file={}, verify_timeout={}s",
            self.session.file, self.session.verify_timeout_secs
        );
    }

    fn apply_env_overrides(&mut self) {
        // Logging
        Self::apply_env_parse("SD_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("SD_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("SD_LOG_FILE", &mut self.logging.file);

        // Session
        Self::apply_env_string("SD_SESSION_FILE", &mut self.session.file);
        Self::apply_env_parse(
            "SD_VERIFY_TIMEOUT_SECS",
            &mut self.session.verify_timeout_secs,
        );
    }

    /// Earlier builds read ~/.sd/config.toml; that file is no longer picked
    /// up unless SD_CONFIG_DIR points at it.
    fn warn_on_legacy_config(config_dir: &PathBuf) {
        let Some(home) = dirs::home_dir() else {
            return;
        };

        let legacy = home.join(".sd/config.toml");
        if legacy.exists() && legacy.parent() != Some(config_dir.as_path()) {
            warn!(
                "Ignoring legacy config at {}; set SD_CONFIG_DIR to use it",
                legacy.display()
            );
        }
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
