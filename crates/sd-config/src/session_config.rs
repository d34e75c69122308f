use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SESSION_FILE, DEFAULT_VERIFY_TIMEOUT_SECS,
    MAX_VERIFY_TIMEOUT_SECS, MIN_VERIFY_TIMEOUT_SECS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Session record file, relative to the config directory
    pub file: String,
    /// Upper bound on one credential verification round trip
    pub verify_timeout_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            file: String::from(DEFAULT_SESSION_FILE),
            verify_timeout_secs: DEFAULT_VERIFY_TIMEOUT_SECS,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.file.trim().is_empty() {
            return Err(ConfigError::session("session.file must not be empty"));
        }

        // Keep the record inside the config directory
        let file = std::path::Path::new(&self.file);
        if file.is_absolute() || self.file.contains("..") {
            return Err(ConfigError::session(
                "session.file must be relative and cannot contain '..'",
            ));
        }

        if self.verify_timeout_secs < MIN_VERIFY_TIMEOUT_SECS
            || self.verify_timeout_secs > MAX_VERIFY_TIMEOUT_SECS
        {
            return Err(ConfigError::session(format!(
                "session.verify_timeout_secs must be {}-{}, got {}",
                MIN_VERIFY_TIMEOUT_SECS, MAX_VERIFY_TIMEOUT_SECS, self.verify_timeout_secs
            )));
        }

        Ok(())
    }
}
