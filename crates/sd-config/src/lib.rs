mod config;
mod error;
mod log_level;
mod logging_config;
mod session_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;

const DEFAULT_SESSION_FILE: &str = "session.json";
const DEFAULT_VERIFY_TIMEOUT_SECS: u64 = 5;
const MIN_VERIFY_TIMEOUT_SECS: u64 = 1;
const MAX_VERIFY_TIMEOUT_SECS: u64 = 60;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
