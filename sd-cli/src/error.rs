use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Not signed in. Run `sd auth login` or `sd auth register` first")]
    SignedOut,

    #[error("This area is restricted to: {allowed}. Taking you back to your dashboard")]
    Forbidden { allowed: String },

    #[error("Ticket {id} is not ready for review")]
    NotReviewable { id: String },

    #[error("Failed to initialize logger: {message}")]
    Logger { message: String },

    #[error(transparent)]
    Core(#[from] sd_core::CoreError),

    #[error(transparent)]
    Auth(#[from] sd_auth::AuthError),

    #[error(transparent)]
    Catalog(#[from] sd_catalog::CatalogError),

    #[error(transparent)]
    Config(#[from] sd_config::ConfigError),

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
