use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Credential verification timed out after {timeout_secs}s {location}")]
    VerifyTimeout {
        timeout_secs: u64,
        location: ErrorLocation,
    },

    #[error("Session slot failure: {source} {location}")]
    Slot {
        #[source]
        source: sd_session::SessionError,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn invalid_credentials() -> Self {
        AuthError::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn slot(source: sd_session::SessionError) -> Self {
        AuthError::Slot {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
