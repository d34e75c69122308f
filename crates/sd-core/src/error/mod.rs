use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid ticket status: {value} {location}")]
    InvalidTicketStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid ticket priority: {value} {location}")]
    InvalidTicketPriority {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid department: {value} {location}")]
    InvalidDepartment {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid availability status: {value} {location}")]
    InvalidAvailabilityStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid review category: {value} {location}")]
    InvalidReviewCategory {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid review status: {value} {location}")]
    InvalidReviewStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid rating: {value} (must be 1-5) {location}")]
    InvalidRating { value: u8, location: ErrorLocation },
}

pub type Result<T> = StdResult<T, CoreError>;
