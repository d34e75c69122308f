use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("No ticket with id {id} {location}")]
    UnknownTicket { id: String, location: ErrorLocation },

    #[error("No employee with id {id} {location}")]
    UnknownEmployee { id: String, location: ErrorLocation },

    #[error("Required field missing: {field} {location}")]
    MissingField {
        field: &'static str,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CatalogError>;
