use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// A star rating, always in 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Build a rating, rejecting anything outside 1-5 (0 means "not rated
    /// yet" in the review form and must never reach a stored review).
    #[track_caller]
    pub fn new(value: u8) -> CoreErrorResult<Self> {
        if (1..=5).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CoreError::InvalidRating {
                value,
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }

    /// Force a value into range. For trusted constants (seed data); user
    /// input goes through [`Rating::new`].
    pub fn clamped(value: u8) -> Self {
        Self(value.clamp(1, 5))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = CoreError;

    fn try_from(value: u8) -> CoreErrorResult<Self> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
