use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Aspect of service a reviewer can call out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReviewCategory {
    Professionalism,
    Communication,
    Timeliness,
    ProblemSolving,
    Expertise,
}

impl ReviewCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Professionalism => "professionalism",
            Self::Communication => "communication",
            Self::Timeliness => "timeliness",
            Self::ProblemSolving => "problem-solving",
            Self::Expertise => "expertise",
        }
    }
}

impl FromStr for ReviewCategory {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "professionalism" => Ok(Self::Professionalism),
            "communication" => Ok(Self::Communication),
            "timeliness" => Ok(Self::Timeliness),
            "problem-solving" => Ok(Self::ProblemSolving),
            "expertise" => Ok(Self::Expertise),
            _ => Err(CoreError::InvalidReviewCategory {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ReviewCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
