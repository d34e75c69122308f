use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Service category a ticket is routed to and an employee belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Department {
    ItSupport,
    Maintenance,
    Facilities,
    Security,
    Cleaning,
    Equipment,
    Other,
}

impl Department {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ItSupport => "it-support",
            Self::Maintenance => "maintenance",
            Self::Facilities => "facilities",
            Self::Security => "security",
            Self::Cleaning => "cleaning",
            Self::Equipment => "equipment",
            Self::Other => "other",
        }
    }

    /// Human-facing label, as shown in ticket forms and rosters.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ItSupport => "IT Support",
            Self::Maintenance => "Maintenance",
            Self::Facilities => "Facilities",
            Self::Security => "Security",
            Self::Cleaning => "Cleaning",
            Self::Equipment => "Equipment",
            Self::Other => "Other",
        }
    }

    /// All departments tickets can be filed under, in form order.
    pub fn all() -> [Department; 7] {
        [
            Self::ItSupport,
            Self::Maintenance,
            Self::Facilities,
            Self::Security,
            Self::Cleaning,
            Self::Equipment,
            Self::Other,
        ]
    }
}

impl FromStr for Department {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "it-support" => Ok(Self::ItSupport),
            "maintenance" => Ok(Self::Maintenance),
            "facilities" => Ok(Self::Facilities),
            "security" => Ok(Self::Security),
            "cleaning" => Ok(Self::Cleaning),
            "equipment" => Ok(Self::Equipment),
            "other" => Ok(Self::Other),
            _ => Err(CoreError::InvalidDepartment {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
