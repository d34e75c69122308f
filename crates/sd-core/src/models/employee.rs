//! Employee entity - a member of the service roster.

use crate::{AvailabilityStatus, Department, GeoPoint, ServiceRecord};

use serde::{Deserialize, Serialize};

/// A field employee as shown on the roster and the live map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: Department,
    /// Job title (free text, e.g. "Senior Technician")
    pub title: String,
    pub status: AvailabilityStatus,
    /// Current place description (e.g. "Building A, Floor 2", "Off Duty")
    pub whereabouts: String,
    /// Last reported coordinates; absent while off duty
    pub position: Option<GeoPoint>,
    pub stats: ServiceRecord,
    pub avatar: String,
    /// Relative last-seen text (e.g. "2 min ago")
    pub last_active: String,
    /// Ticket currently being worked, if any
    pub current_ticket: Option<String>,
}

impl Employee {
    pub fn is_on_duty(&self) -> bool {
        self.status != AvailabilityStatus::Offline
    }
}
