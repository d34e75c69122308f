//! Ticket entity - a single service request.

use crate::{Department, TicketPriority, TicketStatus};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A service request as shown in the ticket list and tracking views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Human-facing ticket number (e.g., "TKT-2847")
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub category: Department,
    /// Where the problem is (free text, e.g. "Building A, Floor 2")
    pub location: String,
    /// Name of the assigned technician, if any
    pub assignee: Option<String>,
    /// Rough time-to-resolution text shown to the requester
    pub estimate: Option<String>,
    /// Resolved tickets unlock the review button
    pub can_review: bool,
    pub created_at: DateTime<Utc>,
}

impl Ticket {
    /// Create a freshly submitted ticket: pending, unassigned, not reviewable.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: Department,
        priority: TicketPriority,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            status: TicketStatus::Pending,
            priority,
            category,
            location: location.into(),
            assignee: None,
            estimate: None,
            can_review: false,
            created_at: Utc::now(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.status != TicketStatus::Resolved
    }
}
