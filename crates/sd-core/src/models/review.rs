//! Review entity - a requester's rating of a completed ticket.

use crate::{Department, Rating, ReviewCategory, ReviewStatus};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One rating left against an employee for a resolved ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Human-facing review number (e.g., "REV-001")
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    pub employee_avatar: String,
    pub department: Department,
    pub ticket_id: String,
    pub rating: Rating,
    pub comment: String,
    pub categories: Vec<ReviewCategory>,
    pub reviewer_name: String,
    pub submitted_at: DateTime<Utc>,
    pub status: ReviewStatus,
}
