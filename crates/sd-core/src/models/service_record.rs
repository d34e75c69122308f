use serde::{Deserialize, Serialize};

/// Running performance counters for an employee.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub tickets_resolved: u32,
    /// Average review score, 1.0-5.0
    pub rating: f32,
    /// Average time to first response
    pub response_minutes: u32,
    /// Share of accepted tickets resolved, in percent
    pub completion_rate: u8,
}

impl ServiceRecord {
    pub fn new(
        tickets_resolved: u32,
        rating: f32,
        response_minutes: u32,
        completion_rate: u8,
    ) -> Self {
        Self {
            tickets_resolved,
            rating,
            response_minutes,
            completion_rate,
        }
    }
}
