//! Aggregates behind the admin dashboard.

use crate::TicketCatalog;

use sd_core::{Department, TicketPriority, TicketStatus};

use serde::Serialize;

/// Per-department workload row, as reported by the service platform.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentLoad {
    pub department: Department,
    pub tickets: u32,
    pub resolved: u32,
    pub pending: u32,
    pub employees: u32,
}

impl DepartmentLoad {
    /// The demo workload table.
    pub fn seeded() -> Vec<DepartmentLoad> {
        vec![
            DepartmentLoad {
                department: Department::ItSupport,
                tickets: 3245,
                resolved: 3180,
                pending: 65,
                employees: 12,
            },
            DepartmentLoad {
                department: Department::Maintenance,
                tickets: 2847,
                resolved: 2790,
                pending: 57,
                employees: 8,
            },
            DepartmentLoad {
                department: Department::Facilities,
                tickets: 2156,
                resolved: 2098,
                pending: 58,
                employees: 6,
            },
            DepartmentLoad {
                department: Department::Security,
                tickets: 1892,
                resolved: 1845,
                pending: 47,
                employees: 4,
            },
            DepartmentLoad {
                department: Department::Cleaning,
                tickets: 1634,
                resolved: 1598,
                pending: 36,
                employees: 8,
            },
        ]
    }
}

/// Status/priority breakdown of the live ticket collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TicketSnapshot {
    pub total: u32,
    pub pending: u32,
    pub in_progress: u32,
    pub resolved: u32,
    pub critical: u32,
    /// Tickets at high or critical priority
    pub urgent: u32,
}

impl TicketSnapshot {
    pub fn measure(catalog: &TicketCatalog) -> Self {
        let mut snapshot = Self {
            total: 0,
            pending: 0,
            in_progress: 0,
            resolved: 0,
            critical: 0,
            urgent: 0,
        };

        for ticket in catalog.all() {
            snapshot.total += 1;
            match ticket.status {
                TicketStatus::Pending => snapshot.pending += 1,
                TicketStatus::InProgress => snapshot.in_progress += 1,
                TicketStatus::Resolved => snapshot.resolved += 1,
                TicketStatus::Critical => snapshot.critical += 1,
            }
            if matches!(
                ticket.priority,
                TicketPriority::High | TicketPriority::Critical
            ) {
                snapshot.urgent += 1;
            }
        }

        snapshot
    }
}
