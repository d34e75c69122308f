//! Employee roster backing the management and live-map views.

use crate::{CatalogError, Result as CatalogErrorResult};

use sd_core::{
    AvailabilityStatus, Department, Employee, EmployeeFilter, GeoPoint, ServiceRecord,
};

use std::panic::Location;

use error_location::ErrorLocation;

/// The in-memory employee roster.
pub struct EmployeeCatalog {
    employees: Vec<Employee>,
}

impl EmployeeCatalog {
    pub fn new(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    /// The demo roster.
    pub fn seeded() -> Self {
        let employees = vec![
            Employee {
                id: "emp-1".to_string(),
                name: "John Technician".to_string(),
                email: "john@company.com".to_string(),
                phone: "+1 (555) 123-4567".to_string(),
                department: Department::ItSupport,
                title: "Senior Technician".to_string(),
                status: AvailabilityStatus::Available,
                whereabouts: "Building A, Floor 2".to_string(),
                position: Some(GeoPoint::new(40.7128, -74.0060)),
                stats: ServiceRecord::new(247, 4.9, 12, 98),
                avatar: "👨‍🔧".to_string(),
                last_active: "2 min ago".to_string(),
                current_ticket: Some("TKT-2847".to_string()),
            },
            Employee {
                id: "emp-2".to_string(),
                name: "Sarah Wilson".to_string(),
                email: "sarah@company.com".to_string(),
                phone: "+1 (555) 234-5678".to_string(),
                department: Department::Maintenance,
                title: "Maintenance Specialist".to_string(),
                status: AvailabilityStatus::OnRoute,
                whereabouts: "En route to Building C".to_string(),
                position: Some(GeoPoint::new(40.7589, -73.9851)),
                stats: ServiceRecord::new(189, 4.8, 8, 95),
                avatar: "👩‍🔧".to_string(),
                last_active: "5 min ago".to_string(),
                current_ticket: Some("TKT-2846".to_string()),
            },
            Employee {
                id: "emp-3".to_string(),
                name: "Mike Johnson".to_string(),
                email: "mike@company.com".to_string(),
                phone: "+1 (555) 345-6789".to_string(),
                department: Department::Security,
                title: "Security Officer".to_string(),
                status: AvailabilityStatus::Busy,
                whereabouts: "Building B, Security Desk".to_string(),
                position: Some(GeoPoint::new(40.7505, -73.9934)),
                stats: ServiceRecord::new(156, 4.7, 15, 92),
                avatar: "👮‍♂️".to_string(),
                last_active: "1 min ago".to_string(),
                current_ticket: Some("TKT-2845".to_string()),
            },
            Employee {
                id: "emp-4".to_string(),
                name: "Lisa Chen".to_string(),
                email: "lisa@company.com".to_string(),
                phone: "+1 (555) 456-7890".to_string(),
                department: Department::Facilities,
                title: "Facilities Manager".to_string(),
                status: AvailabilityStatus::Offline,
                whereabouts: "Off Duty".to_string(),
                position: None,
                stats: ServiceRecord::new(134, 4.9, 10, 97),
                avatar: "👩‍💼".to_string(),
                last_active: "2 hours ago".to_string(),
                current_ticket: None,
            },
        ];

        Self::new(employees)
    }

    pub fn all(&self) -> &[Employee] {
        &self.employees
    }

    /// Visible subset for the roster view, in collection order.
    pub fn search(&self, filter: &EmployeeFilter) -> Vec<&Employee> {
        filter.apply(&self.employees)
    }

    pub fn get(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id == id)
    }

    #[track_caller]
    pub fn require(&self, id: &str) -> CatalogErrorResult<&Employee> {
        self.get(id).ok_or_else(|| CatalogError::UnknownEmployee {
            id: id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Everyone currently on duty, for the live map.
    pub fn on_duty(&self) -> Vec<&Employee> {
        self.employees
            .iter()
            .filter(|employee| employee.is_on_duty())
            .collect()
    }
}
