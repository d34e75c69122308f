use crate::{
    AvailabilityStatus, Department, Employee, EmployeeFilter, GeoPoint, ServiceRecord,
};

fn sample_employees() -> Vec<Employee> {
    vec![
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
    ]
}

#[test]
fn test_identity_law_returns_all_in_order() {
    let employees = sample_employees();
    let survivors = EmployeeFilter::default().apply(&employees);

    assert_eq!(survivors.len(), 2);
    assert_eq!(survivors[0].id, "emp-1");
    assert_eq!(survivors[1].id, "emp-4");
}

#[test]
fn test_query_searches_name_department_and_email() {
    let employees = sample_employees();

    assert_eq!(EmployeeFilter::new("lisa").apply(&employees).len(), 1);
    assert_eq!(EmployeeFilter::new("it support").apply(&employees).len(), 1);
    assert_eq!(
        EmployeeFilter::new("john@company.com").apply(&employees).len(),
        1
    );
}

#[test]
fn test_filter_is_conjunctive() {
    let employees = sample_employees();

    let filter = EmployeeFilter::new("lisa").with_status(AvailabilityStatus::Available);

    assert!(filter.apply(&employees).is_empty());
}

#[test]
fn test_status_facet_is_exact() {
    let employees = sample_employees();
    let filter = EmployeeFilter::default().with_status(AvailabilityStatus::Offline);

    let survivors = filter.apply(&employees);

    assert_eq!(survivors.len(), 1);
    assert_eq!(survivors[0].id, "emp-4");
}
