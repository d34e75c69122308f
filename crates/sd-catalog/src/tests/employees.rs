use crate::EmployeeCatalog;

use sd_core::{AvailabilityStatus, EmployeeFilter};

#[test]
fn given_seeded_roster_when_listed_then_four_employees() {
    let catalog = EmployeeCatalog::seeded();

    assert_eq!(catalog.all().len(), 4);
    assert_eq!(catalog.all()[0].id, "emp-1");
}

#[test]
fn given_seeded_roster_when_searched_by_department_text_then_match() {
    let catalog = EmployeeCatalog::seeded();

    let survivors = catalog.search(&EmployeeFilter::new("maintenance"));

    assert_eq!(survivors.len(), 1);
    assert_eq!(survivors[0].name, "Sarah Wilson");
}

#[test]
fn given_seeded_roster_when_filtered_offline_then_only_lisa() {
    let catalog = EmployeeCatalog::seeded();
    let filter = EmployeeFilter::default().with_status(AvailabilityStatus::Offline);

    let survivors = catalog.search(&filter);

    assert_eq!(survivors.len(), 1);
    assert_eq!(survivors[0].name, "Lisa Chen");
    assert!(survivors[0].position.is_none());
}

#[test]
fn given_seeded_roster_when_on_duty_then_offline_excluded() {
    let catalog = EmployeeCatalog::seeded();

    let on_duty = catalog.on_duty();

    assert_eq!(on_duty.len(), 3);
    assert!(on_duty.iter().all(|e| e.status != AvailabilityStatus::Offline));
}

#[test]
fn given_known_id_when_required_then_employee() {
    let catalog = EmployeeCatalog::seeded();

    let employee = catalog.require("emp-3").unwrap();

    assert_eq!(employee.name, "Mike Johnson");
    assert_eq!(employee.current_ticket.as_deref(), Some("TKT-2845"));
}
