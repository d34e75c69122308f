use crate::{Department, Ticket, TicketFilter, TicketPriority, TicketStatus};

fn sample_tickets() -> Vec<Ticket> {
    let mut printer = Ticket::new(
        "TKT-2847",
        "Printer not working in office 204",
        "The HP LaserJet printer is showing paper jam error.",
        Department::ItSupport,
        TicketPriority::Medium,
        "Building A, Floor 2",
    );
    printer.status = TicketStatus::Pending;

    let mut ac_unit = Ticket::new(
        "TKT-2846",
        "AC unit making strange noise",
        "Air conditioning unit in conference room B is rattling.",
        Department::Maintenance,
        TicketPriority::High,
        "Building B, Floor 1",
    );
    ac_unit.status = TicketStatus::InProgress;

    let mut wifi = Ticket::new(
        "TKT-2845",
        "WiFi connection issues",
        "Internet connectivity is intermittent in marketing.",
        Department::ItSupport,
        TicketPriority::Low,
        "Building A, Floor 3",
    );
    wifi.status = TicketStatus::Resolved;

    vec![printer, ac_unit, wifi]
}

#[test]
fn test_identity_law_returns_all_in_order() {
    let tickets = sample_tickets();
    let filter = TicketFilter::default();

    let survivors = filter.apply(&tickets);

    assert_eq!(survivors.len(), tickets.len());
    let ids: Vec<&str> = survivors.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["TKT-2847", "TKT-2846", "TKT-2845"]);
}

#[test]
fn test_query_searches_title_description_and_id() {
    let tickets = sample_tickets();

    assert_eq!(TicketFilter::new("printer").apply(&tickets).len(), 1);
    assert_eq!(TicketFilter::new("rattling").apply(&tickets).len(), 1);
    assert_eq!(TicketFilter::new("tkt-2845").apply(&tickets).len(), 1);
}

#[test]
fn test_filter_is_conjunctive() {
    let tickets = sample_tickets();

    // Query matches the printer ticket, but the facet does not
    let filter = TicketFilter::new("printer").with_status(TicketStatus::Resolved);

    assert!(filter.apply(&tickets).is_empty());
}

#[test]
fn test_status_facet_is_exact() {
    let tickets = sample_tickets();
    let filter = TicketFilter::default().with_status(TicketStatus::InProgress);

    let survivors = filter.apply(&tickets);

    assert_eq!(survivors.len(), 1);
    assert_eq!(survivors[0].id, "TKT-2846");
}

#[test]
fn test_no_match_returns_empty() {
    let tickets = sample_tickets();

    assert!(TicketFilter::new("elevator").apply(&tickets).is_empty());
}
