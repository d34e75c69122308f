use crate::{Department, Ticket, TicketPriority, TicketStatus};

#[test]
fn test_ticket_new() {
    let ticket = Ticket::new(
        "TKT-3001",
        "Projector flickering",
        "Conference room projector drops signal every few minutes.",
        Department::Equipment,
        TicketPriority::Medium,
        "Building B, Room 12",
    );

    assert_eq!(ticket.id, "TKT-3001");
    assert_eq!(ticket.status, TicketStatus::Pending);
    assert_eq!(ticket.priority, TicketPriority::Medium);
    assert_eq!(ticket.assignee, None);
    assert!(!ticket.can_review);
    assert!(ticket.is_open());
}

#[test]
fn test_ticket_is_open() {
    let mut ticket = Ticket::new(
        "TKT-3002",
        "Test",
        "Test",
        Department::Other,
        TicketPriority::Low,
        "Lobby",
    );

    assert!(ticket.is_open());

    ticket.status = TicketStatus::Resolved;
    assert!(!ticket.is_open());
}
