use crate::{Sender, TicketCatalog, TicketTrack, TimelineStage};

#[test]
fn given_in_progress_ticket_when_tracked_then_three_stages_complete() {
    let catalog = TicketCatalog::seeded();
    let ticket = catalog.require("TKT-2846").unwrap();

    let track = TicketTrack::for_ticket(ticket);

    let completed: Vec<bool> = track.timeline().iter().map(|s| s.completed).collect();
    assert_eq!(completed, [true, true, true, false]);
    assert_eq!(track.timeline()[1].description, "Assigned to Jane Smith");
    assert_eq!(track.timeline()[3].stage, TimelineStage::Completed);
}

#[test]
fn given_pending_ticket_when_tracked_then_only_creation_and_assignment_done() {
    let catalog = TicketCatalog::seeded();
    let ticket = catalog.require("TKT-2847").unwrap();

    let track = TicketTrack::for_ticket(ticket);

    let completed: Vec<bool> = track.timeline().iter().map(|s| s.completed).collect();
    assert_eq!(completed, [true, true, false, false]);
    // Work has not started, so there is no thread yet
    assert!(track.thread().is_empty());
}

#[test]
fn given_resolved_ticket_when_tracked_then_all_stages_complete() {
    let catalog = TicketCatalog::seeded();
    let ticket = catalog.require("TKT-2845").unwrap();

    let track = TicketTrack::for_ticket(ticket);

    assert!(track.timeline().iter().all(|s| s.completed));
}

#[test]
fn given_started_ticket_when_tracked_then_thread_seeded() {
    let catalog = TicketCatalog::seeded();
    let ticket = catalog.require("TKT-2846").unwrap();

    let track = TicketTrack::for_ticket(ticket);

    assert_eq!(track.thread().len(), 4);
    assert_eq!(track.thread()[0].sender, Sender::Employee);
    assert_eq!(track.thread()[3].sender, Sender::System);
    assert!(track.thread()[3].text.contains("Jane Smith"));
}

#[test]
fn given_posted_message_when_thread_read_then_canned_reply_follows() {
    let catalog = TicketCatalog::seeded();
    let ticket = catalog.require("TKT-2846").unwrap();
    let mut track = TicketTrack::for_ticket(ticket);
    let before = track.thread().len();

    track.post("Any update on the noise?");

    let thread = track.thread();
    assert_eq!(thread.len(), before + 2);
    assert_eq!(thread[before].sender, Sender::User);
    assert_eq!(thread[before].text, "Any update on the noise?");
    assert_eq!(thread[before + 1].sender, Sender::Employee);
}

#[test]
fn given_messages_when_ids_inspected_then_sequential() {
    let catalog = TicketCatalog::seeded();
    let ticket = catalog.require("TKT-2846").unwrap();
    let mut track = TicketTrack::for_ticket(ticket);

    track.post("Hello");

    let ids: Vec<u32> = track.thread().iter().map(|m| m.id).collect();
    assert_eq!(ids, [1, 2, 3, 4, 5, 6]);
}
