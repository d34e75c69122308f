//! Ticket collection backing the list, tracking and submission views.

use crate::seed::seed_time;
use crate::{CatalogError, Result as CatalogErrorResult};

use sd_core::{Department, Ticket, TicketFilter, TicketPriority, TicketStatus};

use std::panic::Location;

use error_location::ErrorLocation;
use log::info;

/// Input of the "new ticket" form.
///
/// Title, description, category and location are required; priority
/// pre-selects medium like the form does. Attachments are out of scope.
#[derive(Debug, Clone)]
pub struct NewTicket {
    pub title: String,
    pub description: String,
    pub category: Department,
    pub priority: TicketPriority,
    pub location: String,
}

impl NewTicket {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: Department,
        location: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category,
            priority: TicketPriority::default(),
            location: location.into(),
        }
    }

    pub fn with_priority(mut self, priority: TicketPriority) -> Self {
        self.priority = priority;
        self
    }

    #[track_caller]
    fn validate(&self) -> CatalogErrorResult<()> {
        let missing = if self.title.trim().is_empty() {
            Some("title")
        } else if self.description.trim().is_empty() {
            Some("description")
        } else if self.location.trim().is_empty() {
            Some("location")
        } else {
            None
        };

        match missing {
            Some(field) => Err(CatalogError::MissingField {
                field,
                location: ErrorLocation::from(Location::caller()),
            }),
            None => Ok(()),
        }
    }
}

/// The in-memory ticket collection. Lives for the life of the process;
/// submissions land here and nowhere else.
pub struct TicketCatalog {
    tickets: Vec<Ticket>,
}

impl TicketCatalog {
    pub fn new(tickets: Vec<Ticket>) -> Self {
        Self { tickets }
    }

    /// The demo data set, newest ticket first.
    pub fn seeded() -> Self {
        let tickets = vec![
            Ticket {
                id: "TKT-2847".to_string(),
                title: "Printer not working in office 204".to_string(),
                description: "The HP LaserJet printer is showing paper jam error but there is no paper stuck.".to_string(),
                status: TicketStatus::Pending,
                priority: TicketPriority::Medium,
                category: Department::ItSupport,
                location: "Building A, Floor 2".to_string(),
                assignee: Some("John Doe".to_string()),
                estimate: Some("2 hours".to_string()),
                can_review: false,
                created_at: seed_time("2025-01-02T10:30:00Z"),
            },
            Ticket {
                id: "TKT-2846".to_string(),
                title: "AC unit making strange noise".to_string(),
                description: "Air conditioning unit in conference room B is making loud rattling sounds.".to_string(),
                status: TicketStatus::InProgress,
                priority: TicketPriority::High,
                category: Department::Maintenance,
                location: "Building B, Floor 1".to_string(),
                assignee: Some("Jane Smith".to_string()),
                estimate: Some("4 hours".to_string()),
                can_review: false,
                created_at: seed_time("2025-01-02T09:15:00Z"),
            },
            Ticket {
                id: "TKT-2845".to_string(),
                title: "WiFi connection issues".to_string(),
                description: "Internet connectivity is intermittent in the marketing department.".to_string(),
                status: TicketStatus::Resolved,
                priority: TicketPriority::Low,
                category: Department::ItSupport,
                location: "Building A, Floor 3".to_string(),
                assignee: Some("Mike Johnson".to_string()),
                estimate: Some("Completed".to_string()),
                can_review: true,
                created_at: seed_time("2025-01-01T14:20:00Z"),
            },
            Ticket {
                id: "TKT-2844".to_string(),
                title: "Broken window in lobby".to_string(),
                description: "Glass window near the main entrance has a crack and needs immediate attention.".to_string(),
                status: TicketStatus::Critical,
                priority: TicketPriority::Critical,
                category: Department::Facilities,
                location: "Building A, Lobby".to_string(),
                assignee: Some("Sarah Wilson".to_string()),
                estimate: Some("6 hours".to_string()),
                can_review: false,
                created_at: seed_time("2025-01-01T08:45:00Z"),
            },
        ];

        Self::new(tickets)
    }

    pub fn all(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Visible subset for the list view, in collection order.
    pub fn search(&self, filter: &TicketFilter) -> Vec<&Ticket> {
        filter.apply(&self.tickets)
    }

    pub fn get(&self, id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|ticket| ticket.id == id)
    }

    #[track_caller]
    pub fn require(&self, id: &str) -> CatalogErrorResult<&Ticket> {
        self.get(id).ok_or_else(|| CatalogError::UnknownTicket {
            id: id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// File a new ticket: validate required fields, allocate the next
    /// ticket number, and prepend so the list stays newest-first.
    pub fn submit(&mut self, new_ticket: NewTicket) -> CatalogErrorResult<&Ticket> {
        new_ticket.validate()?;

        let id = format!("TKT-{}", self.next_number());
        let ticket = Ticket::new(
            id,
            new_ticket.title,
            new_ticket.description,
            new_ticket.category,
            new_ticket.priority,
            new_ticket.location,
        );

        info!("Submitted ticket {} ({})", ticket.id, ticket.category);
        self.tickets.insert(0, ticket);
        Ok(&self.tickets[0])
    }

    fn next_number(&self) -> u32 {
        self.tickets
            .iter()
            .filter_map(|ticket| ticket.id.strip_prefix("TKT-"))
            .filter_map(|suffix| suffix.parse::<u32>().ok())
            .max()
            .map_or(1, |max| max + 1)
    }
}
