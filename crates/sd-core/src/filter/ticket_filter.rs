use crate::{TextQuery, Ticket, TicketStatus};

/// Criteria of the ticket list view: free text over title, description and
/// ticket number, plus an exact status facet.
#[derive(Debug, Clone, Default)]
pub struct TicketFilter {
    pub query: TextQuery,
    pub status: Option<TicketStatus>,
}

impl TicketFilter {
    pub fn new(query: impl AsRef<str>) -> Self {
        Self {
            query: TextQuery::new(query),
            status: None,
        }
    }

    pub fn with_status(mut self, status: TicketStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn matches(&self, ticket: &Ticket) -> bool {
        let matches_search =
            self.query
                .matches_any(&[&ticket.title, &ticket.description, &ticket.id]);
        let matches_status = self.status.is_none_or(|status| ticket.status == status);
        matches_search && matches_status
    }

    /// Survivors in original collection order.
    pub fn apply<'a>(&self, tickets: &'a [Ticket]) -> Vec<&'a Ticket> {
        tickets.iter().filter(|ticket| self.matches(ticket)).collect()
    }
}
