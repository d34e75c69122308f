use clap::Subcommand;

#[derive(Subcommand)]
pub enum TicketCommands {
    /// List tickets, optionally filtered
    List {
        /// Substring to search titles, descriptions and ticket numbers
        #[arg(long)]
        query: Option<String>,
        /// One of: pending, in-progress, resolved, critical
        #[arg(long)]
        status: Option<String>,
    },
    /// Show one ticket
    Show {
        /// Ticket number (e.g. TKT-2847)
        id: String,
    },
    /// File a new ticket
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// One of: it-support, maintenance, facilities, security, cleaning, equipment, other
        #[arg(long)]
        category: String,
        /// One of: low, medium, high, critical (defaults to medium)
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        location: String,
    },
    /// Show a ticket's timeline and message thread
    Track {
        /// Ticket number (e.g. TKT-2847)
        id: String,
    },
    /// Send a message on a ticket's thread
    Say {
        /// Ticket number (e.g. TKT-2847)
        id: String,
        message: String,
    },
}
