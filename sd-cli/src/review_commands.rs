use clap::Subcommand;

#[derive(Subcommand)]
pub enum ReviewCommands {
    /// List reviews, optionally filtered
    List {
        /// Substring to search employee names, comments and ticket numbers
        #[arg(long)]
        query: Option<String>,
        /// Exact star rating, 1-5
        #[arg(long)]
        rating: Option<u8>,
        /// One of: it-support, maintenance, facilities, security, cleaning, equipment, other
        #[arg(long)]
        department: Option<String>,
    },
    /// Rate the employee who resolved a ticket
    Submit {
        /// Employee id (e.g. emp-1)
        #[arg(long)]
        employee: String,
        /// Ticket number (e.g. TKT-2845)
        #[arg(long)]
        ticket: String,
        /// Star rating, 1-5
        #[arg(long)]
        rating: u8,
        #[arg(long, default_value = "")]
        comment: String,
        /// Repeatable; one of: professionalism, communication, timeliness,
        /// problem-solving, expertise
        #[arg(long)]
        category: Vec<String>,
    },
    /// Per-employee and overall review aggregates
    Summary,
}
