use clap::Subcommand;

#[derive(Subcommand)]
pub enum EmployeeCommands {
    /// List the roster, optionally filtered
    List {
        /// Substring to search names, departments and emails
        #[arg(long)]
        query: Option<String>,
        /// One of: available, on-route, busy, offline
        #[arg(long)]
        status: Option<String>,
    },
    /// Show everyone on duty with their last reported position
    Map,
}
