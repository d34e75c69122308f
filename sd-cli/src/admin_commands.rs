use clap::Subcommand;

#[derive(Subcommand)]
pub enum AdminCommands {
    /// Ticket snapshot and per-department workload
    Stats,
}
