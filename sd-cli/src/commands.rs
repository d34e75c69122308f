use crate::{
    admin_commands::AdminCommands, auth_commands::AuthCommands,
    employee_commands::EmployeeCommands, review_commands::ReviewCommands,
    ticket_commands::TicketCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Session operations: sign in, sign up, sign out
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },

    /// Ticket operations
    Ticket {
        #[command(subcommand)]
        action: TicketCommands,
    },

    /// Employee roster operations (admin)
    Employee {
        #[command(subcommand)]
        action: EmployeeCommands,
    },

    /// Review operations
    Review {
        #[command(subcommand)]
        action: ReviewCommands,
    },

    /// Admin dashboard operations
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
}
