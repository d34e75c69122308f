//! sd - Service Desk terminal client
//!
//! Signs in against the demo staff directory and works the seeded ticket,
//! roster and review collections.
//!
//! # Examples
//!
//! ```bash
//! # Sign in with a directory identity
//! sd auth login --email admin@company.com --password admin123 --role admin
//!
//! # List open tickets matching a search
//! sd ticket list --query printer --status pending --pretty
//!
//! # File a ticket
//! sd ticket create --title "Projector flickering" \
//!     --description "Drops signal every few minutes" \
//!     --category equipment --location "Building B, Room 12"
//! ```

mod admin_commands;
mod app;
mod auth_commands;
mod cli;
mod commands;
mod employee_commands;
mod error;
mod logger;
mod review_commands;
mod ticket_commands;

#[cfg(test)]
mod tests;

use crate::{
    admin_commands::AdminCommands, app::App, auth_commands::AuthCommands, cli::Cli,
    commands::Commands, employee_commands::EmployeeCommands, review_commands::ReviewCommands,
    ticket_commands::TicketCommands,
};

use std::process::ExitCode;

use clap::Parser;
use log::error;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match sd_config::Config::load().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let log_file = match config.log_file_path() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = logger::initialize(config.logging.level, log_file, config.logging.colored) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    config.log_summary();

    let mut app = match App::bootstrap(&config) {
        Ok(app) => app,
        Err(e) => {
            error!("Startup failed: {e}");
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Commands::Auth { action } => match action {
            AuthCommands::Login {
                email,
                password,
                role,
            } => app.login(&email, &password, &role).await,
            AuthCommands::Register {
                name,
                email,
                password,
                confirm_password,
            } => app.register(&name, &email, &password, &confirm_password).await,
            AuthCommands::Logout => app.logout(),
            AuthCommands::Whoami => app.whoami(),
            AuthCommands::Locate { lat, lng, address } => app.locate(lat, lng, &address),
        },

        Commands::Ticket { action } => match action {
            TicketCommands::List { query, status } => {
                app.ticket_list(query.as_deref(), status.as_deref())
            }
            TicketCommands::Show { id } => app.ticket_show(&id),
            TicketCommands::Create {
                title,
                description,
                category,
                priority,
                location,
            } => app.ticket_create(
                &title,
                &description,
                &category,
                priority.as_deref(),
                &location,
            ),
            TicketCommands::Track { id } => app.ticket_track(&id),
            TicketCommands::Say { id, message } => app.ticket_say(&id, &message),
        },

        Commands::Employee { action } => match action {
            EmployeeCommands::List { query, status } => {
                app.employee_list(query.as_deref(), status.as_deref())
            }
            EmployeeCommands::Map => app.employee_map(),
        },

        Commands::Review { action } => match action {
            ReviewCommands::List {
                query,
                rating,
                department,
            } => app.review_list(query.as_deref(), rating, department.as_deref()),
            ReviewCommands::Submit {
                employee,
                ticket,
                rating,
                comment,
                category,
            } => app.review_submit(&employee, &ticket, rating, &comment, &category),
            ReviewCommands::Summary => app.review_summary(),
        },

        Commands::Admin { action } => match action {
            AdminCommands::Stats => app.admin_stats(),
        },
    };

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
