use clap::Subcommand;

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Sign in as a role with its directory email
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// One of: admin, employee, user
        #[arg(long)]
        role: String,
    },
    /// Create a fresh user account
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },
    /// Sign out and drop the persisted session
    Logout,
    /// Show the current identity
    Whoami,
    /// Report a new location for the current identity
    Locate {
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lng: f64,
        #[arg(long)]
        address: String,
    },
}
