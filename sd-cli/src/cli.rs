use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "sd")]
#[command(about = "Service desk terminal client")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
