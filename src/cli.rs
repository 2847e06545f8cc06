use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// Role-aware task, ticket and notification tracker.
/// Collections reseed on every run; only the login session persists,
/// as a JSON slot under the data directory.
#[derive(Parser)]
#[command(name = "wd", version, about = "Internal task, ticket and notification tracker")]
pub struct Cli {
    /// Data directory holding the session file. Defaults to ~/.workdesk.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}
