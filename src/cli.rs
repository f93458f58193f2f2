use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// Status update composer for the terminal.
/// Defaults are read from ~/.sup/config.json or a path passed via --config.
#[derive(Parser)]
#[command(name = "sup", version, about = "START / PAUSE / STOP status update composer")]
pub struct Cli {
    /// Path to the JSON config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}
