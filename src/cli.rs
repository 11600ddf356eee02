use clap::Parser;

use crate::cmd::Commands;
use crate::fields::Filter;

/// Single-session task manager.
/// Running without a subcommand opens the editor UI.
#[derive(Parser)]
#[command(name = "tm", version, about = "Single-session task manager TUI")]
pub struct Cli {
    /// Initial view filter for the session.
    #[arg(long, value_enum, default_value_t = Filter::All)]
    pub filter: Filter,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
