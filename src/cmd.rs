//! Command implementations for the CLI interface.
//!
//! The editor UI is the default command; the only subcommand generates
//! shell completion scripts.

use clap::Subcommand;
use clap_complete::{generate, Shell};

use crate::fields::Filter;
use crate::tui::run::run_tui;

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completion scripts.
    Completions {
        /// Target shell: bash | zsh | fish | powershell | elvish.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Launch the interactive editor UI.
pub fn cmd_ui(filter: Filter) {
    if let Err(e) = run_tui(filter) {
        eprintln!("UI error: {e}");
        std::process::exit(1);
    }
}

/// Print a completion script for the given shell to stdout.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;

    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}
