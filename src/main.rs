//! # TM - Single-Session Task Manager
//!
//! An in-memory task list editor with a terminal user interface (TUI).
//! Tasks live for exactly one session: nothing is read from or written to
//! disk, and closing the editor discards the list.
//!
//! ## Key Features
//!
//! - **Rapid Capture**: Type a title (and optionally a description), press
//!   Enter, done
//! - **Two-State Lifecycle**: Tasks are `Pending` until completed; completion
//!   is one-way and deletion is immediate
//! - **Status Filtering**: Flip the view between All, Completed, and Pending
//!   without touching the underlying list
//! - **No Ceremony**: No files, no configuration, no accounts; the session is
//!   the whole world
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the editor
//! tm
//!
//! # Start with only pending tasks visible
//! tm --filter pending
//!
//! # Generate shell completions
//! tm completions zsh
//! ```
//!
//! ## Installation
//!
//! ```bash
//! git clone <repository-url>
//! cd tm
//! cargo install --path .
//! ```
//!
//! ## Key Bindings
//!
//! - `Tab` / `Shift+Tab` - Move focus between the input fields, the Show
//!   selector, and the task table
//! - `Enter` (in a field) - Add the task; blank titles are ignored
//! - `Left` / `Right` (on the selector) - Cycle All / Completed / Pending
//! - `c` / `d` (on the table) - Complete / delete the selected task
//! - `h` (on the table) - Help; `Esc` - back out, then quit
//!
//! Everything is ephemeral by design. If you need your tasks tomorrow,
//! write them somewhere else tonight.

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod fields;
pub mod store;
pub mod task;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod input;
    pub mod run;
}

use cli::Cli;
use cmd::{cmd_completions, cmd_ui, Commands};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => cmd_completions(shell),
        None => cmd_ui(cli.filter),
    }
}
