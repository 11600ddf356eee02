//! Color constants for the terminal user interface.

use ratatui::style::Color;

// Native Color::DarkGray dims completed rows

/// Border of the focused zone
pub const GOLD: Color = Color::Rgb(255, 215, 0);
/// Status cell of completed tasks
pub const GREEN: Color = Color::Rgb(0, 160, 0);
