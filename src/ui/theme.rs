//! Color theme constants.

use ratatui::style::Color;

/// Heading text
pub const COLOR_HEADER: Color = Color::White;

/// Column header labels
pub const COLOR_ACCENT: Color = Color::LightBlue;

/// The header of the active sort column
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Rules, hints and other secondary text
pub const COLOR_DIM: Color = Color::DarkGray;

/// The remove control and the fetch error line
pub const COLOR_ERROR: Color = Color::Red;
