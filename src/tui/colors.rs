//! Colour constants for the terminal user interface.

use ratatui::style::Color;

use crate::fields::StatusKind;

// These support branded views of the UI
// reflecting the selected update kind

/// Used for START
pub const DARK_GREEN: Color = Color::Rgb(0, 80, 0);
/// Used for PAUSE and focused borders
pub const GOLD: Color = Color::Rgb(255, 215, 0);
/// Used for STOP and the reset confirmation
pub const DARK_RED: Color = Color::Rgb(114, 0, 0);
/// Used for the paste dialog
pub const DARK_PURPLE: Color = Color::Rgb(86, 60, 92);

/// Accent colour for the selected update kind.
pub fn kind_color(kind: StatusKind) -> Color {
    match kind {
        StatusKind::Start => DARK_GREEN,
        StatusKind::Pause => GOLD,
        StatusKind::Stop => DARK_RED,
    }
}
