//! Enumerations for TUI state management.

/// Screens and overlays of the composer page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppState {
    Form,
    PasteDialog,
    ConfirmReset,
    Help,
}
