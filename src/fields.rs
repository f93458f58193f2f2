//! Enumerations and closed-choice field values for status updates.
//!
//! This module defines the structured value types a status block is built from:
//! the update kind, the author role, the stopwatch state, and the fixed option
//! lists backing the pause/stop status selectors.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The three update kinds a status block can announce.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum StatusKind {
    #[serde(alias = "START")]
    Start,
    #[serde(alias = "PAUSE")]
    Pause,
    #[serde(alias = "STOP")]
    Stop,
}

impl StatusKind {
    /// Header keyword as it appears in the formatted block.
    pub fn label(self) -> &'static str {
        match self {
            StatusKind::Start => "START",
            StatusKind::Pause => "PAUSE",
            StatusKind::Stop => "STOP",
        }
    }
}

/// Author role shown in the trailing attribution line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    #[serde(alias = "Dev")]
    Dev,
    #[serde(alias = "QA")]
    Qa,
}

impl Role {
    /// Attribution key as it appears in the formatted block.
    pub fn label(self) -> &'static str {
        match self {
            Role::Dev => "Dev",
            Role::Qa => "QA",
        }
    }
}

/// Stopwatch lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
    Paused,
    Stopped,
}

impl TimerState {
    /// Display name for the timer panel.
    pub fn label(self) -> &'static str {
        match self {
            TimerState::Idle => "Idle",
            TimerState::Running => "Running",
            TimerState::Paused => "Paused",
            TimerState::Stopped => "Stopped",
        }
    }
}

/// Selector options for the PAUSE status line.
pub const PAUSE_STATUSES: [&str; 2] = ["In Progress", "Blocked"];

/// Selector options for the STOP status line. `Custom` reveals the
/// free-text custom status field.
pub const STOP_STATUSES: [&str; 5] = ["Done", "Moved to QA", "Dropped", "Re-scoped", "Custom"];

/// Sentinel stop status that defers to the custom status text.
pub const CUSTOM_STOP_STATUS: &str = "Custom";

/// Seeded pause status for a fresh form.
pub const DEFAULT_PAUSE_STATUS: &str = "In Progress";

/// Seeded stop status for a fresh form.
pub const DEFAULT_STOP_STATUS: &str = "Moved to QA";
