//! The status field bag.
//!
//! This module defines the `FieldBag` struct holding every form-collected
//! value a status block is rendered from. All values are free text; the
//! hour/minute fields are digit-filtered by the input layer but re-parsed
//! defensively by the formatter.

use crate::fields::{DEFAULT_PAUSE_STATUS, DEFAULT_STOP_STATUS};

/// Named field values driving status formatting.
///
/// Grouped by the kind they matter to: project/task/actor_name are common,
/// the estimate and reference belong to START, pause status/reason/progress
/// to PAUSE, and stop status/time taken/notes to STOP. Irrelevant fields are
/// simply ignored by the formatter for the selected kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBag {
    pub project: String,
    pub task: String,
    pub actor_name: String,
    pub estimated_hours: String,
    pub estimated_minutes: String,
    pub reference: String,
    pub pause_status: String,
    pub pause_reason: String,
    pub progress: String,
    pub stop_status: String,
    pub custom_stop_status: String,
    pub time_taken_hours: String,
    pub time_taken_minutes: String,
    pub notes: String,
}

impl Default for FieldBag {
    fn default() -> Self {
        FieldBag {
            project: String::new(),
            task: String::new(),
            actor_name: String::new(),
            estimated_hours: String::new(),
            estimated_minutes: String::new(),
            reference: String::new(),
            pause_status: DEFAULT_PAUSE_STATUS.to_string(),
            pause_reason: String::new(),
            progress: String::new(),
            stop_status: DEFAULT_STOP_STATUS.to_string(),
            custom_stop_status: String::new(),
            time_taken_hours: String::new(),
            time_taken_minutes: String::new(),
            notes: String::new(),
        }
    }
}
