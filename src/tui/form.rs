//! Status form state for the composer page.
//!
//! Text fields are `InputField`s; closed choices (kind, role, pause/stop
//! status, show-time) are selector indices over fixed option lists. Only the
//! fields relevant to the selected kind are visible, and navigation cycles
//! through the visible set.

use crate::config::Config;
use crate::fields::{
    Role, StatusKind, CUSTOM_STOP_STATUS, DEFAULT_PAUSE_STATUS, DEFAULT_STOP_STATUS,
    PAUSE_STATUSES, STOP_STATUSES,
};
use crate::parse::ParseResult;
use crate::status::FieldBag;
use crate::tui::input::InputField;

// Global field order. Navigation skips orders that are hidden for the
// selected kind, but every field keeps a stable number.
pub const KIND_SELECTOR_ORDER: usize = 0;
pub const SHOW_TIME_ORDER: usize = 1;
pub const PROJECT_ORDER: usize = 2;
pub const TASK_ORDER: usize = 3;
pub const ESTIMATED_HOURS_ORDER: usize = 4;
pub const ESTIMATED_MINUTES_ORDER: usize = 5;
pub const REFERENCE_ORDER: usize = 6;
pub const PAUSE_STATUS_ORDER: usize = 7;
pub const PAUSE_REASON_ORDER: usize = 8;
pub const PROGRESS_ORDER: usize = 9;
pub const STOP_STATUS_ORDER: usize = 10;
pub const CUSTOM_STOP_STATUS_ORDER: usize = 11;
pub const TIME_TAKEN_HOURS_ORDER: usize = 12;
pub const TIME_TAKEN_MINUTES_ORDER: usize = 13;
pub const NOTES_ORDER: usize = 14;
pub const ROLE_SELECTOR_ORDER: usize = 15;
pub const ACTOR_NAME_ORDER: usize = 16;

/// Form state backing the composer page.
pub struct StatusForm {
    pub project: InputField,
    pub task: InputField,
    pub actor_name: InputField,
    pub estimated_hours: InputField,
    pub estimated_minutes: InputField,
    pub reference: InputField,
    pub pause_reason: InputField,
    pub progress: InputField,
    pub custom_stop_status: InputField,
    pub time_taken_hours: InputField,
    pub time_taken_minutes: InputField,
    pub notes: InputField,
    pub kind: usize,
    pub kinds: Vec<StatusKind>,
    pub role: usize,
    pub roles: Vec<Role>,
    pub pause_status: usize,
    pub pause_statuses: Vec<&'static str>,
    pub stop_status: usize,
    pub stop_statuses: Vec<&'static str>,
    pub show_time: bool,
    pub captured_time: Option<String>,
    pub current_field: usize,
}

impl StatusForm {
    /// Create a fresh form seeded with the configured defaults.
    pub fn new(config: &Config) -> Self {
        let roles = vec![Role::Dev, Role::Qa];
        let role = roles.iter().position(|&r| r == config.role).unwrap_or(0);
        let pause_statuses = PAUSE_STATUSES.to_vec();
        let pause_status = pause_statuses
            .iter()
            .position(|&s| s == DEFAULT_PAUSE_STATUS)
            .unwrap_or(0);
        let stop_statuses = STOP_STATUSES.to_vec();
        let stop_status = stop_statuses
            .iter()
            .position(|&s| s == DEFAULT_STOP_STATUS)
            .unwrap_or(0);

        let mut form = StatusForm {
            project: InputField::with_value(&config.project),
            task: InputField::new(),
            actor_name: InputField::with_value(&config.actor_name),
            estimated_hours: InputField::new(),
            estimated_minutes: InputField::new(),
            reference: InputField::new(),
            pause_reason: InputField::new(),
            progress: InputField::new(),
            custom_stop_status: InputField::new(),
            time_taken_hours: InputField::new(),
            time_taken_minutes: InputField::new(),
            notes: InputField::new(),
            kind: 0,
            kinds: vec![StatusKind::Start, StatusKind::Pause, StatusKind::Stop],
            role,
            roles,
            pause_status,
            pause_statuses,
            stop_status,
            stop_statuses,
            show_time: config.show_time,
            captured_time: None,
            current_field: KIND_SELECTOR_ORDER,
        };
        form.update_active_field();
        form
    }

    /// Reset every field to the configured defaults, keeping the selected kind.
    pub fn reset(&mut self, config: &Config) {
        let kind = self.kind;
        *self = StatusForm::new(config);
        self.kind = kind;
    }

    /// The currently selected update kind.
    pub fn selected_kind(&self) -> StatusKind {
        self.kinds[self.kind]
    }

    /// The currently selected attribution role.
    pub fn selected_role(&self) -> Role {
        self.roles[self.role]
    }

    /// Header time to render, honouring the show-time option.
    pub fn header_time(&self) -> Option<&str> {
        if self.show_time {
            self.captured_time.as_deref()
        } else {
            None
        }
    }

    /// Field orders visible for the selected kind, in visual order.
    pub fn visible_orders(&self) -> Vec<usize> {
        let mut orders = vec![KIND_SELECTOR_ORDER, SHOW_TIME_ORDER, PROJECT_ORDER, TASK_ORDER];
        match self.selected_kind() {
            StatusKind::Start => {
                orders.extend([ESTIMATED_HOURS_ORDER, ESTIMATED_MINUTES_ORDER, REFERENCE_ORDER]);
            }
            StatusKind::Pause => {
                orders.extend([PAUSE_STATUS_ORDER, PAUSE_REASON_ORDER, PROGRESS_ORDER]);
            }
            StatusKind::Stop => {
                orders.push(STOP_STATUS_ORDER);
                if self.stop_statuses[self.stop_status] == CUSTOM_STOP_STATUS {
                    orders.push(CUSTOM_STOP_STATUS_ORDER);
                }
                orders.extend([TIME_TAKEN_HOURS_ORDER, TIME_TAKEN_MINUTES_ORDER, NOTES_ORDER]);
            }
        }
        orders.extend([ROLE_SELECTOR_ORDER, ACTOR_NAME_ORDER]);
        orders
    }

    /// Move to the next visible field.
    pub fn next_field(&mut self) {
        let orders = self.visible_orders();
        let pos = orders
            .iter()
            .position(|&o| o == self.current_field)
            .unwrap_or(0);
        self.current_field = orders[(pos + 1) % orders.len()];
        self.update_active_field();
    }

    /// Move to the previous visible field.
    pub fn prev_field(&mut self) {
        let orders = self.visible_orders();
        let pos = orders
            .iter()
            .position(|&o| o == self.current_field)
            .unwrap_or(0);
        self.current_field = orders[(pos + orders.len() - 1) % orders.len()];
        self.update_active_field();
    }

    /// Update which text field is currently active for editing.
    pub fn update_active_field(&mut self) {
        for field in self.fields_mut() {
            field.active = false;
        }
        let current = self.current_field;
        if let Some(field) = self.field_mut(current) {
            field.active = true;
        }
    }

    /// The text field behind an order, if that order is a text field.
    pub fn field(&self, order: usize) -> Option<&InputField> {
        match order {
            PROJECT_ORDER => Some(&self.project),
            TASK_ORDER => Some(&self.task),
            ESTIMATED_HOURS_ORDER => Some(&self.estimated_hours),
            ESTIMATED_MINUTES_ORDER => Some(&self.estimated_minutes),
            REFERENCE_ORDER => Some(&self.reference),
            PAUSE_REASON_ORDER => Some(&self.pause_reason),
            PROGRESS_ORDER => Some(&self.progress),
            CUSTOM_STOP_STATUS_ORDER => Some(&self.custom_stop_status),
            TIME_TAKEN_HOURS_ORDER => Some(&self.time_taken_hours),
            TIME_TAKEN_MINUTES_ORDER => Some(&self.time_taken_minutes),
            NOTES_ORDER => Some(&self.notes),
            ACTOR_NAME_ORDER => Some(&self.actor_name),
            _ => None,
        }
    }

    fn field_mut(&mut self, order: usize) -> Option<&mut InputField> {
        match order {
            PROJECT_ORDER => Some(&mut self.project),
            TASK_ORDER => Some(&mut self.task),
            ESTIMATED_HOURS_ORDER => Some(&mut self.estimated_hours),
            ESTIMATED_MINUTES_ORDER => Some(&mut self.estimated_minutes),
            REFERENCE_ORDER => Some(&mut self.reference),
            PAUSE_REASON_ORDER => Some(&mut self.pause_reason),
            PROGRESS_ORDER => Some(&mut self.progress),
            CUSTOM_STOP_STATUS_ORDER => Some(&mut self.custom_stop_status),
            TIME_TAKEN_HOURS_ORDER => Some(&mut self.time_taken_hours),
            TIME_TAKEN_MINUTES_ORDER => Some(&mut self.time_taken_minutes),
            NOTES_ORDER => Some(&mut self.notes),
            ACTOR_NAME_ORDER => Some(&mut self.actor_name),
            _ => None,
        }
    }

    /// Mutable references to all text fields in visual order.
    pub fn fields_mut(&mut self) -> Vec<&mut InputField> {
        vec![
            &mut self.project,
            &mut self.task,
            &mut self.estimated_hours,
            &mut self.estimated_minutes,
            &mut self.reference,
            &mut self.pause_reason,
            &mut self.progress,
            &mut self.custom_stop_status,
            &mut self.time_taken_hours,
            &mut self.time_taken_minutes,
            &mut self.notes,
            &mut self.actor_name,
        ]
    }

    /// True when the order is one of the digit-only hour/minute fields.
    fn is_numeric(order: usize) -> bool {
        matches!(
            order,
            ESTIMATED_HOURS_ORDER
                | ESTIMATED_MINUTES_ORDER
                | TIME_TAKEN_HOURS_ORDER
                | TIME_TAKEN_MINUTES_ORDER
        )
    }

    /// Handle character input for the currently active field. Hour and
    /// minute fields accept digits only.
    pub fn handle_char(&mut self, c: char) {
        let current = self.current_field;
        if Self::is_numeric(current) && !c.is_ascii_digit() {
            return;
        }
        if let Some(field) = self.field_mut(current) {
            field.handle_char(c);
        }
    }

    /// Handle backspace for the currently active field.
    pub fn handle_backspace(&mut self) {
        let current = self.current_field;
        if let Some(field) = self.field_mut(current) {
            field.handle_backspace();
        }
    }

    /// Handle delete for the currently active field.
    pub fn handle_delete(&mut self) {
        let current = self.current_field;
        if let Some(field) = self.field_mut(current) {
            field.handle_delete();
        }
    }

    /// Handle left/right arrows: cursor movement in text fields, cycling in
    /// selectors, toggling for show-time.
    pub fn handle_left_right(&mut self, right: bool) {
        match self.current_field {
            KIND_SELECTOR_ORDER => {
                if right {
                    self.kind = (self.kind + 1) % self.kinds.len();
                } else {
                    self.kind = if self.kind == 0 {
                        self.kinds.len() - 1
                    } else {
                        self.kind - 1
                    };
                }
            }
            SHOW_TIME_ORDER => self.show_time = !self.show_time,
            ROLE_SELECTOR_ORDER => {
                if right {
                    self.role = (self.role + 1) % self.roles.len();
                } else {
                    self.role = if self.role == 0 {
                        self.roles.len() - 1
                    } else {
                        self.role - 1
                    };
                }
            }
            PAUSE_STATUS_ORDER => {
                if right {
                    self.pause_status = (self.pause_status + 1) % self.pause_statuses.len();
                } else {
                    self.pause_status = if self.pause_status == 0 {
                        self.pause_statuses.len() - 1
                    } else {
                        self.pause_status - 1
                    };
                }
            }
            STOP_STATUS_ORDER => {
                if right {
                    self.stop_status = (self.stop_status + 1) % self.stop_statuses.len();
                } else {
                    self.stop_status = if self.stop_status == 0 {
                        self.stop_statuses.len() - 1
                    } else {
                        self.stop_status - 1
                    };
                }
            }
            order => {
                if let Some(field) = self.field_mut(order) {
                    if right {
                        field.move_cursor_right();
                    } else {
                        field.move_cursor_left();
                    }
                }
            }
        }
    }

    /// Side effects of selecting a kind: stamp a fresh header time and, on
    /// STOP, carry an empty time-taken over from the estimate.
    pub fn apply_kind_selection(&mut self, time_label: String) {
        self.captured_time = Some(time_label);
        let estimate_present = !self.estimated_hours.value.is_empty()
            || !self.estimated_minutes.value.is_empty();
        let time_taken_empty = self.time_taken_hours.value.is_empty()
            && self.time_taken_minutes.value.is_empty();
        if self.selected_kind() == StatusKind::Stop && time_taken_empty && estimate_present {
            let hours = self.estimated_hours.value.clone();
            let minutes = self.estimated_minutes.value.clone();
            self.time_taken_hours.set_value(&hours);
            self.time_taken_minutes.set_value(&minutes);
        }
    }

    /// Overwrite the time-taken fields from a stopwatch result.
    pub fn apply_time_taken(&mut self, hours: u64, minutes: u64) {
        self.time_taken_hours.set_value(&hours.to_string());
        self.time_taken_minutes.set_value(&minutes.to_string());
    }

    /// Merge fields recovered by the paste parser. Absent fields are left
    /// untouched; a recovered role flips the role selector.
    pub fn apply_parse(&mut self, parsed: &ParseResult) {
        if let Some(v) = &parsed.project {
            self.project.set_value(v);
        }
        if let Some(v) = &parsed.task {
            self.task.set_value(v);
        }
        if let Some(v) = &parsed.actor_name {
            self.actor_name.set_value(v);
        }
        if let Some(role) = parsed.role {
            if let Some(index) = self.roles.iter().position(|&r| r == role) {
                self.role = index;
            }
        }
        if let Some(v) = &parsed.captured_time {
            self.captured_time = Some(v.clone());
        }
    }

    /// Assemble the field bag the formatter consumes.
    pub fn to_bag(&self) -> FieldBag {
        FieldBag {
            project: self.project.value.clone(),
            task: self.task.value.clone(),
            actor_name: self.actor_name.value.clone(),
            estimated_hours: self.estimated_hours.value.clone(),
            estimated_minutes: self.estimated_minutes.value.clone(),
            reference: self.reference.value.clone(),
            pause_status: self.pause_statuses[self.pause_status].to_string(),
            pause_reason: self.pause_reason.value.clone(),
            progress: self.progress.value.clone(),
            stop_status: self.stop_statuses[self.stop_status].to_string(),
            custom_stop_status: self.custom_stop_status.value.clone(),
            time_taken_hours: self.time_taken_hours.value.clone(),
            time_taken_minutes: self.time_taken_minutes.value.clone(),
            notes: self.notes.value.clone(),
        }
    }
}
