//! Wall-clock capability behind a seam.
//!
//! The captured-time label is the only place the composer reads real time,
//! so it is injected: the TUI and CLI use `SystemClock`, tests use
//! `FixedClock` and stay deterministic.

use chrono::Local;

/// Source of the captured-time header label.
pub trait Clock {
    /// Current clock-time label, e.g. `3:11PM`.
    fn time_label(&self) -> String;
}

/// The local wall clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn time_label(&self) -> String {
        Local::now().format("%-I:%M%p").to_string()
    }
}

/// Always returns the same label.
pub struct FixedClock(pub &'static str);

impl Clock for FixedClock {
    fn time_label(&self) -> String {
        self.0.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_returns_its_label() {
        assert_eq!(FixedClock("3:11PM").time_label(), "3:11PM");
    }

    #[test]
    fn test_system_clock_label_shape() {
        let label = SystemClock.time_label();
        assert!(label.contains(':'));
        assert!(label.ends_with("AM") || label.ends_with("PM"));
    }
}
