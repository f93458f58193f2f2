//! Elapsed-time stopwatch.
//!
//! A tick-driven state machine with no clock of its own: the owner calls
//! `tick()` once per elapsed second while the timer is Running. Keeping the
//! time source outside means a transition away from Running structurally
//! stops accumulation, and tests drive time explicitly.

use crate::fields::TimerState;

/// Four-state stopwatch. Transitions outside the defined set are no-ops,
/// so stray calls (or a stray tick after a pause) never corrupt the count.
#[derive(Debug, Clone)]
pub struct Timer {
    state: TimerState,
    elapsed_seconds: u64,
    final_elapsed_seconds: Option<u64>,
}

impl Timer {
    pub fn new() -> Self {
        Timer {
            state: TimerState::Idle,
            elapsed_seconds: 0,
            final_elapsed_seconds: None,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn final_elapsed_seconds(&self) -> Option<u64> {
        self.final_elapsed_seconds
    }

    /// Start a fresh run from Idle or Stopped (count restarts at zero), or
    /// resume from Paused (count continues).
    pub fn start(&mut self) {
        match self.state {
            TimerState::Idle | TimerState::Stopped => {
                self.elapsed_seconds = 0;
                self.final_elapsed_seconds = None;
                self.state = TimerState::Running;
            }
            TimerState::Paused => self.state = TimerState::Running,
            TimerState::Running => {}
        }
    }

    /// Suspend counting, keeping the elapsed total.
    pub fn pause(&mut self) {
        if self.state == TimerState::Running {
            self.state = TimerState::Paused;
        }
    }

    /// Finish the run. Freezes the elapsed total and returns the
    /// `(hours, minutes)` pair to write into the time-taken fields.
    /// Returns `None` (and stays put) unless Running or Paused.
    pub fn stop(&mut self) -> Option<(u64, u64)> {
        match self.state {
            TimerState::Running | TimerState::Paused => {
                self.state = TimerState::Stopped;
                self.final_elapsed_seconds = Some(self.elapsed_seconds);
                let hours = self.elapsed_seconds / 3600;
                let minutes = (self.elapsed_seconds % 3600) / 60;
                Some((hours, minutes))
            }
            _ => None,
        }
    }

    /// Return a Stopped timer to Idle, clearing the frozen total.
    pub fn reset(&mut self) {
        if self.state == TimerState::Stopped {
            self.state = TimerState::Idle;
            self.elapsed_seconds = 0;
            self.final_elapsed_seconds = None;
        }
    }

    /// Record one elapsed second. Only effective while Running.
    pub fn tick(&mut self) {
        if self.state == TimerState::Running {
            self.elapsed_seconds += 1;
        }
    }
}

impl Default for Timer {
    fn default() -> Self {
        Timer::new()
    }
}

/// Zero-padded `HH:MM:SS` for the live counter.
pub fn clock_display(seconds: u64) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

/// Compact human-readable duration: `1h 5m`, `2h`, `45m`, or `30s` for
/// anything under a minute.
pub fn human_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    if hours > 0 && minutes > 0 {
        format!("{}h {}m", hours, minutes)
    } else if hours > 0 {
        format!("{}h", hours)
    } else if minutes > 0 {
        format!("{}m", minutes)
    } else {
        format!("{}s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick_n(timer: &mut Timer, n: u64) {
        for _ in 0..n {
            timer.tick();
        }
    }

    #[test]
    fn test_three_ticks_then_stop() {
        let mut timer = Timer::new();
        timer.start();
        tick_n(&mut timer, 3);
        assert_eq!(timer.elapsed_seconds(), 3);
        let written = timer.stop();
        assert_eq!(written, Some((0, 0)));
        assert_eq!(timer.state(), TimerState::Stopped);
        assert_eq!(timer.final_elapsed_seconds(), Some(3));
    }

    #[test]
    fn test_pause_keeps_elapsed_without_double_counting() {
        let mut timer = Timer::new();
        timer.start();
        tick_n(&mut timer, 2);
        timer.pause();
        tick_n(&mut timer, 10); // stray ticks while paused must not count
        assert_eq!(timer.elapsed_seconds(), 2);
        timer.start(); // resume
        tick_n(&mut timer, 3);
        assert_eq!(timer.stop(), Some((0, 0)));
        assert_eq!(timer.final_elapsed_seconds(), Some(5));
    }

    #[test]
    fn test_reset_then_restart_counts_from_zero() {
        let mut timer = Timer::new();
        timer.start();
        tick_n(&mut timer, 4);
        timer.stop();
        timer.reset();
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.elapsed_seconds(), 0);
        assert_eq!(timer.final_elapsed_seconds(), None);
        timer.start();
        timer.tick();
        assert_eq!(timer.elapsed_seconds(), 1);
    }

    #[test]
    fn test_start_from_stopped_discards_previous_run() {
        let mut timer = Timer::new();
        timer.start();
        tick_n(&mut timer, 7);
        timer.stop();
        timer.start();
        assert_eq!(timer.state(), TimerState::Running);
        assert_eq!(timer.elapsed_seconds(), 0);
        assert_eq!(timer.final_elapsed_seconds(), None);
    }

    #[test]
    fn test_pause_and_stop_are_noops_while_idle() {
        let mut timer = Timer::new();
        timer.pause();
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.stop(), None);
        assert_eq!(timer.state(), TimerState::Idle);
        timer.tick();
        assert_eq!(timer.elapsed_seconds(), 0);
    }

    #[test]
    fn test_reset_only_applies_when_stopped() {
        let mut timer = Timer::new();
        timer.start();
        tick_n(&mut timer, 2);
        timer.reset();
        assert_eq!(timer.state(), TimerState::Running);
        assert_eq!(timer.elapsed_seconds(), 2);
    }

    #[test]
    fn test_stop_derives_hours_and_minutes() {
        let mut timer = Timer::new();
        timer.start();
        tick_n(&mut timer, 3725); // 1h 2m 5s
        assert_eq!(timer.stop(), Some((1, 2)));
    }

    #[test]
    fn test_clock_display_zero_pads() {
        assert_eq!(clock_display(0), "00:00:00");
        assert_eq!(clock_display(59), "00:00:59");
        assert_eq!(clock_display(3725), "01:02:05");
        assert_eq!(clock_display(360000), "100:00:00");
    }

    #[test]
    fn test_human_duration_picks_nonzero_parts() {
        assert_eq!(human_duration(0), "0s");
        assert_eq!(human_duration(59), "59s");
        assert_eq!(human_duration(60), "1m");
        assert_eq!(human_duration(3600), "1h");
        assert_eq!(human_duration(3725), "1h 2m");
        assert_eq!(human_duration(7205), "2h");
    }
}
