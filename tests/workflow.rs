#[cfg(test)]
mod tests {
    use status_updater::config::Config;
    use status_updater::fields::{StatusKind, TimerState, CUSTOM_STOP_STATUS};
    use status_updater::format::format_status;
    use status_updater::timer::Timer;
    use status_updater::tui::form::StatusForm;

    fn tick_n(timer: &mut Timer, n: u64) {
        for _ in 0..n {
            timer.tick();
        }
    }

    fn stop_form() -> StatusForm {
        let mut form = StatusForm::new(&Config::default());
        form.kind = form
            .kinds
            .iter()
            .position(|&k| k == StatusKind::Stop)
            .unwrap();
        form
    }

    #[test]
    fn test_stopwatch_result_lands_in_the_stop_block() {
        let mut form = stop_form();
        form.project.set_value("Urban Space");
        form.notes.set_value("Build 134");

        let mut timer = Timer::new();
        timer.start();
        tick_n(&mut timer, 2 * 3600 + 30 * 60);
        let (hours, minutes) = timer.stop().unwrap();
        form.apply_time_taken(hours, minutes);

        let block = format_status(
            form.selected_kind(),
            &form.to_bag(),
            form.selected_role(),
            None,
        );
        assert!(block.contains("Time Taken: ~2.5h"));
        assert!(block.contains("Status: Moved to QA"));
        assert!(block.contains("Notes: Build 134"));
        assert_eq!(timer.state(), TimerState::Stopped);
    }

    #[test]
    fn test_fresh_run_after_stop_starts_from_zero() {
        let mut timer = Timer::new();
        timer.start();
        tick_n(&mut timer, 90);
        assert_eq!(timer.stop(), Some((0, 1)));

        timer.start();
        assert_eq!(timer.elapsed_seconds(), 0);
        assert_eq!(timer.state(), TimerState::Running);
    }

    #[test]
    fn test_custom_status_flows_through_to_the_block() {
        let mut form = stop_form();
        form.stop_status = form
            .stop_statuses
            .iter()
            .position(|&s| s == CUSTOM_STOP_STATUS)
            .unwrap();
        form.custom_stop_status.set_value("Waiting on design");

        let block = format_status(
            form.selected_kind(),
            &form.to_bag(),
            form.selected_role(),
            None,
        );
        assert!(block.contains("Status: Waiting on design"));
    }

    #[test]
    fn test_estimate_carries_into_the_stop_header_and_time_taken() {
        let mut form = StatusForm::new(&Config::default());
        form.estimated_hours.set_value("1");
        form.estimated_minutes.set_value("0");
        form.show_time = true;

        form.kind = form
            .kinds
            .iter()
            .position(|&k| k == StatusKind::Stop)
            .unwrap();
        form.apply_kind_selection("9:00AM".to_string());

        let block = format_status(
            form.selected_kind(),
            &form.to_bag(),
            form.selected_role(),
            form.header_time(),
        );
        assert!(block.starts_with("```\nSTOP - 9:00AM\n"));
        assert!(block.contains("Time Taken: ~1h"));
    }
}
