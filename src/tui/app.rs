//! Main application logic for the terminal user interface.
//!
//! This module contains the `App` struct which manages the TUI state,
//! handles user input, renders the composer page, and coordinates the
//! form, the stopwatch and the paste/reset/help dialogs.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};

use crate::clipboard::{copy_block, CopyOutcome};
use crate::clock::Clock;
use crate::config::Config;
use crate::fields::TimerState;
use crate::format::format_status;
use crate::parse::parse_status;
use crate::timer::{clock_display, human_duration, Timer};
use crate::tui::{
    colors::{kind_color, DARK_PURPLE, DARK_RED, GOLD},
    enums::AppState,
    form::{
        StatusForm, ACTOR_NAME_ORDER, CUSTOM_STOP_STATUS_ORDER, ESTIMATED_HOURS_ORDER,
        ESTIMATED_MINUTES_ORDER, KIND_SELECTOR_ORDER, NOTES_ORDER, PAUSE_REASON_ORDER,
        PAUSE_STATUS_ORDER, PROGRESS_ORDER, PROJECT_ORDER, REFERENCE_ORDER, ROLE_SELECTOR_ORDER,
        SHOW_TIME_ORDER, STOP_STATUS_ORDER, TASK_ORDER, TIME_TAKEN_HOURS_ORDER,
        TIME_TAKEN_MINUTES_ORDER,
    },
};

/// Main application state for the terminal user interface.
///
/// Owns the form, the stopwatch and the dialog buffers. The stopwatch only
/// advances through `advance_timer`, anchored to `last_tick`, so there is
/// exactly one tick source no matter how often the state changes.
pub struct App {
    state: AppState,
    form: StatusForm,
    timer: Timer,
    config: Config,
    clock: Box<dyn Clock>,
    last_tick: Instant,
    dialog_text: String,
    status_message: String,
}

impl App {
    /// Create a new App instance from a loaded configuration.
    pub fn new(config: Config, clock: Box<dyn Clock>) -> Self {
        let mut form = StatusForm::new(&config);
        form.captured_time = Some(clock.time_label());
        App {
            state: AppState::Form,
            form,
            timer: Timer::new(),
            config,
            clock,
            last_tick: Instant::now(),
            dialog_text: String::new(),
            status_message: String::new(),
        }
    }

    /// Set a status message to display in the status bar.
    fn set_status_message(&mut self, msg: String) {
        self.status_message = msg;
    }

    /// Clear the current status message.
    fn clear_status_message(&mut self) {
        self.status_message.clear();
    }

    /// Advance the stopwatch by however many whole seconds have passed
    /// since the last tick. While not Running the anchor follows the wall
    /// clock, so paused or idle spans are never credited on resume.
    fn advance_timer(&mut self) {
        if self.timer.state() == TimerState::Running {
            while self.last_tick.elapsed() >= Duration::from_secs(1) {
                self.timer.tick();
                self.last_tick += Duration::from_secs(1);
            }
        } else {
            self.last_tick = Instant::now();
        }
    }

    /// Start, pause or resume the stopwatch depending on its state.
    fn toggle_timer(&mut self) {
        match self.timer.state() {
            TimerState::Running => {
                self.timer.pause();
                self.set_status_message("Stopwatch paused".to_string());
            }
            TimerState::Paused => {
                self.timer.start();
                self.set_status_message("Stopwatch resumed".to_string());
            }
            TimerState::Idle | TimerState::Stopped => {
                self.timer.start();
                self.last_tick = Instant::now();
                self.set_status_message("Stopwatch started".to_string());
            }
        }
    }

    /// Stop the stopwatch and write the result into the time-taken fields.
    fn stop_timer(&mut self) {
        if let Some((hours, minutes)) = self.timer.stop() {
            self.form.apply_time_taken(hours, minutes);
            self.set_status_message(format!(
                "Stopwatch stopped at {}",
                human_duration(self.timer.elapsed_seconds())
            ));
        }
    }

    /// Return a stopped stopwatch to idle.
    fn reset_timer(&mut self) {
        if self.timer.state() == TimerState::Stopped {
            self.timer.reset();
            self.set_status_message("Stopwatch reset".to_string());
        }
    }

    /// Format the current form and put the block on the system clipboard.
    fn copy_status(&mut self) {
        let block = format_status(
            self.form.selected_kind(),
            &self.form.to_bag(),
            self.form.selected_role(),
            self.form.header_time(),
        );
        match copy_block(&block) {
            Ok(CopyOutcome::Rich) => self.set_status_message("Copied to clipboard".to_string()),
            Ok(CopyOutcome::PlainOnly) => {
                self.set_status_message("Copied as plain text only".to_string())
            }
            Err(e) => self.set_status_message(format!("Clipboard error: {e:#}")),
        }
    }

    /// Handle left/right arrows on the form, running kind-change side
    /// effects when the selection actually moves.
    fn handle_selector(&mut self, right: bool) {
        let on_kind = self.form.current_field == KIND_SELECTOR_ORDER;
        self.form.handle_left_right(right);
        if on_kind {
            let label = self.clock.time_label();
            self.form.apply_kind_selection(label);
        }
    }

    /// Handle keyboard input on the main form page.
    ///
    /// Returns true if the application should quit.
    fn handle_form_input(&mut self, key: KeyCode, modifiers: KeyModifiers) -> bool {
        if modifiers.contains(KeyModifiers::CONTROL) {
            match key {
                KeyCode::Char('t') => self.toggle_timer(),
                KeyCode::Char('x') => self.stop_timer(),
                KeyCode::Char('n') => self.reset_timer(),
                KeyCode::Char('p') => {
                    self.dialog_text.clear();
                    self.state = AppState::PasteDialog;
                }
                KeyCode::Char('r') => {
                    self.state = AppState::ConfirmReset;
                }
                KeyCode::Char('c') | KeyCode::Char('q') => return true,
                _ => {}
            }
            return false;
        }

        match key {
            KeyCode::Esc => return true,
            KeyCode::F(1) => {
                self.state = AppState::Help;
            }
            KeyCode::Enter => self.copy_status(),
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            KeyCode::Left => self.handle_selector(false),
            KeyCode::Right => self.handle_selector(true),
            KeyCode::Backspace => self.form.handle_backspace(),
            KeyCode::Delete => self.form.handle_delete(),
            KeyCode::Char(c) => self.form.handle_char(c),
            _ => {}
        }
        false
    }

    /// Handle keyboard input in the paste dialog. The buffer is append
    /// only; closing with Esc parses it and merges recognised fields.
    fn handle_paste_input(&mut self, key: KeyCode, modifiers: KeyModifiers) -> bool {
        match key {
            KeyCode::Esc => {
                if !self.dialog_text.trim().is_empty() {
                    let parsed = parse_status(&self.dialog_text);
                    if parsed.is_empty() {
                        self.set_status_message(
                            "No recognisable fields in pasted text".to_string(),
                        );
                    } else {
                        tracing::debug!(?parsed, "merging fields from pasted status");
                        self.form.apply_parse(&parsed);
                        self.set_status_message("Fields imported from pasted status".to_string());
                    }
                }
                self.dialog_text.clear();
                self.state = AppState::Form;
            }
            KeyCode::Enter => self.dialog_text.push('\n'),
            KeyCode::Backspace => {
                if modifiers.contains(KeyModifiers::CONTROL) {
                    self.dialog_text.clear();
                } else {
                    self.dialog_text.pop();
                }
            }
            KeyCode::Char(c) => self.dialog_text.push(c),
            _ => {}
        }
        false
    }

    /// Handle keyboard input in the reset confirmation dialog.
    fn handle_confirm_input(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                self.form.reset(&self.config);
                self.form.captured_time = Some(self.clock.time_label());
                self.state = AppState::Form;
                self.set_status_message("Form reset".to_string());
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.state = AppState::Form;
            }
            _ => {}
        }
        false
    }

    /// Handle keyboard input on the help screen.
    fn handle_help_input(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::F(1) => {
                self.state = AppState::Form;
            }
            _ => {}
        }
        false
    }

    /// Dispatch one key event based on current application state.
    ///
    /// Returns true if the application should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.clear_status_message();
        match self.state {
            AppState::Form => self.handle_form_input(key.code, key.modifiers),
            AppState::PasteDialog => self.handle_paste_input(key.code, key.modifiers),
            AppState::ConfirmReset => self.handle_confirm_input(key.code),
            AppState::Help => self.handle_help_input(key.code),
        }
    }

    /// Poll for and handle keyboard events.
    ///
    /// Returns true if the application should quit.
    fn handle_input(&mut self) -> io::Result<bool> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                return Ok(self.handle_key(key));
            }
        }
        Ok(false)
    }

    /// Title for a text field's bordered block.
    fn field_title(order: usize) -> &'static str {
        match order {
            PROJECT_ORDER => "Project",
            TASK_ORDER => "Task",
            ESTIMATED_HOURS_ORDER => "Estimated Hours",
            ESTIMATED_MINUTES_ORDER => "Estimated Minutes",
            REFERENCE_ORDER => "Reference",
            PAUSE_REASON_ORDER => "Reason",
            PROGRESS_ORDER => "Progress",
            CUSTOM_STOP_STATUS_ORDER => "Custom Status",
            TIME_TAKEN_HOURS_ORDER => "Time Taken Hours",
            TIME_TAKEN_MINUTES_ORDER => "Time Taken Minutes",
            NOTES_ORDER => "Notes",
            ACTOR_NAME_ORDER => "Name",
            _ => "",
        }
    }

    /// Render the form column, the preview and the stopwatch panel.
    fn render_form(&mut self, f: &mut Frame, area: Rect) {
        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
            .split(area);

        // LEFT COLUMN - one bordered row per visible field
        let orders = self.form.visible_orders();
        let mut constraints: Vec<Constraint> =
            orders.iter().map(|_| Constraint::Length(3)).collect();
        constraints.push(Constraint::Min(0));
        let left_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(main_chunks[0]);

        for (i, &order) in orders.iter().enumerate() {
            let chunk = left_chunks[i];
            let focused = self.form.current_field == order;
            let border_style = if focused {
                Style::default().fg(GOLD)
            } else {
                Style::default()
            };

            match order {
                KIND_SELECTOR_ORDER => {
                    let text = format!("< {} >", self.form.selected_kind().label());
                    let selector = Paragraph::new(text)
                        .block(
                            Block::default()
                                .borders(Borders::ALL)
                                .title("Update")
                                .border_style(border_style),
                        )
                        .alignment(Alignment::Center);
                    f.render_widget(selector, chunk);
                }
                SHOW_TIME_ORDER => {
                    let text = if self.form.show_time { "< On >" } else { "< Off >" };
                    let selector = Paragraph::new(text)
                        .block(
                            Block::default()
                                .borders(Borders::ALL)
                                .title("Show Time in Header")
                                .border_style(border_style),
                        )
                        .alignment(Alignment::Center);
                    f.render_widget(selector, chunk);
                }
                PAUSE_STATUS_ORDER => {
                    let text =
                        format!("< {} >", self.form.pause_statuses[self.form.pause_status]);
                    let selector = Paragraph::new(text)
                        .block(
                            Block::default()
                                .borders(Borders::ALL)
                                .title("Status")
                                .border_style(border_style),
                        )
                        .alignment(Alignment::Center);
                    f.render_widget(selector, chunk);
                }
                STOP_STATUS_ORDER => {
                    let text = format!("< {} >", self.form.stop_statuses[self.form.stop_status]);
                    let selector = Paragraph::new(text)
                        .block(
                            Block::default()
                                .borders(Borders::ALL)
                                .title("Status")
                                .border_style(border_style),
                        )
                        .alignment(Alignment::Center);
                    f.render_widget(selector, chunk);
                }
                ROLE_SELECTOR_ORDER => {
                    let text = format!("< {} >", self.form.selected_role().label());
                    let selector = Paragraph::new(text)
                        .block(
                            Block::default()
                                .borders(Borders::ALL)
                                .title("Role")
                                .border_style(border_style),
                        )
                        .alignment(Alignment::Center);
                    f.render_widget(selector, chunk);
                }
                order => {
                    if let Some(field) = self.form.field(order) {
                        let input = Paragraph::new(field.value.as_str()).block(
                            Block::default()
                                .borders(Borders::ALL)
                                .title(Self::field_title(order))
                                .border_style(border_style),
                        );
                        f.render_widget(input, chunk);
                        if focused {
                            f.set_cursor_position((
                                chunk.x + field.cursor_column() as u16 + 1,
                                chunk.y + 1,
                            ));
                        }
                    }
                }
            }
        }

        // RIGHT COLUMN - live preview over the stopwatch panel
        let right_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(7)].as_ref())
            .split(main_chunks[1]);

        let block_text = format_status(
            self.form.selected_kind(),
            &self.form.to_bag(),
            self.form.selected_role(),
            self.form.header_time(),
        );
        let preview = Paragraph::new(block_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Preview (Enter to copy)")
                    .border_style(Style::default().fg(kind_color(self.form.selected_kind()))),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(preview, right_chunks[0]);

        self.render_stopwatch(f, right_chunks[1]);
    }

    /// Render the stopwatch panel with the live counter and key hints.
    fn render_stopwatch(&mut self, f: &mut Frame, area: Rect) {
        let timer_color = match self.timer.state() {
            TimerState::Idle => Color::DarkGray,
            TimerState::Running => Color::Green,
            TimerState::Paused => GOLD,
            TimerState::Stopped => Color::Red,
        };
        let elapsed = self.timer.elapsed_seconds();
        let lines = vec![
            Line::from(Span::styled(
                clock_display(elapsed),
                Style::default().fg(timer_color).add_modifier(Modifier::BOLD),
            )),
            Line::from(human_duration(elapsed)),
            Line::from(""),
            Line::from("Ctrl+T start/pause  Ctrl+X stop  Ctrl+N reset"),
        ];
        let stopwatch = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Stopwatch - {}", self.timer.state().label()))
                    .border_style(Style::default().fg(timer_color)),
            )
            .alignment(Alignment::Center);
        f.render_widget(stopwatch, area);
    }

    /// Render the paste dialog over the form.
    fn render_paste_dialog(&mut self, f: &mut Frame, area: Rect) {
        let area = centered_rect(70, 70, area);
        f.render_widget(Clear, area);

        let block = Block::default()
            .title("Paste Status")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::White).bg(DARK_PURPLE));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)].as_ref())
            .split(inner);

        let lines: Vec<&str> = self.dialog_text.lines().collect();
        let visible_height = chunks[0].height.max(1) as usize;

        // The buffer is append only, so the cursor sits after the last line.
        let (cursor_row, cursor_col) =
            if self.dialog_text.ends_with('\n') || self.dialog_text.is_empty() {
                (lines.len(), 0)
            } else {
                (
                    lines.len().saturating_sub(1),
                    lines.last().map_or(0, |l| l.chars().count()),
                )
            };
        let scroll = (cursor_row + 1).saturating_sub(visible_height);

        let visible_lines: Vec<Line> = lines
            .iter()
            .skip(scroll)
            .take(visible_height)
            .map(|&line| Line::from(line))
            .collect();
        f.render_widget(Paragraph::new(visible_lines), chunks[0]);

        let hint = Paragraph::new(
            "Paste or type, Enter for new line, Ctrl+Backspace clears, Esc imports and closes",
        )
        .alignment(Alignment::Center);
        f.render_widget(hint, chunks[1]);

        let max_col = chunks[0].width.saturating_sub(1) as usize;
        f.set_cursor_position((
            chunks[0].x + cursor_col.min(max_col) as u16,
            chunks[0].y + (cursor_row - scroll) as u16,
        ));
    }

    /// Render the reset confirmation dialog.
    fn render_confirm(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .title("Reset Form")
            .borders(Borders::ALL)
            .style(Style::default().bg(DARK_RED));

        let area = centered_rect(50, 20, area);
        f.render_widget(Clear, area);

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "Clear every field and start over?",
                Style::default().add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from("Press 'y' to confirm, 'n' to cancel"),
        ];

        let paragraph = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        f.render_widget(paragraph, area);
    }

    /// Render the help screen with keyboard shortcuts.
    fn render_help(&mut self, f: &mut Frame, area: Rect) {
        let help_text = vec![
            Line::from(vec![Span::styled(
                "Status Updater Help",
                Style::default().add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Form:",
                Style::default().add_modifier(Modifier::BOLD),
            )]),
            Line::from("  Tab/Down, Shift+Tab/Up   Move between fields"),
            Line::from("  Left/Right               Move cursor, change selectors"),
            Line::from("  Enter                    Copy the status block"),
            Line::from("  Ctrl+P                   Paste a status to re-fill the form"),
            Line::from("  Ctrl+R                   Reset the form"),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Stopwatch:",
                Style::default().add_modifier(Modifier::BOLD),
            )]),
            Line::from("  Ctrl+T                   Start / pause / resume"),
            Line::from("  Ctrl+X                   Stop and fill Time Taken"),
            Line::from("  Ctrl+N                   Reset after a stop"),
            Line::from(""),
            Line::from("  F1                       Toggle this help"),
            Line::from("  Esc / Ctrl+Q             Quit"),
        ];

        let paragraph = Paragraph::new(help_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Help - Esc to return"),
            )
            .wrap(Wrap { trim: true });

        f.render_widget(paragraph, area);
    }

    /// Render the status bar at the bottom of the screen.
    fn render_status_bar(&mut self, f: &mut Frame, area: Rect) {
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            match self.state {
                AppState::Form => format!(
                    "{} update | Enter to copy | F1 for help",
                    self.form.selected_kind().label()
                ),
                AppState::PasteDialog => "Paste Status (Esc to import)".to_string(),
                AppState::ConfirmReset => "Reset Form".to_string(),
                AppState::Help => "Help".to_string(),
            }
        };

        let bar_color = kind_color(self.form.selected_kind());
        let text_color = match bar_color {
            GOLD => Color::Rgb(20, 20, 20),
            _ => Color::White,
        };
        let status = Paragraph::new(status_text)
            .style(Style::default().bg(bar_color).fg(text_color))
            .alignment(Alignment::Left);

        f.render_widget(status, area);
    }

    /// Main render function that layers dialogs over the form.
    fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
            .split(f.area());

        self.render_form(f, chunks[0]);
        match self.state {
            AppState::Form => {}
            AppState::PasteDialog => self.render_paste_dialog(f, chunks[0]),
            AppState::ConfirmReset => self.render_confirm(f, chunks[0]),
            AppState::Help => self.render_help(f, chunks[0]),
        }

        self.render_status_bar(f, chunks[1]);
    }

    /// Main event loop for the TUI application.
    ///
    /// Handles the stopwatch, rendering and input until the user exits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.advance_timer();
            terminal.draw(|f| self.render(f))?;

            if self.handle_input()? {
                break;
            }
        }
        Ok(())
    }
}

/// Centered sub-rectangle taking the given percentages of the area.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::fields::StatusKind;

    fn app() -> App {
        App::new(Config::default(), Box::new(FixedClock("3:11PM")))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_esc_quits_from_form() {
        let mut app = app();
        assert!(app.handle_key(key(KeyCode::Esc)));
    }

    #[test]
    fn test_ctrl_t_walks_stopwatch_states() {
        let mut app = app();
        app.handle_key(ctrl('t'));
        assert_eq!(app.timer.state(), TimerState::Running);
        app.handle_key(ctrl('t'));
        assert_eq!(app.timer.state(), TimerState::Paused);
        app.handle_key(ctrl('t'));
        assert_eq!(app.timer.state(), TimerState::Running);
    }

    #[test]
    fn test_stop_fills_time_taken_fields() {
        let mut app = app();
        app.handle_key(ctrl('t'));
        for _ in 0..3725 {
            app.timer.tick();
        }
        app.handle_key(ctrl('x'));
        assert_eq!(app.timer.state(), TimerState::Stopped);
        assert_eq!(app.form.time_taken_hours.value, "1");
        assert_eq!(app.form.time_taken_minutes.value, "2");

        app.handle_key(ctrl('n'));
        assert_eq!(app.timer.state(), TimerState::Idle);
        assert_eq!(app.timer.elapsed_seconds(), 0);
    }

    #[test]
    fn test_kind_change_stamps_captured_time() {
        let mut app = app();
        app.form.captured_time = None;
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.form.selected_kind(), StatusKind::Pause);
        assert_eq!(app.form.captured_time.as_deref(), Some("3:11PM"));
    }

    #[test]
    fn test_paste_dialog_imports_fields_on_close() {
        let mut app = app();
        app.handle_key(ctrl('p'));
        assert_eq!(app.state, AppState::PasteDialog);
        for c in "Project: Urban Space".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
        for c in "QA: Priya".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.state, AppState::Form);
        assert_eq!(app.form.project.value, "Urban Space");
        assert_eq!(app.form.actor_name.value, "Priya");
    }

    #[test]
    fn test_reset_requires_confirmation() {
        let mut app = app();
        app.form.task.set_value("wire the login flow");
        app.handle_key(ctrl('r'));
        assert_eq!(app.state, AppState::ConfirmReset);
        app.handle_key(key(KeyCode::Char('n')));
        assert_eq!(app.form.task.value, "wire the login flow");

        app.handle_key(ctrl('r'));
        app.handle_key(key(KeyCode::Char('y')));
        assert_eq!(app.state, AppState::Form);
        assert_eq!(app.form.task.value, "");
    }
}
