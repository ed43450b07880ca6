//! Main TUI application state and logic

use crate::interpreter::constants::{EVENT_POLL_MS, PLAY_INTERVAL_MS, SPACE_DEBOUNCE_MS};
use crate::interpreter::errors::ScanError;
use crate::interpreter::session::ScanSession;
use crate::scanner::instruction::Instruction;
use crate::ui::panes::{self, SourceScrollState};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use rustc_hash::FxHashMap;
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Tape,
}

impl FocusedPane {
    /// Move focus to the other pane
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Tape,
            FocusedPane::Tape => FocusedPane::Source,
        }
    }
}

/// The main application state
pub struct App {
    /// The recorded scan being inspected
    pub session: ScanSession,

    /// The memory blob being scanned
    pub source_code: String,

    /// Instructions grouped by starting line, for highlighting
    line_index: FxHashMap<usize, Vec<Instruction>>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    pub source_scroll: SourceScrollState,
    pub tape_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app for a recorded scan of `source_code`
    pub fn new(session: ScanSession, source_code: String) -> Self {
        let line_index = panes::index_by_line(session.instructions());

        App {
            session,
            source_code,
            line_index,
            focused_pane: FocusedPane::Source,
            source_scroll: SourceScrollState::default(),
            tape_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing
                && self.last_play_time.elapsed() >= Duration::from_millis(PLAY_INTERVAL_MS)
            {
                if self.session.step_forward().is_ok() {
                    self.status_message = "Playing...".to_string();
                } else {
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                }
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(EVENT_POLL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Instruction executed at the current step, if any
    fn current_instruction(&self) -> Option<&Instruction> {
        self.session
            .current()
            .instruction_index
            .and_then(|index| self.session.instructions().get(index))
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        // Right column: State (top) | Tape (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(8), Constraint::Min(0)])
            .split(columns[1]);

        let current = self.current_instruction().cloned();

        panes::render_source_pane(
            frame,
            columns[0],
            &self.source_code,
            &self.line_index,
            current.as_ref(),
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        panes::render_state_pane(frame, right_rows[0], &self.session);

        panes::render_tape_pane(
            frame,
            right_rows[1],
            &self.session,
            self.focused_pane == FocusedPane::Tape,
            &mut self.tape_scroll,
        );

        panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.session.history_position(),
            self.session.total_snapshots(),
            self.is_playing,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let stepped = (0..n)
                    .take_while(|_| self.session.step_forward().is_ok())
                    .count();
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.is_playing = false;
                let result = self.session.step_backward();
                self.report_step(result, "Stepped backward", "Cannot step backward");
            }
            KeyCode::Right => {
                self.is_playing = false;
                let result = self.session.step_forward();
                self.report_step(result, "Stepped forward", "Cannot step forward");
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Source => {
                    // Scrolling up makes the current line move down visually
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_add(1));
                    }
                }
                FocusedPane::Tape => {
                    self.tape_scroll = self.tape_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Source => {
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_sub(1));
                    }
                }
                FocusedPane::Tape => {
                    self.tape_scroll = self.tape_scroll.saturating_add(1);
                }
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play mode, debounced against key repeat
                if self.last_space_press.elapsed() >= Duration::from_millis(SPACE_DEBOUNCE_MS) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(Duration::from_millis(PLAY_INTERVAL_MS))
                            .unwrap_or_else(Instant::now);
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                let result = self.session.jump_to_end();
                self.report_step(result, "Jumped to end", "Cannot jump to end");
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                let result = self.session.rewind_to_start();
                self.report_step(result, "Jumped to start", "Cannot jump to start");
            }
            _ => {}
        }
    }

    fn report_step(&mut self, result: Result<(), ScanError>, ok: &str, failed: &str) {
        self.status_message = match result {
            Ok(()) => ok.to_string(),
            Err(ScanError::Generic { message, .. }) => format!("{}: {}", failed, message),
            Err(e) => format!("Error: {}", e),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::constants::SNAPSHOT_MEMORY_LIMIT;
    use crossterm::event::KeyModifiers;

    fn app(source: &str) -> App {
        let session = ScanSession::new(source, SNAPSHOT_MEMORY_LIMIT).unwrap();
        App::new(session, source.to_string())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_keys_drive_session() {
        let mut app = app("mul(1,2)don't()mul(3,4)do()mul(5,6)");

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.session.history_position(), 3);
        assert_eq!(app.status_message, "Stepped forward 3 step(s)");

        press(&mut app, KeyCode::Left);
        assert_eq!(app.session.history_position(), 2);

        press(&mut app, KeyCode::Enter);
        assert!(app.session.is_at_end());
        assert_eq!(app.session.current().enabled_sum, 32u32.into());

        press(&mut app, KeyCode::Right);
        assert!(app.status_message.starts_with("Cannot step forward"));

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.history_position(), 0);
    }

    #[test]
    fn test_number_key_stops_at_end() {
        let mut app = app("mul(1,1)");

        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.status_message, "Stepped forward 1 step(s)");
    }

    #[test]
    fn test_focus_and_quit() {
        let mut app = app("");

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Tape);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Source);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
