//! TUI renderer: draws each frame, then paces the run while listening for keys

use super::palette::{disk_colors, Rgb};
use super::panes::{
    render_counter_pane, render_moves_pane, render_status_bar, render_towers_pane,
    StatusRenderData,
};
use crate::puzzle::{optimal_moves, Control, Frame as PuzzleFrame, MoveRecord, Renderer, RunState};
use crate::snapshot::Snapshot;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

const MIN_DELAY: Duration = Duration::from_millis(10);
const MAX_DELAY: Duration = Duration::from_secs(5);
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// The main application state
pub struct App<B: Backend> {
    terminal: Terminal<B>,

    /// Disk colors, indexed by rank
    colors: Vec<Rgb>,

    /// Most recent frame, redrawn while paused
    current: Option<Snapshot>,

    /// Every move shown so far
    pub moves: Vec<MoveRecord>,

    /// Pause between frames
    pub delay: Duration,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Advance one move while paused
    step_requested: bool,

    /// Last time space was pressed (for debouncing)
    last_space_press: Instant,
}

impl<B: Backend> App<B> {
    pub fn new(terminal: Terminal<B>, num_disks: usize, delay: Duration) -> Self {
        App {
            terminal,
            colors: disk_colors(num_disks),
            current: None,
            moves: Vec::new(),
            delay,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: true,
            step_requested: false,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    /// Record `frame` and draw it
    pub fn show(&mut self, frame: &PuzzleFrame<'_>) -> io::Result<()> {
        let snapshot = Snapshot::capture(frame);
        if let Some(record) = snapshot.last_move {
            self.moves.push(record);
            self.status_message = format!("Disk {} {} → {}", record.rank, record.from, record.to);
        }
        if snapshot.state == RunState::Solved {
            self.status_message = format!(
                "Solved in {} moves. Press q to quit",
                snapshot.stats.moves
            );
        }
        self.current = Some(snapshot);
        self.draw()
    }

    /// Redraw the most recent frame
    pub fn draw(&mut self) -> io::Result<()> {
        let Some(snapshot) = self.current.as_ref() else {
            return Ok(());
        };
        let colors = &self.colors;
        let moves = &self.moves;
        let data = StatusRenderData {
            message: &self.status_message,
            stats: snapshot.stats,
            total_moves: optimal_moves(snapshot.num_disks),
            delay: self.delay,
            is_playing: self.is_playing,
            is_solved: snapshot.state == RunState::Solved,
        };
        self.terminal
            .draw(|f| render(f, snapshot, colors, moves, data))?;
        Ok(())
    }

    /// Wait out the frame delay, handling keys. Stays here while paused.
    fn pace(&mut self) -> io::Result<()> {
        let started = Instant::now();
        loop {
            if self.should_quit {
                break;
            }
            if self.step_requested {
                self.step_requested = false;
                break;
            }
            if self.is_playing && started.elapsed() >= self.delay {
                break;
            }

            let timeout = if self.is_playing {
                self.delay
                    .saturating_sub(started.elapsed())
                    .min(POLL_INTERVAL)
            } else {
                POLL_INTERVAL
            };
            self.poll_input(timeout)?;
        }
        Ok(())
    }

    /// Keep the final frame on screen until the user quits
    pub fn wait_for_quit(&mut self) -> io::Result<()> {
        self.is_playing = false;
        self.draw()?;
        while !self.should_quit {
            self.poll_input(POLL_INTERVAL)?;
        }
        Ok(())
    }

    fn poll_input(&mut self, timeout: Duration) -> io::Result<()> {
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    self.handle_key_event(key);
                    self.draw()?;
                }
                Event::Resize(_, _) => self.draw()?,
                _ => {}
            }
        }
        Ok(())
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    self.status_message = if self.is_playing {
                        "Playing...".to_string()
                    } else {
                        "Paused".to_string()
                    };
                }
            }
            KeyCode::Right | KeyCode::Char('s') => {
                self.is_playing = false;
                self.step_requested = true;
                self.status_message = "Stepped forward".to_string();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.delay = (self.delay / 2).max(MIN_DELAY);
                self.status_message = format!("Delay {}ms", self.delay.as_millis());
            }
            KeyCode::Char('-') => {
                self.delay = (self.delay * 2).min(MAX_DELAY);
                self.status_message = format!("Delay {}ms", self.delay.as_millis());
            }
            _ => {}
        }
    }
}

impl<B: Backend> Renderer for App<B> {
    type Error = io::Error;

    fn render(&mut self, frame: &PuzzleFrame<'_>) -> io::Result<Control> {
        self.show(frame)?;
        if !frame.is_solved() {
            self.pace()?;
        }
        if self.should_quit {
            Ok(Control::Quit)
        } else {
            Ok(Control::Continue)
        }
    }
}

/// Lay out and draw every pane
fn render(
    frame: &mut Frame,
    snapshot: &Snapshot,
    colors: &[Rgb],
    moves: &[MoveRecord],
    status: StatusRenderData,
) {
    let size = frame.area();

    // Panes on top, status bar at bottom
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(size);

    // Towers on the left, counter and move log on the right
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(main_chunks[0]);

    let right_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(columns[1]);

    render_towers_pane(frame, columns[0], snapshot, colors);
    render_counter_pane(frame, right_rows[0], snapshot);
    render_moves_pane(frame, right_rows[1], moves, colors);
    render_status_bar(frame, main_chunks[1], status);
}
