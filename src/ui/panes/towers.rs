//! Tower pane rendering
//!
//! Draws the three pegs side by side. Each disk is a colored bar whose width
//! grows with its rank and whose color comes from the disk palette. Bars are
//! stacked from the floor up, bottom disk first, with the bare pole above.
//!
//! # Layout
//!
//! ```text
//! ┌ left ──────┐┌ middle ────┐┌ right (goal)┐
//! │     │      ││     │      ││      │      │
//! │    [0]     ││     │      ││      │      │
//! │   [ 1 ]    ││     │      ││      │      │
//! │▀▀▀▀▀▀▀▀▀▀▀▀││▀▀▀▀▀▀▀▀▀▀▀▀││▀▀▀▀▀▀▀▀▀▀▀▀▀│
//! └────────────┘└────────────┘└─────────────┘
//! ```

use crate::puzzle::{PegId, Rank};
use crate::snapshot::Snapshot;
use crate::ui::palette::Rgb;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render all three towers
pub fn render_towers_pane(frame: &mut Frame, area: Rect, snapshot: &Snapshot, colors: &[Rgb]) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for id in PegId::ALL {
        render_tower(frame, columns[id.index()], id, snapshot, colors);
    }
}

fn render_tower(frame: &mut Frame, area: Rect, id: PegId, snapshot: &Snapshot, colors: &[Rgb]) {
    let is_goal = id == snapshot.goal;
    let moved_here = snapshot.last_move.is_some_and(|m| m.to == id);

    let border_style = if is_goal {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let title = if is_goal {
        format!(" {} (goal) ", id)
    } else {
        format!(" {} ", id)
    };
    let title_style = if moved_here {
        Style::default().fg(DEFAULT_THEME.secondary)
    } else {
        border_style
    };

    let block = Block::default()
        .title(Span::styled(title, title_style))
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    let mut lines = tower_lines(
        &snapshot.layout[id.index()],
        snapshot.num_disks,
        inner.width,
        colors,
    );

    // Keep the floor visible: drop lines from the top when the pane is short
    let height = inner.height as usize;
    if lines.len() > height {
        lines.drain(..lines.len() - height);
    } else {
        let mut padded = vec![Line::default(); height - lines.len()];
        padded.append(&mut lines);
        lines = padded;
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

/// Lines for one tower, top of the pole first and the floor last
pub fn tower_lines(
    ranks: &[Rank],
    num_disks: usize,
    width: u16,
    colors: &[Rgb],
) -> Vec<Line<'static>> {
    let width = width as usize;
    let max_half = width.saturating_sub(1) / 2;
    let mut lines = Vec::with_capacity(num_disks + 2);

    // Pole tip and empty slots above the stack
    for _ in ranks.len()..=num_disks {
        lines.push(pole_line(width));
    }

    for &rank in ranks.iter().rev() {
        let half = (rank + 1).min(max_half);
        let bar = 2 * half + 1;
        let pad = width.saturating_sub(bar) / 2;
        let color = colors
            .get(rank)
            .map(|&rgb| Color::from(rgb))
            .unwrap_or(DEFAULT_THEME.primary);
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(pad)),
            Span::styled(
                format!("{:^bar$}", rank, bar = bar),
                Style::default()
                    .bg(color)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    lines.push(Line::from(Span::styled(
        "▀".repeat(width),
        Style::default().fg(DEFAULT_THEME.floor),
    )));
    lines
}

fn pole_line(width: usize) -> Line<'static> {
    let pad = width.saturating_sub(1) / 2;
    Line::from(vec![
        Span::raw(" ".repeat(pad)),
        Span::styled("│", Style::default().fg(DEFAULT_THEME.pole)),
    ])
}
