//! Counter pane: the per-disk bit vector driving the moves

use crate::snapshot::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the counter pane
pub fn render_counter_pane(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let block = Block::default()
        .title(" Counter ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let paragraph = Paragraph::new(counter_lines(snapshot)).block(block);
    frame.render_widget(paragraph, area);
}

pub fn counter_lines(snapshot: &Snapshot) -> Vec<Line<'static>> {
    let moved = snapshot.last_move.map(|m| m.rank);
    let width = snapshot.counter.len();

    let mut bits: Vec<Span<'static>> = snapshot
        .counter
        .chars()
        .enumerate()
        .map(|(i, c)| {
            // Most significant bit is printed first
            let rank = width - 1 - i;
            let mut style = if c == '1' {
                Style::default().fg(DEFAULT_THEME.bit_set)
            } else {
                Style::default().fg(DEFAULT_THEME.bit_clear)
            };
            if moved == Some(rank) {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            Span::styled(c.to_string(), style)
        })
        .collect();

    let value = u64::from_str_radix(&snapshot.counter, 2).unwrap_or(0);
    bits.insert(0, Span::raw(" "));
    bits.push(Span::styled(
        format!(" = {}", value),
        Style::default().fg(DEFAULT_THEME.number),
    ));

    let wraps = Line::from(Span::styled(
        format!(" wraps: {}", snapshot.stats.wraps),
        Style::default().fg(DEFAULT_THEME.comment),
    ));

    vec![Line::from(bits), wraps]
}
