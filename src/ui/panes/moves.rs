//! Move log pane

use crate::puzzle::MoveRecord;
use crate::ui::palette::Rgb;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the move log, newest move at the bottom
pub fn render_moves_pane(frame: &mut Frame, area: Rect, moves: &[MoveRecord], colors: &[Rgb]) {
    let block = Block::default()
        .title(" Moves ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if moves.is_empty() {
        let paragraph = Paragraph::new("(no moves yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1
    let skip = moves.len().saturating_sub(visible_height);

    let items: Vec<ListItem> = moves
        .iter()
        .skip(skip)
        .map(|m| ListItem::new(move_line(m, colors)))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

pub fn move_line(record: &MoveRecord, colors: &[Rgb]) -> Line<'static> {
    let disk_color = colors
        .get(record.rank)
        .map(|&rgb| Color::from(rgb))
        .unwrap_or(DEFAULT_THEME.fg);

    Line::from(vec![
        Span::styled(
            format!("{:>4} ", record.number),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!("disk {}", record.rank),
            Style::default().fg(disk_color),
        ),
        Span::styled(
            format!(" {} → {}", record.from, record.to),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
    ])
}
