//! Full-page error shown when portfolio content fails to load

use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::{centered_rect_absolute, modal_height};
use crate::tui::render::colors;
use crate::tui::render::text::wrap;

/// Render the load failure with its reason and the way out
pub fn render_load_failed(frame: &mut Frame<'_>, message: &str) {
    // Wrap the message to fit within the modal width after padding
    let max_line_width = usize::from(frame.area().width / 2).saturating_sub(4).max(20);
    let mut lines: Vec<Line<'_>> = Vec::new();

    lines.push(Line::from(Span::styled(
        "✖ Could not load the portfolio",
        Style::default()
            .fg(colors::MODAL_BORDER_ERROR)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    for line in wrap(message, max_line_width) {
        lines.push(Line::from(Span::styled(
            line,
            Style::default().fg(colors::TEXT_PRIMARY),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press r to reload or q to quit",
        Style::default().fg(colors::TEXT_MUTED),
    )));

    let height = modal_height(lines.len(), frame.area()).max(7.min(frame.area().height));
    let area = centered_rect_absolute(50, height, frame.area());

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::MODAL_BORDER_ERROR)),
        )
        .style(Style::default().bg(colors::MODAL_BG));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
