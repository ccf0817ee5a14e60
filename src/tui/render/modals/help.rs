//! Help overlay rendering

use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::{centered_rect_absolute, modal_height};
use crate::app::App;
use crate::config::Action;
use crate::tui::render::colors;

/// Lines of the help overlay for the app's current bindings.
pub fn help_lines(app: &App) -> Vec<Line<'static>> {
    let keys = &app.config.keys;
    let mut help_text = vec![
        Line::from(Span::styled(
            "Keybindings",
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    let mut current_group = None;
    for &action in Action::ALL_FOR_HELP {
        let group = action.group();

        // Add section header when group changes
        if current_group != Some(group) {
            if current_group.is_some() {
                help_text.push(Line::from(""));
            }
            help_text.push(Line::from(Span::styled(
                group.title(),
                Style::default().fg(colors::TEXT_DIM),
            )));
            current_group = Some(group);
        }

        help_text.push(Line::from(Span::styled(
            keys.help_line(action),
            Style::default().fg(colors::TEXT_PRIMARY),
        )));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        "Focus",
        Style::default().fg(colors::TEXT_DIM),
    )));
    for (key, description) in [
        ("Tab/Shift+Tab", "Next/previous control"),
        ("Enter", "Open project, send message"),
        ("Esc", "Close dialog, leave input"),
    ] {
        help_text.push(Line::from(Span::styled(
            format!("  {key:<16} {description}"),
            Style::default().fg(colors::TEXT_PRIMARY),
        )));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        "Any key closes",
        Style::default().fg(colors::TEXT_MUTED),
    )));
    help_text
}

/// Render the help overlay
pub fn render_help_overlay(frame: &mut Frame<'_>, app: &App) {
    let help_text = help_lines(app);
    let height = modal_height(help_text.len(), frame.area());
    let area = centered_rect_absolute(50, height, frame.area());

    let paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::BORDER)),
        )
        .style(Style::default().bg(colors::MODAL_BG));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
