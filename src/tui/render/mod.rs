//! TUI rendering
//!
//! This module contains all rendering logic for the TUI, organized into:
//! - `colors`: Color palette definitions
//! - `page`: The scrolling page and its measured layout
//! - `modals`: Modal/overlay rendering
//! - `text`: Wrapping helpers

pub mod colors;
pub mod modals;
pub mod page;
pub mod text;

use crate::app::{App, Mode};
use crate::nav::Section;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// The three horizontal bands of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Name and section navigation.
    pub header: Rect,
    /// The scrolling page.
    pub page: Rect,
    /// Announcements and key hints.
    pub status: Rect,
}

/// Split the frame into header, page and status bar.
#[must_use]
pub fn screen_areas(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    ScreenAreas {
        header: chunks[0],
        page: chunks[1],
        status: chunks[2],
    }
}

/// Text at the left of the header.
fn brand(app: &App) -> String {
    app.portfolio()
        .map_or_else(|| "folio".to_string(), |p| p.personal.name.clone())
}

/// Column ranges of the navigation labels in the header, as
/// `(section, first column, one past last column)`.
#[must_use]
pub fn nav_hits(app: &App, header: Rect) -> Vec<(Section, u16, u16)> {
    let mut x = header
        .x
        .saturating_add(u16::try_from(brand(app).chars().count() + 3).unwrap_or(u16::MAX));
    Section::ALL
        .iter()
        .map(|&section| {
            let width = u16::try_from(section.label().chars().count() + 2).unwrap_or(u16::MAX);
            let hit = (section, x, x.saturating_add(width));
            x = x.saturating_add(width + 1);
            hit
        })
        .collect()
}

/// Render the full application UI
///
/// Rebuilding the page also refreshes the layout the app uses for focus,
/// scrolling and mouse hits, so this takes the app mutably.
pub fn render(frame: &mut Frame<'_>, app: &mut App) {
    let areas = screen_areas(frame.area());

    if let Mode::LoadFailed(message) = app.mode() {
        modals::render_load_failed(frame, message);
        render_status_bar(frame, app, areas.status);
        return;
    }

    let doc = page::build(app, areas.page.width, areas.page.height);
    app.record_faults(doc.faults);
    app.set_layout(doc.layout, usize::from(areas.page.height));

    render_header(frame, app, areas.header);
    render_page(frame, app, doc.lines, areas.page);
    render_status_bar(frame, app, areas.status);

    match app.mode() {
        Mode::ProjectModal(session) => modals::render_project_modal(frame, app, session),
        Mode::Help => modals::render_help_overlay(frame, app),
        Mode::Page | Mode::LoadFailed(_) => {}
    }
}

fn render_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let active = app.active_section();
    let mut spans = vec![
        Span::raw(" "),
        Span::styled(
            brand(app),
            Style::default()
                .fg(colors::ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];
    for &section in &Section::ALL {
        let style = if section == active {
            Style::default()
                .fg(colors::SURFACE)
                .bg(colors::SELECTED)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::TEXT_DIM)
        };
        spans.push(Span::styled(format!(" {} ", section.label()), style));
        spans.push(Span::raw(" "));
    }

    let header = Paragraph::new(Line::from(spans)).style(Style::default().bg(colors::SURFACE));
    frame.render_widget(header, area);
}

fn render_page(frame: &mut Frame<'_>, app: &App, lines: Vec<Line<'static>>, area: Rect) {
    let offset = app.viewport().offset();
    let visible: Vec<Line<'static>> = lines
        .into_iter()
        .skip(offset)
        .take(usize::from(area.height))
        .collect();
    frame.render_widget(Paragraph::new(visible), area);
}

/// Render the status bar: the current announcement, or key hints.
pub fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let left_content = match (app.announcement(), app.mode()) {
        (Some(message), _) => Span::styled(
            format!(" {message} "),
            Style::default().fg(colors::ACCENT_POSITIVE),
        ),
        (None, Mode::LoadFailed(_)) => Span::styled(
            " [r] reload  [q] quit ",
            Style::default().fg(colors::TEXT_DIM),
        ),
        (None, Mode::ProjectModal(_)) => Span::styled(
            " [Tab] next control  [Enter] activate  [Esc] close ",
            Style::default().fg(colors::TEXT_DIM),
        ),
        (None, Mode::Page | Mode::Help) => Span::styled(
            format!(" {} ", app.config.keys.status_hints()),
            Style::default().fg(colors::TEXT_DIM),
        ),
    };

    let position = match app.mode() {
        Mode::LoadFailed(_) => String::new(),
        _ => {
            let viewport = app.viewport();
            let percent = if viewport.max_offset() == 0 {
                100
            } else {
                viewport.offset() * 100 / viewport.max_offset()
            };
            format!(" {} {percent}% ", app.active_section().label())
        }
    };
    let position_width = u16::try_from(position.chars().count())
        .unwrap_or(0)
        .min(area.width);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(position_width)])
        .split(area);

    let left = Paragraph::new(Line::from(left_content)).style(Style::default().bg(colors::SURFACE));
    frame.render_widget(left, chunks[0]);

    let right = Paragraph::new(Line::from(Span::styled(
        position,
        Style::default().fg(colors::TEXT_DIM),
    )))
    .style(Style::default().bg(colors::SURFACE))
    .alignment(Alignment::Right);
    frame.render_widget(right, chunks[1]);
}
