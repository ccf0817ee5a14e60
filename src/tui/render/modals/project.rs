//! Project detail modal

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::{centered_rect_absolute, modal_height};
use crate::app::{App, PressTarget};
use crate::content::Project;
use crate::focus::{ModalControl, ModalSession};
use crate::tui::render::colors;
use crate::tui::render::page::preview_label;
use crate::tui::render::text::wrap;

/// Percentage of the frame width the modal takes.
const MODAL_WIDTH_PERCENT: u16 = 70;

/// Gap between buttons.
const BUTTON_GAP: u16 = 2;

/// Where the modal and its buttons are on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalLayout {
    /// Outer rect, borders included.
    pub area: Rect,
    /// Each control's clickable rect.
    pub buttons: Vec<(ModalControl, Rect)>,
}

impl ModalLayout {
    /// Control under `(x, y)`.
    #[must_use]
    pub fn button_at(&self, x: u16, y: u16) -> Option<ModalControl> {
        self.buttons
            .iter()
            .find(|(_, rect)| super::rect_contains(*rect, x, y))
            .map(|(control, _)| *control)
    }
}

fn content_lines(app: &App, project: &Project, width: usize) -> Vec<Line<'static>> {
    let mut title = vec![Span::styled(
        project.title.clone(),
        Style::default()
            .fg(colors::ACCENT)
            .add_modifier(Modifier::BOLD),
    )];
    if project.featured {
        title.push(Span::styled(
            "  ★ Featured",
            Style::default().fg(colors::FEATURED),
        ));
    }

    let mut lines = vec![
        Line::from(title),
        Line::from(Span::styled(
            project.duration.clone(),
            Style::default().fg(colors::TEXT_DIM),
        )),
        Line::default(),
    ];
    lines.extend(wrap(project.full_description(), width).into_iter().map(|line| {
        Line::from(Span::styled(line, Style::default().fg(colors::TEXT_PRIMARY)))
    }));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Technologies",
        Style::default().fg(colors::TEXT_DIM),
    )));
    lines.extend(
        wrap(&project.technologies.join(" · "), width)
            .into_iter()
            .map(|line| Line::from(Span::styled(line, Style::default().fg(colors::ACCENT)))),
    );
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        preview_label(app, project),
        Style::default().fg(colors::TEXT_DIM),
    )));
    for (label, url) in [
        ("Live demo: ", project.live_url()),
        ("Repository: ", project.github_url()),
    ] {
        if let Some(url) = url {
            lines.push(Line::from(vec![
                Span::styled(label, Style::default().fg(colors::TEXT_DIM)),
                Span::styled(url.to_string(), Style::default().fg(colors::SELECTED)),
            ]));
        }
    }
    lines
}

fn button_spans(app: &App, session: &ModalSession) -> Vec<(ModalControl, Span<'static>)> {
    session
        .trap()
        .members()
        .iter()
        .map(|&control| {
            let mut style = Style::default().fg(colors::TEXT_PRIMARY);
            if control == session.focused() {
                style = style
                    .fg(colors::SELECTED)
                    .add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }
            if app.is_pulsing(PressTarget::Modal(control)) {
                style = style.bg(colors::SURFACE_HIGHLIGHT);
            }
            (control, Span::styled(format!("[ {} ]", control.label()), style))
        })
        .collect()
}

fn text_width(frame_area: Rect) -> usize {
    let outer = usize::from(frame_area.width) * usize::from(MODAL_WIDTH_PERCENT) / 100;
    outer.saturating_sub(4).max(10)
}

fn geometry(
    app: &App,
    session: &ModalSession,
    frame_area: Rect,
) -> Option<(Rect, Vec<Line<'static>>, Vec<(ModalControl, Span<'static>)>)> {
    let project = app.portfolio()?.project(session.project())?;
    let lines = content_lines(app, project, text_width(frame_area));
    // Content, a spacer row, then the button row.
    let height = modal_height(lines.len() + 2, frame_area);
    let area = centered_rect_absolute(MODAL_WIDTH_PERCENT, height, frame_area);
    Some((area, lines, button_spans(app, session)))
}

fn button_row(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(2),
        y: area.y.saturating_add(area.height.saturating_sub(2)),
        width: area.width.saturating_sub(4),
        height: 1,
    }
}

/// Compute where the modal for `session` is drawn, for mouse hit-tests.
#[must_use]
pub fn project_modal_layout(
    app: &App,
    session: &ModalSession,
    frame_area: Rect,
) -> Option<ModalLayout> {
    let (area, _, buttons) = geometry(app, session, frame_area)?;
    let row = button_row(area);
    let mut x = row.x;
    let buttons = buttons
        .into_iter()
        .map(|(control, span)| {
            let width = u16::try_from(span.width()).unwrap_or(u16::MAX);
            let rect = Rect {
                x,
                y: row.y,
                width,
                height: 1,
            };
            x = x.saturating_add(width).saturating_add(BUTTON_GAP);
            (control, rect)
        })
        .collect();
    Some(ModalLayout { area, buttons })
}

/// Render the project detail modal
pub fn render_project_modal(frame: &mut Frame<'_>, app: &App, session: &ModalSession) {
    let Some((area, lines, buttons)) = geometry(app, session, frame.area()) else {
        return;
    };

    let block = Block::default()
        .title(" Project ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::SELECTED))
        .style(Style::default().bg(colors::MODAL_BG));
    let inner = block.inner(area);
    let content = Rect {
        x: inner.x.saturating_add(1),
        width: inner.width.saturating_sub(2),
        height: inner.height.saturating_sub(2),
        ..inner
    };

    let gap = " ".repeat(usize::from(BUTTON_GAP));
    let mut row: Vec<Span<'static>> = Vec::new();
    for (index, (_, span)) in buttons.into_iter().enumerate() {
        if index > 0 {
            row.push(Span::raw(gap.clone()));
        }
        row.push(span);
    }

    frame.render_widget(Clear, area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(lines), content);
    frame.render_widget(Paragraph::new(Line::from(row)), button_row(area));
}
