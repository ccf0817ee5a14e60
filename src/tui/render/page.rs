//! The scrolling page: every section laid out as one column of lines.
//!
//! Building the page also measures it. Section extents and the rows taken by
//! each focusable control are collected into a [`PageLayout`] so the app can
//! track the active section, scroll focus into view and hit-test clicks.

use super::colors;
use super::text::wrap;
use crate::app::{
    App, PageFocus, PageLayout, PressTarget, Preview, SectionFault, TargetRegion, TextInput, guard,
};
use crate::contact::{Field, SubmitState};
use crate::content::{Portfolio, Project, Skill};
use crate::nav::{Section, SectionBounds};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

/// Columns of indentation before section content.
const INDENT: &str = "  ";

/// Cells in a proficiency bar.
const BAR_CELLS: u16 = 20;

/// Minimum rows shown for the message input.
const MESSAGE_ROWS: usize = 3;

/// Banner shown above the form after a failed validation.
pub const INVALID_BANNER: &str = "Please fix the errors below before submitting.";

/// Notice shown after a successful delivery.
pub const SENT_NOTICE: &str = "Thank you for your message! I'll get back to you soon.";

/// Notice shown after a failed delivery.
pub const FAILED_NOTICE: &str = "Your message could not be sent. Please try again.";

/// The built page.
#[derive(Debug, Default)]
pub struct PageDoc {
    /// Every row of the page.
    pub lines: Vec<Line<'static>>,
    /// Measured geometry.
    pub layout: PageLayout,
    /// Sections that panicked while building.
    pub faults: Vec<SectionFault>,
}

/// Lines of one section plus the controls inside it, relative to the
/// section's first row.
#[derive(Debug, Default)]
struct SectionBody {
    lines: Vec<Line<'static>>,
    targets: Vec<TargetRegion>,
}

impl SectionBody {
    fn push(&mut self, line: impl Into<Line<'static>>) {
        self.lines.push(line.into());
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn len(&self) -> usize {
        self.lines.len()
    }

    /// Record that rows `start..` (up to now) belong to `target`.
    fn mark(&mut self, target: PageFocus, start: usize) {
        self.targets.push(TargetRegion {
            target,
            top: start,
            height: self.len().saturating_sub(start).max(1),
        });
    }

    fn heading(&mut self, title: &str, width: usize) {
        let rule = "─".repeat(width.saturating_sub(title.chars().count() + 1));
        self.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(
                title.to_string(),
                Style::default()
                    .fg(colors::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(rule, Style::default().fg(colors::BORDER)),
        ]));
        self.blank();
    }

    fn paragraph(&mut self, text: &str, width: usize, style: Style) {
        for line in wrap(text, width) {
            self.push(Line::from(vec![
                Span::raw(INDENT),
                Span::styled(line, style),
            ]));
        }
    }
}

/// Build the page for a viewport `width` columns wide and `height` rows tall.
///
/// Sections already faulted stay on their fallback; sections that panic now
/// are reported in [`PageDoc::faults`].
pub fn build(app: &App, width: u16, height: u16) -> PageDoc {
    let Some(portfolio) = app.portfolio() else {
        return PageDoc::default();
    };
    let text_width = usize::from(width).saturating_sub(INDENT.len() * 2).max(10);

    let mut doc = PageDoc::default();
    for section in Section::ALL {
        let body = if let Some(message) = app.boundaries().fault(section) {
            fallback(section, message, text_width)
        } else {
            match guard(section, || build_section(section, app, portfolio, text_width)) {
                Ok(body) => body,
                Err(fault) => {
                    let body = fallback(section, &fault.message, text_width);
                    doc.faults.push(fault);
                    body
                }
            }
        };

        let top = doc.lines.len();
        let mut lines = body.lines;
        if section == Section::Contact {
            // Let the last section reach the top of the viewport.
            lines.resize(lines.len().max(usize::from(height)), Line::default());
        }
        doc.layout.sections.push(SectionBounds {
            section,
            top,
            height: lines.len(),
        });
        doc.layout
            .targets
            .extend(body.targets.into_iter().map(|region| TargetRegion {
                top: region.top + top,
                ..region
            }));
        doc.lines.extend(lines);
    }
    doc.layout.content_height = doc.lines.len();
    doc
}

fn build_section(section: Section, app: &App, portfolio: &Portfolio, width: usize) -> SectionBody {
    match section {
        Section::Hero => hero(portfolio, width),
        Section::About => about(portfolio, width),
        Section::Skills => skills(portfolio, width),
        Section::Projects => projects(app, portfolio, width),
        Section::Contact => contact(app, width),
    }
}

fn fallback(section: Section, message: &str, width: usize) -> SectionBody {
    let mut body = SectionBody::default();
    body.heading(section.label(), width);
    body.push(Line::from(vec![
        Span::raw(INDENT),
        Span::styled(
            format!("⚠ The {} section failed to render.", section.label()),
            Style::default()
                .fg(colors::ACCENT_WARNING)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    body.paragraph(message, width, Style::default().fg(colors::TEXT_MUTED));
    body.push(Line::from(vec![
        Span::raw(INDENT),
        Span::styled("[r] retry  [R] reload", Style::default().fg(colors::TEXT_DIM)),
    ]));
    body.blank();
    body
}

fn hero(portfolio: &Portfolio, width: usize) -> SectionBody {
    let info = &portfolio.personal;
    let mut body = SectionBody::default();
    body.blank();
    body.push(Line::from(vec![
        Span::raw(INDENT),
        Span::styled(
            info.name.clone(),
            Style::default()
                .fg(colors::ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    body.push(Line::from(vec![
        Span::raw(INDENT),
        Span::styled(info.title.clone(), Style::default().fg(colors::TEXT_PRIMARY)),
    ]));
    body.blank();
    body.paragraph(
        &info.introduction,
        width,
        Style::default().fg(colors::TEXT_PRIMARY),
    );
    body.blank();
    body.push(Line::from(vec![
        Span::raw(INDENT),
        Span::styled(
            "] next section · Tab focus projects and the contact form · ? help",
            Style::default().fg(colors::TEXT_MUTED),
        ),
    ]));
    body.blank();
    body
}

fn about(portfolio: &Portfolio, width: usize) -> SectionBody {
    let info = &portfolio.personal;
    let mut body = SectionBody::default();
    body.heading(Section::About.label(), width);
    body.paragraph(&info.about, width, Style::default().fg(colors::TEXT_PRIMARY));
    body.blank();

    let primary: Vec<&str> = portfolio
        .primary_expertise()
        .map(|skill| skill.name.as_str())
        .collect();
    if !primary.is_empty() {
        body.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled("Primary expertise: ", Style::default().fg(colors::TEXT_DIM)),
            Span::styled(
                primary.join(", "),
                Style::default().fg(colors::TEXT_PRIMARY),
            ),
        ]));
    }
    body.push(Line::from(vec![
        Span::raw(INDENT),
        Span::styled("Email: ", Style::default().fg(colors::TEXT_DIM)),
        Span::styled(info.email.clone(), Style::default().fg(colors::TEXT_PRIMARY)),
    ]));
    for link in &info.social_links {
        body.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(
                format!("{:<10}", link.platform),
                Style::default().fg(colors::TEXT_DIM),
            ),
            Span::styled(link.url.clone(), Style::default().fg(colors::SELECTED)),
        ]));
    }
    body.blank();
    body
}

fn proficiency_bar(skill: &Skill) -> [Span<'static>; 2] {
    let filled = skill.proficiency.percent() * BAR_CELLS / 100;
    [
        Span::styled(
            "█".repeat(usize::from(filled)),
            Style::default().fg(colors::BAR_FILL),
        ),
        Span::styled(
            "░".repeat(usize::from(BAR_CELLS - filled)),
            Style::default().fg(colors::BAR_EMPTY),
        ),
    ]
}

fn skills(portfolio: &Portfolio, width: usize) -> SectionBody {
    let mut body = SectionBody::default();
    body.heading(Section::Skills.label(), width);

    for group in portfolio.skill_groups() {
        body.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(
                group.category.clone(),
                Style::default()
                    .fg(colors::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        for skill in &group.skills {
            let marker = if skill.is_primary_expertise() {
                Span::styled("★ ", Style::default().fg(colors::FEATURED))
            } else {
                Span::raw("  ")
            };
            let mut spans = vec![
                Span::raw(INDENT),
                marker,
                Span::styled(
                    format!("{:<16} ", skill.name),
                    Style::default().fg(colors::TEXT_PRIMARY),
                ),
            ];
            spans.extend(proficiency_bar(skill));
            spans.push(Span::styled(
                format!(" {}", skill.proficiency),
                Style::default().fg(colors::TEXT_DIM),
            ));
            if let Some(years) = skill.shown_years() {
                spans.push(Span::styled(
                    format!(" · {years} yr{}", if years == 1 { "" } else { "s" }),
                    Style::default().fg(colors::TEXT_MUTED),
                ));
            }
            body.push(Line::from(spans));
        }
        body.blank();
    }
    body
}

/// How a card or modal describes the project's preview image.
pub fn preview_label(app: &App, project: &Project) -> String {
    match app.previews().get(&project.id) {
        None => "Preview: loading…".to_string(),
        Some(Preview::Placeholder) => "Preview: no image".to_string(),
        Some(Preview::Image(path)) => format!(
            "Preview: {}",
            path.file_name()
                .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
        ),
    }
}

fn project_card(body: &mut SectionBody, app: &App, index: usize, project: &Project, width: usize) {
    let target = PageFocus::Project(index);
    let focused = app.focus() == Some(target);
    let pressed = app.is_pulsing(PressTarget::Page(target));
    let bar_style = Style::default().fg(if focused {
        colors::SELECTED
    } else {
        colors::BORDER
    });
    let bar = || Span::styled("▌ ", bar_style);

    let mut title_style = Style::default()
        .fg(colors::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD);
    if focused {
        title_style = title_style.fg(colors::SELECTED);
    }
    if pressed {
        title_style = title_style.bg(colors::SURFACE_HIGHLIGHT);
    }

    let start = body.len();
    let mut title = vec![
        Span::raw(INDENT),
        bar(),
        Span::styled(project.title.clone(), title_style),
    ];
    if project.featured {
        title.push(Span::styled(
            "  ★ Featured",
            Style::default().fg(colors::FEATURED),
        ));
    }
    body.push(Line::from(title));

    for line in wrap(&project.description, width.saturating_sub(2)) {
        body.push(Line::from(vec![
            Span::raw(INDENT),
            bar(),
            Span::styled(line, Style::default().fg(colors::TEXT_PRIMARY)),
        ]));
    }
    body.push(Line::from(vec![
        Span::raw(INDENT),
        bar(),
        Span::styled(
            format!("{} · {}", project.duration, preview_label(app, project)),
            Style::default().fg(colors::TEXT_DIM),
        ),
    ]));

    let (shown, more) = project.card_technologies();
    let mut tech = vec![
        Span::raw(INDENT),
        bar(),
        Span::styled(shown.join(" · "), Style::default().fg(colors::ACCENT)),
    ];
    if more > 0 {
        tech.push(Span::styled(
            format!("  +{more}"),
            Style::default().fg(colors::TEXT_MUTED),
        ));
    }
    body.push(Line::from(tech));
    body.mark(target, start);
    body.blank();
}

fn projects(app: &App, portfolio: &Portfolio, width: usize) -> SectionBody {
    let mut body = SectionBody::default();
    body.heading(Section::Projects.label(), width);
    body.push(Line::from(vec![
        Span::raw(INDENT),
        Span::styled(
            format!(
                "{} projects · {} featured · Enter or click for details",
                portfolio.projects.len(),
                portfolio.featured_count()
            ),
            Style::default().fg(colors::TEXT_MUTED),
        ),
    ]));
    body.blank();
    for (index, project) in portfolio.projects.iter().enumerate() {
        project_card(&mut body, app, index, project, width);
    }
    body
}

/// Input rows for a draft, with a block cursor when focused.
fn input_rows(input: &TextInput, field: Field, focused: bool) -> Vec<Vec<Span<'static>>> {
    let text_style = Style::default().fg(colors::TEXT_PRIMARY).bg(colors::INPUT_BG);
    let cursor_style = Style::default()
        .fg(colors::INPUT_BG)
        .bg(colors::TEXT_PRIMARY);

    if input.buffer.is_empty() {
        let mut row = Vec::new();
        if focused {
            row.push(Span::styled(" ", cursor_style));
        }
        row.push(Span::styled(
            field.placeholder(),
            Style::default().fg(colors::TEXT_MUTED).bg(colors::INPUT_BG),
        ));
        return vec![row];
    }

    let mut rows = Vec::new();
    let mut start = 0;
    for line in input.buffer.split('\n') {
        let end = start + line.len();
        let row = if focused && (start..=end).contains(&input.cursor) {
            let at = input.cursor - start;
            let (before, rest) = line.split_at(at);
            let mut chars = rest.chars();
            let under = chars.next().map_or_else(|| " ".to_string(), String::from);
            vec![
                Span::styled(before.to_string(), text_style),
                Span::styled(under, cursor_style),
                Span::styled(chars.as_str().to_string(), text_style),
            ]
        } else {
            vec![Span::styled(line.to_string(), text_style)]
        };
        rows.push(row);
        start = end + 1;
    }
    rows
}

fn contact(app: &App, width: usize) -> SectionBody {
    let form = app.contact();
    let mut body = SectionBody::default();
    body.heading(Section::Contact.label(), width);
    body.paragraph(
        "Have a project in mind or just want to say hello? Send a message.",
        width,
        Style::default().fg(colors::TEXT_PRIMARY),
    );
    body.blank();

    if !form.errors().is_empty() {
        body.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(
                format!("⚠ {INVALID_BANNER}"),
                Style::default()
                    .fg(colors::ACCENT_NEGATIVE)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        body.blank();
    }

    for field in Field::ALL {
        let target = PageFocus::Field(field);
        let focused = app.focus() == Some(target);
        let error = form.errors().get(field);
        let start = body.len();

        let label_color = if error.is_some() {
            colors::ACCENT_NEGATIVE
        } else if focused {
            colors::SELECTED
        } else {
            colors::TEXT_DIM
        };
        body.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(
                format!("{} *", field.label()),
                Style::default().fg(label_color),
            ),
        ]));

        let gutter = Style::default().fg(if focused {
            colors::SELECTED
        } else {
            colors::BORDER
        });
        let mut rows = input_rows(app.drafts().get(field), field, focused);
        if field.is_multiline() && rows.len() < MESSAGE_ROWS {
            rows.resize(MESSAGE_ROWS, Vec::new());
        }
        for row in rows {
            let mut spans = vec![Span::raw(INDENT), Span::styled("│ ", gutter)];
            spans.extend(row);
            body.push(Line::from(spans));
        }
        body.mark(target, start);

        if let Some(message) = error {
            body.push(Line::from(vec![
                Span::raw(INDENT),
                Span::styled(
                    message.to_string(),
                    Style::default().fg(colors::ACCENT_NEGATIVE),
                ),
            ]));
        }
        body.blank();
    }

    let label = match form.state() {
        SubmitState::Idle => "[ Send Message ]",
        SubmitState::Submitting => "[ Sending... ]",
        SubmitState::Submitted => "[ Sent ✓ ]",
    };
    let mut style = if form.can_submit() {
        Style::default()
            .fg(colors::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors::TEXT_MUTED)
    };
    if app.focus() == Some(PageFocus::Send) {
        style = style.fg(colors::SELECTED).add_modifier(Modifier::REVERSED);
    }
    if app.is_pulsing(PressTarget::Page(PageFocus::Send)) {
        style = style.bg(colors::SURFACE_HIGHLIGHT);
    }
    let start = body.len();
    body.push(Line::from(vec![Span::raw(INDENT), Span::styled(label, style)]));
    body.mark(PageFocus::Send, start);
    body.blank();

    let notice = if form.state() == SubmitState::Submitted {
        Some((SENT_NOTICE, colors::ACCENT_POSITIVE))
    } else if form.delivery_failed() {
        Some((FAILED_NOTICE, colors::ACCENT_NEGATIVE))
    } else {
        None
    };
    if let Some((text, color)) = notice {
        body.paragraph(text, width, Style::default().fg(color));
        body.blank();
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::contact::{ContactFormData, SubmitError, Submitter};
    use crate::content::ContentSource;
    use std::sync::Arc;

    #[derive(Debug)]
    struct Never;

    impl Submitter for Never {
        fn submit(&self, _data: &ContactFormData) -> Result<(), SubmitError> {
            Err(SubmitError::NotConfigured)
        }
    }

    fn app() -> App {
        App::new(Config::default(), ContentSource::Embedded, Arc::new(Never))
    }

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_sections_are_contiguous_and_ordered() {
        let doc = build(&app(), 80, 24);
        let sections: Vec<Section> = doc.layout.sections.iter().map(|b| b.section).collect();
        assert_eq!(sections, Section::ALL.to_vec());

        let mut expected_top = 0;
        for bounds in &doc.layout.sections {
            assert_eq!(bounds.top, expected_top);
            expected_top += bounds.height;
        }
        assert_eq!(doc.layout.content_height, doc.lines.len());
        assert!(doc.faults.is_empty());
    }

    #[test]
    fn test_contact_fills_the_viewport() {
        let doc = build(&app(), 80, 60);
        let contact = doc.layout.sections.last().map_or(0, |b| b.height);
        assert!(contact >= 60);
    }

    #[test]
    fn test_every_control_is_measured() {
        let app = app();
        let doc = build(&app, 80, 24);
        let count = app.portfolio().map_or(0, |p| p.projects.len());
        for target in PageFocus::order(count) {
            assert!(doc.layout.region(target).is_some(), "{target:?} not laid out");
        }
    }

    #[test]
    fn test_cards_cap_technologies() {
        let doc = build(&app(), 100, 24);
        assert!(doc.lines.iter().any(|line| text(line).contains("+2")));
    }

    #[test]
    fn test_featured_cards_come_first() {
        let doc = build(&app(), 100, 24);
        let rows: Vec<String> = doc.lines.iter().map(text).collect();
        let position = |title: &str| rows.iter().position(|r| r.contains(title));
        assert!(position("Tallyho").is_some());
        assert!(position("Tallyho") < position("Logship"));
        assert!(position("pgmirror") < position("Logship"));
    }

    #[test]
    fn test_faulted_section_shows_fallback() {
        let mut app = app();
        app.record_faults(vec![SectionFault {
            section: Section::Skills,
            message: "bad data".to_string(),
        }]);
        let doc = build(&app, 80, 24);
        let rows: Vec<String> = doc.lines.iter().map(text).collect();
        assert!(rows.iter().any(|r| r.contains("Skills section failed to render")));
        assert!(rows.iter().any(|r| r.contains("Primary expertise")));
    }

    #[test]
    fn test_input_rows_place_cursor() {
        let input = TextInput {
            buffer: "ab\ncd".to_string(),
            cursor: 4,
        };
        let rows = input_rows(&input, Field::Message, true);
        assert_eq!(rows.len(), 2);
        let second: Vec<&str> = rows[1].iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(second, vec!["c", "d", ""]);
    }
}
