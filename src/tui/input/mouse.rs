//! Mouse input handling (click-to-focus, wheel scrolling).

use crate::app::{App, Mode};
use crate::tui::render::modals::{project_modal_layout, rect_contains};
use crate::tui::render::{nav_hits, screen_areas};
use ratatui::{
    crossterm::event::{MouseButton, MouseEvent, MouseEventKind},
    layout::Rect,
};

/// Rows moved per wheel notch.
const WHEEL_ROWS: isize = 3;

/// Handle a mouse event.
///
/// Left clicks focus and activate controls, navigate from the header and
/// dismiss the project modal from its backdrop. The wheel scrolls the page.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent, frame_area: Rect) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            handle_left_click(app, mouse.column, mouse.row, frame_area);
        }
        MouseEventKind::ScrollDown if matches!(app.mode(), Mode::Page) => {
            app.scroll_by(WHEEL_ROWS);
        }
        MouseEventKind::ScrollUp if matches!(app.mode(), Mode::Page) => {
            app.scroll_by(-WHEEL_ROWS);
        }
        _ => {}
    }
}

fn handle_left_click(app: &mut App, x: u16, y: u16, frame_area: Rect) {
    match app.mode() {
        Mode::ProjectModal(session) => {
            let Some(layout) = project_modal_layout(app, session, frame_area) else {
                return;
            };
            if let Some(control) = layout.button_at(x, y) {
                app.press_modal(control);
            } else if !rect_contains(layout.area, x, y) {
                // Clicking the backdrop is equivalent to pressing Escape.
                app.close_modal();
            }
        }
        Mode::Help => app.toggle_help(),
        Mode::LoadFailed(_) => {}
        Mode::Page => {
            let areas = screen_areas(frame_area);
            if rect_contains(areas.header, x, y) {
                handle_header_click(app, x, areas.header);
            } else if rect_contains(areas.page, x, y) {
                let row = app.viewport().offset() + usize::from(y - areas.page.y);
                match app.layout().target_at(row) {
                    Some(target) => app.click(target),
                    None => app.blur(),
                }
            }
        }
    }
}

fn handle_header_click(app: &mut App, x: u16, header: Rect) {
    let hit = nav_hits(app, header)
        .into_iter()
        .find(|&(_, start, end)| x >= start && x < end);
    if let Some((section, _, _)) = hit {
        app.go_to_section(section);
    }
}
