//! Modal rendering utilities and implementations

mod error;
mod help;
mod project;

pub use error::render_load_failed;
pub use help::render_help_overlay;
pub use project::{project_modal_layout, render_project_modal};

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Create a centered rect with percentage width and absolute height
pub fn centered_rect_absolute(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical_padding = area.height.saturating_sub(height) / 2;
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(vertical_padding),
            Constraint::Length(height),
            Constraint::Length(vertical_padding),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Whether the cell at `(x, y)` lies inside `rect`.
#[must_use]
pub const fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x
        && x < rect.x.saturating_add(rect.width)
        && y >= rect.y
        && y < rect.y.saturating_add(rect.height)
}

/// Height for `lines` rows of content plus borders, limited to the frame.
fn modal_height(lines: usize, area: Rect) -> u16 {
    let max_height = area.height.saturating_sub(2);
    u16::try_from(lines + 2)
        .unwrap_or(u16::MAX)
        .min(max_height)
        .max(5.min(max_height))
}
