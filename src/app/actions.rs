//! Keybinding action dispatch.

use super::state::{App, Mode};
use crate::config::Action;
use crate::nav::Section;
use tracing::debug;

impl App {
    /// Run a bound action.
    ///
    /// While content failed to load only retry, reload and quit do anything.
    pub fn handle_action(&mut self, action: Action) {
        debug!(?action, "Handling action");
        if matches!(self.mode, Mode::LoadFailed(_))
            && !matches!(action, Action::Reload | Action::Retry | Action::Quit)
        {
            return;
        }

        match action {
            Action::ScrollUp => self.scroll_by(-1),
            Action::ScrollDown => self.scroll_by(1),
            Action::PageUp => self.scroll_page(false),
            Action::PageDown => self.scroll_page(true),
            Action::ScrollTop => self.scroll_to_edge(false),
            Action::ScrollBottom => self.scroll_to_edge(true),
            Action::NextSection => self.step_section(true),
            Action::PrevSection => self.step_section(false),
            Action::GoHome => self.go_to_section(Section::Hero),
            Action::GoAbout => self.go_to_section(Section::About),
            Action::GoSkills => self.go_to_section(Section::Skills),
            Action::GoProjects => self.go_to_section(Section::Projects),
            Action::GoContact => self.go_to_section(Section::Contact),
            Action::Retry if matches!(self.mode, Mode::LoadFailed(_)) => self.reload(),
            Action::Retry => self.retry_sections(),
            Action::Reload => self.reload(),
            Action::Help => self.toggle_help(),
            Action::Quit => self.quit(),
        }
    }
}
