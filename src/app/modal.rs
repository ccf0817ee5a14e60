//! Project modal: open, trap focus, act on controls, close.

use super::feedback::PressTarget;
use super::page::PageFocus;
use super::state::{App, Mode};
use crate::focus::{ModalControl, ModalSession};
use tracing::{info, warn};

impl App {
    /// Open the detail modal for the project at display index `index`.
    ///
    /// Page scrolling is locked until the modal closes.
    pub fn open_project(&mut self, index: usize) {
        if !matches!(self.mode, Mode::Page) {
            return;
        }
        let Some(project) = self.portfolio.as_ref().and_then(|p| p.project(index)) else {
            warn!(index, "No project at index");
            return;
        };
        self.previews.load(project, &self.source);
        let session = ModalSession::open(index, project, &mut self.viewport);
        let title = project.title.clone();
        self.mode = Mode::ProjectModal(session);
        self.announce(format!("Opened project details for {title}"));
    }

    /// Close the modal, restore the page offset and return focus to the card.
    pub fn close_modal(&mut self) {
        let Mode::ProjectModal(session) = std::mem::take(&mut self.mode) else {
            return;
        };
        let index = session.close(&mut self.viewport);
        self.focus = Some(PageFocus::Project(index));
    }

    /// Open modal session, if any.
    #[must_use]
    pub const fn modal(&self) -> Option<&ModalSession> {
        match &self.mode {
            Mode::ProjectModal(session) => Some(session),
            Mode::Page | Mode::Help | Mode::LoadFailed(_) => None,
        }
    }

    /// Tab inside the modal.
    pub fn modal_focus_next(&mut self) {
        if let Mode::ProjectModal(session) = &mut self.mode {
            session.focus_next();
        }
    }

    /// Shift+Tab inside the modal.
    pub fn modal_focus_prev(&mut self) {
        if let Mode::ProjectModal(session) = &mut self.mode {
            session.focus_prev();
        }
    }

    /// Enter inside the modal.
    pub fn activate_modal(&mut self) {
        if let Some(control) = self.modal().map(ModalSession::focused) {
            self.press_modal(control);
        }
    }

    /// Focus and activate `control` (keyboard or click).
    pub fn press_modal(&mut self, control: ModalControl) {
        let Mode::ProjectModal(session) = &mut self.mode else {
            return;
        };
        if !session.focus(control) {
            return;
        }
        let index = session.project();
        self.press(PressTarget::Modal(control));

        let url = self
            .portfolio
            .as_ref()
            .and_then(|p| p.project(index))
            .and_then(|project| match control {
                ModalControl::Close => None,
                ModalControl::LiveDemo => project.live_url(),
                ModalControl::GitHub => project.github_url(),
            })
            .map(str::to_string);

        match (control, url) {
            (ModalControl::Close, _) => self.close_modal(),
            (_, Some(url)) => match (self.opener)(&url) {
                Ok(()) => {
                    info!(%url, "Opened link");
                    self.announce(format!("Opened {url}"));
                }
                Err(err) => {
                    warn!(%url, "Failed to open link: {err}");
                    self.announce(format!("Could not open {url}"));
                }
            },
            (_, None) => {}
        }
    }
}
