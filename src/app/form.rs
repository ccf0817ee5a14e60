//! Page focus and the contact form: editing, submitting and collecting the
//! worker's result.

use super::feedback::PressTarget;
use super::input::TextInput;
use super::page::PageFocus;
use super::state::{App, Mode};
use crate::contact::{ContactFormData, Field, SubmitError, SubmitTrigger};
use crate::focus::FocusTrap;
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Name of the thread that performs a contact submission.
pub const SUBMIT_THREAD: &str = "folio-contact-submit";

impl App {
    fn project_count(&self) -> usize {
        self.portfolio.as_ref().map_or(0, |p| p.projects.len())
    }

    /// Tab: focus the next page control, wrapping at the end.
    pub fn focus_next(&mut self) {
        self.move_focus(true);
    }

    /// Shift+Tab: focus the previous page control, wrapping at the start.
    pub fn focus_prev(&mut self) {
        self.move_focus(false);
    }

    fn move_focus(&mut self, forward: bool) {
        let Some(mut order) = FocusTrap::new(PageFocus::order(self.project_count())) else {
            return;
        };
        let target = match self.focus {
            Some(current) if order.focus(current) => {
                if forward {
                    order.next()
                } else {
                    order.prev()
                }
            }
            _ if forward => order.current(),
            _ => order.prev(),
        };
        self.set_focus(target);
    }

    /// Focus `target` and scroll it into view.
    pub fn set_focus(&mut self, target: PageFocus) {
        self.focus = Some(target);
        if let Some(region) = self.layout.region(target)
            && self.viewport.ensure_visible(region.top, region.height)
        {
            self.after_scroll(Instant::now());
        }
    }

    /// Esc on the page: drop focus.
    pub const fn blur(&mut self) {
        self.focus = None;
    }

    /// Enter on the focused control.
    ///
    /// Cards open their modal; the single-line inputs and the send button
    /// submit; the message input takes a newline.
    pub fn activate(&mut self) {
        match self.focus {
            None => {}
            Some(PageFocus::Project(index)) => {
                self.press(PressTarget::Page(PageFocus::Project(index)));
                self.open_project(index);
            }
            Some(PageFocus::Field(Field::Message)) => self.type_char('\n'),
            Some(PageFocus::Field(Field::Name | Field::Email)) => self.submit_contact(),
            Some(PageFocus::Send) => {
                self.press(PressTarget::Page(PageFocus::Send));
                self.submit_contact();
            }
        }
    }

    /// Click on a page control: focus it, then act on it.
    ///
    /// Clicking an input only focuses it.
    pub fn click(&mut self, target: PageFocus) {
        self.set_focus(target);
        if target.field().is_none() {
            self.activate();
        }
    }

    /// Whether the focused control is a text input.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, Mode::Page) && self.focus.and_then(PageFocus::field).is_some()
    }

    /// Apply `edit` to the focused field's draft and, if the text changed,
    /// store the sanitized result.
    ///
    /// Ignored while a submission is in flight.
    pub fn edit_field(&mut self, edit: impl FnOnce(&mut TextInput)) {
        let Some(field) = self.focus.and_then(PageFocus::field) else {
            return;
        };
        if !self.contact.is_editable() {
            return;
        }
        let draft = self.drafts.get_mut(field);
        let previous = draft.buffer.clone();
        edit(draft);
        if draft.buffer != previous {
            self.contact.update_field(field, &draft.buffer);
        }
    }

    /// Type `c` into the focused field.
    pub fn type_char(&mut self, c: char) {
        if c == '\n'
            && !self
                .focus
                .and_then(PageFocus::field)
                .is_some_and(Field::is_multiline)
        {
            return;
        }
        self.edit_field(|input| input.insert_char(c));
    }

    /// Validate and, when valid, send the form on a worker thread.
    pub fn submit_contact(&mut self) {
        match self.contact.begin_submit() {
            SubmitTrigger::Blocked => debug!("Submit pressed while disabled"),
            SubmitTrigger::Invalid { focus } => {
                self.set_focus(PageFocus::Field(focus));
                let count = self.contact.errors().len();
                self.announce(format!(
                    "Please fix {count} field{}",
                    if count == 1 { "" } else { "s" }
                ));
            }
            SubmitTrigger::Dispatch(data) => self.dispatch(data),
        }
    }

    fn dispatch(&mut self, data: ContactFormData) {
        let (tx, rx) = mpsc::channel();
        let submitter = Arc::clone(&self.submitter);
        let spawned = thread::Builder::new()
            .name(SUBMIT_THREAD.to_string())
            .spawn(move || {
                let outcome = submitter.submit(&data);
                if tx.send(outcome).is_err() {
                    debug!("Submission finished after the page was reloaded");
                }
            });

        match spawned {
            Ok(_) => {
                info!("Contact submission started");
                self.pending = Some(rx);
                self.announce("Sending message...");
            }
            Err(err) => {
                error!("Failed to start submission worker: {err}");
                self.finish_submission(Err(SubmitError::Interrupted));
            }
        }
    }

    /// Collect the worker's result if it has arrived. Returns true when the
    /// submission finished.
    pub fn poll_submission(&mut self) -> bool {
        let Some(rx) = &self.pending else {
            return false;
        };
        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(mpsc::TryRecvError::Empty) => return false,
            Err(mpsc::TryRecvError::Disconnected) => {
                warn!("Submission worker exited without a result");
                Err(SubmitError::Interrupted)
            }
        };
        self.pending = None;
        self.finish_submission(outcome);
        true
    }

    /// Block until the in-flight submission reports. Returns false when
    /// nothing was in flight.
    pub fn wait_for_submission(&mut self) -> bool {
        let Some(rx) = self.pending.take() else {
            return false;
        };
        let outcome = rx.recv().unwrap_or(Err(SubmitError::Interrupted));
        self.finish_submission(outcome);
        true
    }

    fn finish_submission(&mut self, outcome: Result<(), SubmitError>) {
        let delivered = outcome.is_ok();
        self.contact.finish_submit(outcome);
        self.announce(if delivered {
            "Message sent"
        } else {
            "Message could not be sent"
        });
    }
}
