//! Contact submission state machine.
//!
//! ```text
//! Idle --submit(invalid)--> Idle (errors set, focus first invalid field)
//! Idle --submit(valid)----> Submitting --ok----> Submitted (terminal)
//!                                      --error-> Idle (retry allowed)
//! ```
//!
//! The submit control is disabled while `Submitting`, after `Submitted`, and
//! whenever the error map is non-empty. That rule is the only guard against
//! duplicate submissions.

use super::{
    ContactFormData, Field, SubmitError, ValidationErrors, sanitize_input, validate_contact_form,
};
use tracing::{debug, warn};

/// Where the form is in its submission lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitState {
    /// Editable; submission allowed when the error map is empty.
    #[default]
    Idle,
    /// A delivery is in flight.
    Submitting,
    /// Delivered. The submit control stays disabled from here on.
    Submitted,
}

/// What the caller should do after asking to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitTrigger {
    /// Submit is currently disabled; nothing happened.
    Blocked,
    /// Validation failed; errors are now visible and `focus` is the first invalid field.
    Invalid {
        /// First invalid field in declaration order.
        focus: Field,
    },
    /// Validation passed; deliver this payload and report back via
    /// [`ContactForm::finish_submit`].
    Dispatch(ContactFormData),
}

/// Form values, per-field errors and submission state.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    data: ContactFormData,
    errors: ValidationErrors,
    state: SubmitState,
    delivery_failed: bool,
}

impl ContactForm {
    /// Empty form in `Idle`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            data: ContactFormData {
                name: String::new(),
                email: String::new(),
                message: String::new(),
            },
            errors: ValidationErrors::new(),
            state: SubmitState::Idle,
            delivery_failed: false,
        }
    }

    /// Current (sanitized) values.
    #[must_use]
    pub const fn data(&self) -> &ContactFormData {
        &self.data
    }

    /// Current per-field errors.
    #[must_use]
    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> SubmitState {
        self.state
    }

    /// True when the last delivery attempt failed and no new attempt has started.
    #[must_use]
    pub const fn delivery_failed(&self) -> bool {
        self.delivery_failed
    }

    /// Whether the submit control is enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.state == SubmitState::Idle && self.errors.is_empty()
    }

    /// Whether fields accept edits.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        self.state != SubmitState::Submitting
    }

    /// Store a new raw value for `field`.
    ///
    /// The value is sanitized before it is stored, and any error shown for
    /// that field is cleared. Returns the stored value.
    pub fn update_field(&mut self, field: Field, raw: &str) -> &str {
        if !self.is_editable() {
            return self.data.get(field);
        }
        self.data.set(field, sanitize_input(raw));
        if self.errors.clear_field(field) {
            debug!(%field, "Cleared field error on edit");
        }
        self.data.get(field)
    }

    /// Validate and, if valid, move to `Submitting`.
    pub fn begin_submit(&mut self) -> SubmitTrigger {
        if !self.can_submit() {
            return SubmitTrigger::Blocked;
        }

        let result = validate_contact_form(&self.data);
        if let Some(focus) = result.errors.first_field() {
            debug!(invalid = result.errors.len(), "Contact form failed validation");
            self.errors = result.errors;
            return SubmitTrigger::Invalid { focus };
        }

        self.errors.clear();
        self.delivery_failed = false;
        self.state = SubmitState::Submitting;
        SubmitTrigger::Dispatch(self.data.clone())
    }

    /// Apply the outcome of the delivery started by [`Self::begin_submit`].
    ///
    /// Outcomes arriving in any state other than `Submitting` are ignored.
    pub fn finish_submit(&mut self, outcome: Result<(), SubmitError>) {
        if self.state != SubmitState::Submitting {
            warn!(state = ?self.state, "Ignoring submission outcome outside Submitting");
            return;
        }

        match outcome {
            Ok(()) => {
                self.state = SubmitState::Submitted;
            }
            Err(err) => {
                warn!("Error submitting the contact form: {err}");
                self.delivery_failed = true;
                self.state = SubmitState::Idle;
            }
        }
    }
}
