//! Contact form: sanitizing, validation and submission.
//!
//! - `sanitize`: markup stripping applied to every keystroke
//! - `validate`: field predicates and the whole-form aggregator
//! - `submit`: outbound delivery of a validated form
//! - `form`: the submission state machine the UI drives

mod form;
mod sanitize;
mod submit;
mod validate;

pub use form::{ContactForm, SubmitState, SubmitTrigger};
pub use sanitize::sanitize_input;
pub use submit::{HttpSubmitter, SubmitError, Submitter};
pub use validate::{
    MESSAGE_MIN_LENGTH, ValidationErrors, ValidationResult, validate_contact_form,
    validate_email, validate_min_length, validate_required,
};

use serde::{Deserialize, Serialize};

/// The three values a visitor sends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormData {
    /// Sender's name.
    pub name: String,
    /// Sender's reply address.
    pub email: String,
    /// Free-text message body.
    pub message: String,
}

impl ContactFormData {
    /// Value currently stored for `field`.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Replace the value stored for `field`.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }
}

/// A contact form field. Ordering is declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// Sender's name.
    Name,
    /// Sender's reply address.
    Email,
    /// Message body.
    Message,
}

impl Field {
    /// All fields, in declaration order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Wire/identifier name (`name`, `email`, `message`).
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Label shown next to the input.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    /// Placeholder shown while the input is empty.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your full name",
            Self::Email => "your.email@example.com",
            Self::Message => "Tell me about your project or just say hello...",
        }
    }

    /// Whether the field accepts newlines.
    #[must_use]
    pub const fn is_multiline(self) -> bool {
        matches!(self, Self::Message)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order() {
        assert!(Field::Name < Field::Email);
        assert!(Field::Email < Field::Message);
        assert_eq!(Field::ALL, [Field::Name, Field::Email, Field::Message]);
    }

    #[test]
    fn test_get_set() {
        let mut data = ContactFormData::default();
        data.set(Field::Email, "a@b.c".to_string());
        assert_eq!(data.get(Field::Email), "a@b.c");
        assert_eq!(data.get(Field::Name), "");
    }

    #[test]
    fn test_serializes_with_field_names() -> Result<(), Box<dyn std::error::Error>> {
        let data = ContactFormData {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            message: "hello there!".to_string(),
        };
        let json: serde_json::Value = serde_json::to_value(&data)?;
        assert_eq!(json["name"], "Jane");
        assert_eq!(json["email"], "jane@x.com");
        assert_eq!(json["message"], "hello there!");
        Ok(())
    }
}
