//! Field validators and the contact form aggregator.

use super::{ContactFormData, Field};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Minimum trimmed length of a contact message, in characters.
pub const MESSAGE_MIN_LENGTH: usize = 10;

/// `local@domain.tld`: no whitespace or extra `@` in any part.
static EMAIL: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));

/// True when `value` has content after trimming.
#[must_use]
pub fn validate_required(value: &str) -> bool {
    !value.trim().is_empty()
}

/// True when the trimmed `value` has at least `min` characters.
#[must_use]
pub fn validate_min_length(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}

/// True when `value` has the rough shape of an email address.
///
/// Intentionally loose: one `@`, a dot somewhere after it, and no whitespace.
#[must_use]
pub fn validate_email(value: &str) -> bool {
    match EMAIL.as_ref() {
        Ok(re) => re.is_match(value),
        Err(e) => {
            tracing::error!("Email pattern failed to compile: {e}");
            false
        }
    }
}

/// Per-field validation messages. A field with no entry is currently valid.
///
/// Keys are [`Field`]s, so the key set can never contain anything but the
/// form's own fields. Iteration follows declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    messages: BTreeMap<Field, String>,
}

impl ValidationErrors {
    /// An empty error map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: BTreeMap::new(),
        }
    }

    /// Record `message` for `field`, replacing any earlier message.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.messages.insert(field, message.into());
    }

    /// Message for `field`, if it is invalid.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    /// Whether `field` has an error.
    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.messages.contains_key(&field)
    }

    /// Drop the error for `field`. Returns true if there was one.
    pub fn clear_field(&mut self, field: Field) -> bool {
        self.messages.remove(&field).is_some()
    }

    /// Drop every error.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// True when no field has an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of invalid fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// First invalid field in declaration order (name, email, message).
    #[must_use]
    pub fn first_field(&self) -> Option<Field> {
        self.messages.keys().next().copied()
    }

    /// Iterate over `(field, message)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.messages.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

/// Outcome of validating a whole form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// True iff `errors` is empty.
    pub is_valid: bool,
    /// Messages for every invalid field.
    pub errors: ValidationErrors,
}

/// Validate every field of `data`, collecting all errors in one pass.
#[must_use]
pub fn validate_contact_form(data: &ContactFormData) -> ValidationResult {
    let mut errors = ValidationErrors::new();

    if !validate_required(&data.name) {
        errors.insert(Field::Name, "Name is required");
    }

    if !validate_required(&data.email) {
        errors.insert(Field::Email, "Email is required");
    } else if !validate_email(&data.email) {
        errors.insert(Field::Email, "Please enter a valid email address");
    }

    if !validate_required(&data.message) {
        errors.insert(Field::Message, "Message is required");
    } else if !validate_min_length(&data.message, MESSAGE_MIN_LENGTH) {
        errors.insert(
            Field::Message,
            format!("Message must be at least {MESSAGE_MIN_LENGTH} characters long"),
        );
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}
