use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use super::types::{ContactMessage, Subscriber, VolunteerApplication};
use super::FormSchema;

/// Minimum length of a contact message body, in characters.
const MIN_MESSAGE_LENGTH: usize = 5;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap());

/// One violated constraint on a submitted payload.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Failed validation of a submitted payload.
///
/// Carries one entry per violated field so callers see the full picture in a
/// single round trip.
#[derive(Debug, Error)]
#[error("payload failed validation on {} field(s)", .errors.len())]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Default)]
struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    fn push(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    fn into_result(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                errors: self.errors,
            })
        }
    }
}

/// Checks a candidate against the email address grammar.
pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_PATTERN.is_match(candidate)
}

fn payload_object(value: &Value) -> Result<&Map<String, Value>, ValidationError> {
    value.as_object().ok_or_else(|| ValidationError {
        errors: vec![FieldError {
            field: "payload".to_string(),
            message: "expected a JSON object".to_string(),
        }],
    })
}

fn required_text(
    fields: &Map<String, Value>,
    field: &str,
    errors: &mut FieldErrors,
) -> Option<String> {
    match fields.get(field) {
        Some(Value::String(text)) => Some(text.clone()),
        Some(_) => {
            errors.push(field, "must be text");
            None
        }
        None => {
            errors.push(field, "is required");
            None
        }
    }
}

fn optional_text(
    fields: &Map<String, Value>,
    field: &str,
    errors: &mut FieldErrors,
) -> Option<String> {
    match fields.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text.clone()),
        Some(_) => {
            errors.push(field, "must be text");
            None
        }
    }
}

fn text_list(fields: &Map<String, Value>, field: &str, errors: &mut FieldErrors) -> Vec<String> {
    match fields.get(field) {
        None => Vec::new(),
        Some(Value::Array(items)) => {
            let mut values = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                match item {
                    Value::String(text) => values.push(text.clone()),
                    _ => errors.push(field, format!("entry {} must be text", index)),
                }
            }
            values
        }
        Some(_) => {
            errors.push(field, "must be a sequence of text values");
            Vec::new()
        }
    }
}

fn email_address(
    fields: &Map<String, Value>,
    field: &str,
    errors: &mut FieldErrors,
) -> Option<String> {
    let candidate = required_text(fields, field, errors)?;
    if is_valid_email(&candidate) {
        Some(candidate)
    } else {
        errors.push(field, "must be a valid email address");
        None
    }
}

impl FormSchema for ContactMessage {
    fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let fields = payload_object(value)?;
        let mut errors = FieldErrors::default();

        let name = required_text(fields, "name", &mut errors);
        let email = email_address(fields, "email", &mut errors);
        let message = required_text(fields, "message", &mut errors);
        if let Some(body) = &message {
            if body.chars().count() < MIN_MESSAGE_LENGTH {
                errors.push(
                    "message",
                    format!("must be at least {} characters", MIN_MESSAGE_LENGTH),
                );
            }
        }
        let subject = optional_text(fields, "subject", &mut errors);

        errors.into_result()?;
        Ok(Self {
            name: name.unwrap_or_default(),
            email: email.unwrap_or_default(),
            message: message.unwrap_or_default(),
            subject,
        })
    }
}

impl FormSchema for VolunteerApplication {
    fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let fields = payload_object(value)?;
        let mut errors = FieldErrors::default();

        let name = required_text(fields, "name", &mut errors);
        let email = email_address(fields, "email", &mut errors);
        let phone = optional_text(fields, "phone", &mut errors);
        let interests = text_list(fields, "interests", &mut errors);
        let notes = optional_text(fields, "notes", &mut errors);

        errors.into_result()?;
        Ok(Self {
            name: name.unwrap_or_default(),
            email: email.unwrap_or_default(),
            phone,
            interests,
            notes,
        })
    }
}

impl FormSchema for Subscriber {
    fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let fields = payload_object(value)?;
        let mut errors = FieldErrors::default();

        let email = email_address(fields, "email", &mut errors);
        let name = optional_text(fields, "name", &mut errors);

        errors.into_result()?;
        Ok(Self {
            email: email.unwrap_or_default(),
            name,
        })
    }
}
