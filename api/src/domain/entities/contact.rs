//! Contact message domain entity
//!
//! A message submitted through the contact form. Never persisted: it is validated,
//! forwarded by email and dropped.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 100;
pub const EMAIL_MAX: usize = 254;
pub const SUBJECT_MIN: usize = 5;
pub const SUBJECT_MAX: usize = 200;
pub const MESSAGE_MIN: usize = 10;
pub const MESSAGE_MAX: usize = 5000;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
    })
}

/// A contact form submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Copy of the message with surrounding whitespace removed from every field
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    /// Validate field presence, lengths and the email shape.
    ///
    /// Expects an already trimmed message.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.is_empty()
            || self.email.is_empty()
            || self.subject.is_empty()
            || self.message.is_empty()
        {
            return Err(DomainError::Validation(
                "All fields are required".to_string(),
            ));
        }

        check_length("name", &self.name, NAME_MIN, NAME_MAX)?;
        check_length("subject", &self.subject, SUBJECT_MIN, SUBJECT_MAX)?;
        check_length("message", &self.message, MESSAGE_MIN, MESSAGE_MAX)?;

        if self.email.len() > EMAIL_MAX || !email_regex().is_match(&self.email) {
            return Err(DomainError::Validation("Invalid email".to_string()));
        }

        Ok(())
    }
}

fn check_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), DomainError> {
    let len = value.chars().count();
    if len < min {
        return Err(DomainError::Validation(format!(
            "{} must be at least {} characters",
            field, min
        )));
    }
    if len > max {
        return Err(DomainError::Validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}

/// Result of a delivered contact message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactReceipt {
    /// Message id assigned by the email provider
    pub id: String,
    /// Submissions the client has left in the current window
    pub remaining: u32,
}
