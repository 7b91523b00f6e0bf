//! JSON contract between the page forms and the backend.

use crate::email::is_valid_email;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const CONTACT_PATH: &str = "/api/contact";
pub const NEWSLETTER_PATH: &str = "/api/newsletter";
pub const HEALTH_PATH: &str = "/api/health";

pub const CONTACT_OK: &str = "Thank you for your message! We will get back to you soon.";
pub const NEWSLETTER_OK: &str = "Successfully subscribed to our newsletter!";
pub const HEALTH_OK: &str = "Server is running";
pub const NOT_FOUND: &str = "Endpoint not found";
pub const SERVER_ERROR: &str = "Server error. Please try again later.";

/// Body of every JSON reply: `{success, message}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

impl ApiResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("All fields are required.")]
    MissingFields,
    #[error("Email is required.")]
    MissingEmail,
    #[error("Please provide a valid email address.")]
    InvalidEmail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewsletterSubmission {
    pub email: String,
}

/// A present field is a non-empty JSON string; anything else counts as absent.
fn text_field<'a>(body: &'a Value, key: &str) -> Option<&'a str> {
    body.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

impl ContactSubmission {
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let (Some(name), Some(email), Some(subject), Some(message)) = (
            text_field(body, "name"),
            text_field(body, "email"),
            text_field(body, "subject"),
            text_field(body, "message"),
        ) else {
            return Err(ValidationError::MissingFields);
        };
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(Self {
            name: name.to_owned(),
            email: email.to_owned(),
            subject: subject.to_owned(),
            message: message.to_owned(),
        })
    }
}

impl NewsletterSubmission {
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let email = text_field(body, "email").ok_or(ValidationError::MissingEmail)?;
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(Self {
            email: email.to_owned(),
        })
    }
}
