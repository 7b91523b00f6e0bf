//! One parametrized submit flow for every form on the page.
//!
//! A [`FormSpec`] names the fields, endpoint, and user-facing texts; a
//! [`FormController`] runs the flow for one form instance: local checks, at
//! most one request in flight, and mapping the reply to a status to show.
//! The DOM and the network stay with the caller.

use crate::api::{ApiResponse, CONTACT_PATH, NEWSLETTER_PATH};
use crate::email::is_valid_email;
use serde_json::{Map, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key in the JSON body.
    pub key: &'static str,
    pub element_id: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitButton {
    ById(&'static str),
    FirstInForm,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SuccessDisplay {
    /// Reveal a pre-rendered element and scroll it into view.
    Element { element_id: &'static str },
    /// Show a success status line, hidden again after a delay.
    Status {
        text: &'static str,
        hide_after_ms: i32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormSpec {
    pub form_id: &'static str,
    pub status_id: &'static str,
    pub endpoint: &'static str,
    pub fields: &'static [FieldSpec],
    pub email_key: Option<&'static str>,
    pub submit_button: SubmitButton,
    pub busy_label: &'static str,
    /// Label restored after the request; `None` restores whatever was there.
    pub idle_label: Option<&'static str>,
    pub missing_message: &'static str,
    pub invalid_email_message: &'static str,
    pub failure_fallback: &'static str,
    pub network_error: &'static str,
    pub success: SuccessDisplay,
}

pub static CONTACT_FORM: FormSpec = FormSpec {
    form_id: "contactForm",
    status_id: "formStatus",
    endpoint: CONTACT_PATH,
    fields: &[
        FieldSpec {
            key: "name",
            element_id: "name",
        },
        FieldSpec {
            key: "email",
            element_id: "email",
        },
        FieldSpec {
            key: "subject",
            element_id: "subject",
        },
        FieldSpec {
            key: "message",
            element_id: "message",
        },
    ],
    email_key: Some("email"),
    submit_button: SubmitButton::ById("submitBtn"),
    busy_label: "Sending...",
    idle_label: Some("Send Message"),
    missing_message: "Please fill in all required fields.",
    invalid_email_message: "Please enter a valid email address.",
    failure_fallback: "Failed to send message. Please try again.",
    network_error: "Network error. Please check your connection and try again.",
    success: SuccessDisplay::Element {
        element_id: "successMessage",
    },
};

pub static NEWSLETTER_FORM: FormSpec = FormSpec {
    form_id: "newsletterForm",
    status_id: "newsletterStatus",
    endpoint: NEWSLETTER_PATH,
    fields: &[FieldSpec {
        key: "email",
        element_id: "newsletterEmail",
    }],
    email_key: Some("email"),
    submit_button: SubmitButton::FirstInForm,
    busy_label: "Subscribing...",
    idle_label: None,
    missing_message: "Please enter a valid email address.",
    invalid_email_message: "Please enter a valid email address.",
    failure_fallback: "Failed to subscribe. Please try again.",
    network_error: "Network error. Please try again later.",
    success: SuccessDisplay::Status {
        text: "\u{2713} Successfully subscribed! Check your email to confirm.",
        hide_after_ms: 5000,
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }
}

/// A request the caller must POST as JSON.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    pub endpoint: &'static str,
    pub body: Value,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitDecision {
    Send(Submission),
    Rejected(StatusMessage),
    /// A previous submission has not completed yet.
    Busy,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ResponseOutcome {
    /// The server answered; `body` is `None` when it was not valid JSON.
    Received { ok: bool, body: Option<ApiResponse> },
    NetworkError,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Completion {
    Succeeded(SuccessDisplay),
    Failed(StatusMessage),
}

#[derive(Debug)]
pub struct FormController {
    spec: &'static FormSpec,
    in_flight: bool,
}

impl FormController {
    pub fn new(spec: &'static FormSpec) -> Self {
        Self {
            spec,
            in_flight: false,
        }
    }

    pub fn spec(&self) -> &'static FormSpec {
        self.spec
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    /// Read, trim, and check every field. On success the controller is busy
    /// until [`FormController::finish`] is called.
    pub fn begin(&mut self, mut read: impl FnMut(&FieldSpec) -> Option<String>) -> SubmitDecision {
        if self.in_flight {
            return SubmitDecision::Busy;
        }
        let mut body = Map::new();
        for field in self.spec.fields {
            let value = read(field).map(|v| v.trim().to_owned()).unwrap_or_default();
            if value.is_empty() {
                return SubmitDecision::Rejected(StatusMessage::error(self.spec.missing_message));
            }
            body.insert(field.key.to_owned(), Value::String(value));
        }
        if let Some(key) = self.spec.email_key {
            let email = body.get(key).and_then(Value::as_str).unwrap_or_default();
            if !is_valid_email(email) {
                return SubmitDecision::Rejected(StatusMessage::error(
                    self.spec.invalid_email_message,
                ));
            }
        }
        self.in_flight = true;
        SubmitDecision::Send(Submission {
            endpoint: self.spec.endpoint,
            body: Value::Object(body),
        })
    }

    /// Release the in-flight guard and decide what to show.
    pub fn finish(&mut self, outcome: ResponseOutcome) -> Completion {
        self.in_flight = false;
        match outcome {
            ResponseOutcome::Received {
                ok: true,
                body: Some(ApiResponse { success: true, .. }),
            } => Completion::Succeeded(self.spec.success),
            ResponseOutcome::Received { body, .. } => {
                let text = body
                    .map(|b| b.message)
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| self.spec.failure_fallback.to_owned());
                Completion::Failed(StatusMessage::error(text))
            }
            ResponseOutcome::NetworkError => {
                Completion::Failed(StatusMessage::error(self.spec.network_error))
            }
        }
    }
}
