// Host-side tests for the shared form flow and the API payload checks.

use serde_json::json;
use site_core::api::*;
use site_core::form::*;
use std::collections::HashMap;

fn reader(values: &[(&str, &str)]) -> impl FnMut(&FieldSpec) -> Option<String> {
    let map: HashMap<String, String> = values
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |f: &FieldSpec| map.get(f.element_id).cloned()
}

fn contact_values() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "Ada"),
        ("email", "ada@example.com"),
        ("subject", "Hello"),
        ("message", "Hi there"),
    ]
}

#[test]
fn empty_field_never_produces_a_request() {
    for missing in ["name", "email", "subject", "message"] {
        let mut values = contact_values();
        for v in values.iter_mut() {
            if v.0 == missing {
                v.1 = "   ";
            }
        }
        let mut ctl = FormController::new(&CONTACT_FORM);
        match ctl.begin(reader(&values)) {
            SubmitDecision::Rejected(status) => {
                assert_eq!(status.kind, StatusKind::Error);
                assert_eq!(status.text, "Please fill in all required fields.");
            }
            other => panic!("expected local rejection for {missing}, got {other:?}"),
        }
        assert!(!ctl.is_busy());
    }
}

#[test]
fn absent_element_counts_as_empty() {
    let mut ctl = FormController::new(&NEWSLETTER_FORM);
    let decision = ctl.begin(|_| None);
    assert_eq!(
        decision,
        SubmitDecision::Rejected(StatusMessage::error("Please enter a valid email address."))
    );
}

#[test]
fn malformed_email_is_rejected_locally() {
    let mut values = contact_values();
    values[1].1 = "bad-email";
    let mut ctl = FormController::new(&CONTACT_FORM);
    assert_eq!(
        ctl.begin(reader(&values)),
        SubmitDecision::Rejected(StatusMessage::error("Please enter a valid email address."))
    );
}

#[test]
fn valid_form_produces_trimmed_json_and_locks() {
    let mut values = contact_values();
    values[0].1 = "  Ada  ";
    let mut ctl = FormController::new(&CONTACT_FORM);
    let SubmitDecision::Send(sub) = ctl.begin(reader(&values)) else {
        panic!("expected a submission");
    };
    assert_eq!(sub.endpoint, "/api/contact");
    assert_eq!(
        sub.body,
        json!({"name": "Ada", "email": "ada@example.com", "subject": "Hello", "message": "Hi there"})
    );
    assert!(ctl.is_busy());
    assert_eq!(ctl.begin(reader(&values)), SubmitDecision::Busy);
}

#[test]
fn success_reply_unlocks_and_shows_success() {
    let mut ctl = FormController::new(&CONTACT_FORM);
    assert!(matches!(ctl.begin(reader(&contact_values())), SubmitDecision::Send(_)));
    let done = ctl.finish(ResponseOutcome::Received {
        ok: true,
        body: Some(ApiResponse::ok(CONTACT_OK)),
    });
    assert_eq!(
        done,
        Completion::Succeeded(SuccessDisplay::Element {
            element_id: "successMessage"
        })
    );
    assert!(!ctl.is_busy());
}

#[test]
fn server_message_is_shown_verbatim() {
    let mut ctl = FormController::new(&CONTACT_FORM);
    let _ = ctl.begin(reader(&contact_values()));
    let done = ctl.finish(ResponseOutcome::Received {
        ok: false,
        body: Some(ApiResponse::error("Please provide a valid email address.")),
    });
    assert_eq!(
        done,
        Completion::Failed(StatusMessage::error("Please provide a valid email address."))
    );
}

#[test]
fn unreadable_or_unsuccessful_reply_uses_fallback() {
    let mut ctl = FormController::new(&NEWSLETTER_FORM);
    let _ = ctl.begin(|_| Some("a@b.com".into()));
    let done = ctl.finish(ResponseOutcome::Received { ok: false, body: None });
    assert_eq!(
        done,
        Completion::Failed(StatusMessage::error("Failed to subscribe. Please try again."))
    );

    // 200 with success:false and no message still fails
    let _ = ctl.begin(|_| Some("a@b.com".into()));
    let done = ctl.finish(ResponseOutcome::Received {
        ok: true,
        body: Some(ApiResponse::error("")),
    });
    assert_eq!(
        done,
        Completion::Failed(StatusMessage::error("Failed to subscribe. Please try again."))
    );
}

#[test]
fn network_failure_keeps_form_resubmittable() {
    let mut ctl = FormController::new(&NEWSLETTER_FORM);
    assert!(matches!(ctl.begin(|_| Some("a@b.com".into())), SubmitDecision::Send(_)));
    let done = ctl.finish(ResponseOutcome::NetworkError);
    assert_eq!(
        done,
        Completion::Failed(StatusMessage::error("Network error. Please try again later."))
    );
    assert!(matches!(ctl.begin(|_| Some("a@b.com".into())), SubmitDecision::Send(_)));
}

#[test]
fn contact_payload_validation() {
    let ok = json!({"name": "A", "email": "a@b.com", "subject": "s", "message": "m"});
    assert!(ContactSubmission::from_json(&ok).is_ok());

    let bad = json!({"name": "A", "email": "bad-email", "subject": "s", "message": "m"});
    assert_eq!(
        ContactSubmission::from_json(&bad),
        Err(ValidationError::InvalidEmail)
    );

    for body in [
        json!({"email": "a@b.com", "subject": "s", "message": "m"}),
        json!({"name": "", "email": "a@b.com", "subject": "s", "message": "m"}),
        json!({"name": 5, "email": "a@b.com", "subject": "s", "message": "m"}),
        json!([]),
    ] {
        assert_eq!(
            ContactSubmission::from_json(&body),
            Err(ValidationError::MissingFields)
        );
    }
}

#[test]
fn newsletter_payload_validation() {
    assert_eq!(
        NewsletterSubmission::from_json(&json!({})),
        Err(ValidationError::MissingEmail)
    );
    assert_eq!(
        NewsletterSubmission::from_json(&json!({"email": "nope"})),
        Err(ValidationError::InvalidEmail)
    );
    assert_eq!(
        NewsletterSubmission::from_json(&json!({"email": "a@b.co"})).unwrap().email,
        "a@b.co"
    );
    assert_eq!(
        ValidationError::MissingEmail.to_string(),
        "Email is required."
    );
}
