//! Request routing: the JSON API plus static files.

use crate::error::RouteError;
use crate::static_files;
use crate::timestamp::now_iso8601;
use serde::Serialize;
use serde_json::{Map, Value};
use site_core::api::{
    ApiResponse, ContactSubmission, HealthResponse, NewsletterSubmission, CONTACT_OK, CONTACT_PATH,
    HEALTH_OK, HEALTH_PATH, NEWSLETTER_OK, NEWSLETTER_PATH, NOT_FOUND,
};
use std::io::Read;
use std::path::PathBuf;
use tiny_http::Method;

const API_PREFIX: &str = "/api/";
const JSON: &str = "application/json";
const FORM: &str = "application/x-www-form-urlencoded";

/// Everything a route needs besides the request itself.
#[derive(Clone, Debug)]
pub struct RouteContext {
    pub static_dir: PathBuf,
    pub body_limit_bytes: usize,
}

/// A fully built reply, before the server adds its shared headers.
#[derive(Debug)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn json<T: Serialize>(status: u16, value: &T) -> Result<Self, RouteError> {
        let body = serde_json::to_vec(value).map_err(|e| RouteError::Internal(e.to_string()))?;
        Ok(Self {
            status,
            content_type: JSON,
            body,
        })
    }

    pub fn text(status: u16, text: &str) -> Self {
        Self {
            status,
            content_type: "text/plain; charset=utf-8",
            body: text.as_bytes().to_vec(),
        }
    }

    pub fn empty(status: u16) -> Self {
        Self {
            status,
            content_type: "text/plain; charset=utf-8",
            body: Vec::new(),
        }
    }

    /// JSON `{success: false, message}` for a failed route.
    pub fn from_error(e: &RouteError) -> Self {
        let body = ApiResponse::error(e.client_message());
        // ApiResponse always serializes
        Self {
            status: e.status(),
            content_type: JSON,
            body: serde_json::to_vec(&body).unwrap_or_default(),
        }
    }
}

pub fn dispatch<R: Read>(
    ctx: &RouteContext,
    method: &Method,
    url: &str,
    content_type: Option<&str>,
    body: R,
) -> Result<Reply, RouteError> {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    match (method, path) {
        (Method::Post, CONTACT_PATH) => {
            let body = read_body(content_type, body, ctx.body_limit_bytes)?;
            let submission = ContactSubmission::from_json(&body)?;
            log::info!(
                "[contact] submission from {} <{}>: {:?}",
                submission.name,
                submission.email,
                submission.subject
            );
            Reply::json(200, &ApiResponse::ok(CONTACT_OK))
        }
        (Method::Post, NEWSLETTER_PATH) => {
            let body = read_body(content_type, body, ctx.body_limit_bytes)?;
            let submission = NewsletterSubmission::from_json(&body)?;
            log::info!("[newsletter] subscription: {}", submission.email);
            Reply::json(200, &ApiResponse::ok(NEWSLETTER_OK))
        }
        (Method::Get | Method::Head, HEALTH_PATH) => Reply::json(
            200,
            &HealthResponse {
                success: true,
                message: HEALTH_OK.to_owned(),
                timestamp: now_iso8601(),
            },
        ),
        (Method::Get | Method::Head, p) if !p.starts_with(API_PREFIX) => {
            match static_files::resolve(&ctx.static_dir, p) {
                Some(file) => Ok(Reply {
                    status: 200,
                    content_type: static_files::content_type(&file),
                    body: std::fs::read(&file)?,
                }),
                None => not_found(),
            }
        }
        _ => not_found(),
    }
}

fn not_found() -> Result<Reply, RouteError> {
    Reply::json(404, &ApiResponse::error(NOT_FOUND))
}

fn mime(content_type: Option<&str>) -> Option<&str> {
    content_type
        .and_then(|ct| ct.split(';').next())
        .map(str::trim)
}

/// Read at most `limit` bytes as a JSON object.
///
/// JSON and urlencoded bodies are parsed; anything else, and an empty body,
/// reads as `{}`.
pub fn read_body<R: Read>(content_type: Option<&str>, body: R, limit: usize) -> Result<Value, RouteError> {
    let mut buf = Vec::new();
    body.take(limit as u64 + 1).read_to_end(&mut buf)?;
    if buf.len() > limit {
        return Err(RouteError::PayloadTooLarge);
    }
    if buf.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    match mime(content_type) {
        Some(m) if m.eq_ignore_ascii_case(JSON) => serde_json::from_slice(&buf).map_err(|e| {
            log::debug!("rejecting malformed JSON body: {e}");
            RouteError::BadRequest("Invalid JSON body.".to_owned())
        }),
        Some(m) if m.eq_ignore_ascii_case(FORM) => Ok(parse_urlencoded(&buf)),
        _ => Ok(Value::Object(Map::new())),
    }
}

/// Flat `key=value` pairs; a repeated key collects its values into an array.
fn parse_urlencoded(buf: &[u8]) -> Value {
    let mut fields = Map::new();
    for (key, value) in form_urlencoded::parse(buf) {
        let value = Value::String(value.into_owned());
        match fields.get_mut(key.as_ref()) {
            Some(Value::Array(values)) => values.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None => {
                fields.insert(key.into_owned(), value);
            }
        }
    }
    Value::Object(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ctx() -> RouteContext {
        RouteContext {
            static_dir: PathBuf::from("/nonexistent-static-root"),
            body_limit_bytes: 64,
        }
    }

    fn post(url: &str, body: &str) -> Result<Reply, RouteError> {
        dispatch(&ctx(), &Method::Post, url, Some(JSON), Cursor::new(body.as_bytes().to_vec()))
    }

    fn json_of(reply: &Reply) -> Value {
        serde_json::from_slice(&reply.body).unwrap()
    }

    #[test]
    fn newsletter_accepts_valid_email() {
        let reply = post(NEWSLETTER_PATH, r#"{"email":"a@b.co"}"#).unwrap();
        assert_eq!(reply.status, 200);
        assert_eq!(json_of(&reply)["message"], NEWSLETTER_OK);
    }

    #[test]
    fn newsletter_requires_email() {
        let err = post(NEWSLETTER_PATH, "{}").unwrap_err();
        assert_eq!(err.status(), 400);
        assert_eq!(err.client_message(), "Email is required.");
    }

    #[test]
    fn query_string_does_not_change_route() {
        let reply = post("/api/newsletter?src=footer", r#"{"email":"a@b.co"}"#).unwrap();
        assert_eq!(reply.status, 200);
    }

    #[test]
    fn non_json_content_type_reads_as_empty_object() {
        let v = read_body(Some("text/plain"), Cursor::new(b"email=a@b.co".to_vec()), 64).unwrap();
        assert_eq!(v, serde_json::json!({}));
        let v = read_body(Some("application/json; charset=utf-8"), Cursor::new(b"  ".to_vec()), 64).unwrap();
        assert_eq!(v, serde_json::json!({}));
    }

    #[test]
    fn urlencoded_body_is_parsed() {
        let v = read_body(
            Some("application/x-www-form-urlencoded"),
            Cursor::new(b"name=Ada+L&email=a%40b.co&tag=x&tag=y".to_vec()),
            64,
        )
        .unwrap();
        assert_eq!(
            v,
            serde_json::json!({"name": "Ada L", "email": "a@b.co", "tag": ["x", "y"]})
        );
    }

    #[test]
    fn urlencoded_contact_is_accepted() {
        let reply = dispatch(
            &ctx(),
            &Method::Post,
            CONTACT_PATH,
            Some("application/x-www-form-urlencoded"),
            Cursor::new(b"name=A&email=a%40b.com&subject=s&message=m".to_vec()),
        )
        .unwrap();
        assert_eq!(reply.status, 200);
        assert_eq!(json_of(&reply)["message"], CONTACT_OK);
    }

    #[test]
    fn health_answers_head() {
        let reply = dispatch(&ctx(), &Method::Head, HEALTH_PATH, None, std::io::empty()).unwrap();
        assert_eq!(reply.status, 200);
    }

    #[test]
    fn malformed_json_is_bad_request() {
        let err = post(CONTACT_PATH, "{\"name\": ").unwrap_err();
        assert_eq!(err.status(), 400);
    }

    #[test]
    fn oversized_body_is_rejected() {
        let big = format!(r#"{{"email":"{}@b.co"}}"#, "a".repeat(100));
        let err = post(NEWSLETTER_PATH, &big).unwrap_err();
        assert!(matches!(err, RouteError::PayloadTooLarge));
        assert_eq!(err.status(), 413);
    }

    #[test]
    fn body_exactly_at_limit_is_read() {
        let body = " ".repeat(64);
        assert!(read_body(Some(JSON), Cursor::new(body.into_bytes()), 64).is_ok());
    }

    #[test]
    fn health_and_unknown_routes() {
        let reply = dispatch(&ctx(), &Method::Get, HEALTH_PATH, None, std::io::empty()).unwrap();
        assert_eq!(reply.status, 200);
        assert_eq!(json_of(&reply)["message"], HEALTH_OK);

        let reply = dispatch(&ctx(), &Method::Get, "/api/nope", None, std::io::empty()).unwrap();
        assert_eq!(reply.status, 404);
        assert_eq!(json_of(&reply)["success"], false);

        let reply = dispatch(&ctx(), &Method::Get, CONTACT_PATH, None, std::io::empty()).unwrap();
        assert_eq!(reply.status, 404);
    }

    #[test]
    fn error_reply_is_json() {
        let reply = Reply::from_error(&RouteError::Internal("boom".into()));
        assert_eq!(reply.status, 500);
        assert_eq!(json_of(&reply)["message"], site_core::api::SERVER_ERROR);
    }
}
