//! Response headers added to every reply.

use tiny_http::Header;

const SECURITY_HEADERS: &[(&str, &str)] = &[
    ("X-Content-Type-Options", "nosniff"),
    ("X-Frame-Options", "SAMEORIGIN"),
    ("Referrer-Policy", "no-referrer"),
    ("X-DNS-Prefetch-Control", "off"),
    ("Cross-Origin-Opener-Policy", "same-origin"),
    ("Cross-Origin-Resource-Policy", "same-origin"),
    ("Origin-Agent-Cluster", "?1"),
    ("Strict-Transport-Security", "max-age=15552000; includeSubDomains"),
    ("X-Download-Options", "noopen"),
    ("X-Permitted-Cross-Domain-Policies", "none"),
    ("X-XSS-Protection", "0"),
];

pub const ALLOWED_METHODS: &str = "GET,HEAD,PUT,PATCH,POST,DELETE";
const DEFAULT_ALLOWED_HEADERS: &str = "Content-Type";

/// `None` when `value` is not a legal header value.
pub fn header(name: &str, value: &str) -> Option<Header> {
    Header::from_bytes(name.as_bytes(), value.as_bytes()).ok()
}

pub fn security_headers() -> Vec<Header> {
    SECURITY_HEADERS
        .iter()
        .filter_map(|(name, value)| header(name, value))
        .collect()
}

pub fn cors_headers(client_url: &str) -> Vec<Header> {
    [
        header("Access-Control-Allow-Origin", client_url),
        header("Access-Control-Allow-Credentials", "true"),
        header("Vary", "Origin"),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Extra headers for an `OPTIONS` preflight. Requested headers are echoed back.
pub fn preflight_headers(requested_headers: Option<&str>) -> Vec<Header> {
    [
        header("Access-Control-Allow-Methods", ALLOWED_METHODS),
        header(
            "Access-Control-Allow-Headers",
            requested_headers.unwrap_or(DEFAULT_ALLOWED_HEADERS),
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

pub fn rate_limit_headers(limit: u32, remaining: u32) -> Vec<Header> {
    [
        header("X-RateLimit-Limit", &limit.to_string()),
        header("X-RateLimit-Remaining", &remaining.to_string()),
    ]
    .into_iter()
    .flatten()
    .collect()
}
