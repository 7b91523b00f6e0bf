//! Backend for the Pearlmeen Media site.
//!
//! Serves the contact and newsletter JSON endpoints, a health check, and the
//! static site itself, behind a per-IP rate limit with CORS and security
//! headers on every response.

pub mod config;
pub mod error;
pub mod headers;
pub mod limiter;
pub mod routes;
pub mod server;
pub mod static_files;
pub mod timestamp;

pub use config::ServerConfig;
pub use error::{RouteError, ServerError};
pub use limiter::{RateDecision, RateLimiter};
pub use server::SiteServer;
