//! Server and per-request error types.

use site_core::api::{ValidationError, SERVER_ERROR};

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind to {addr}: {error}")]
    BindError { addr: String, error: String },
    #[error("Failed to spawn worker: {0}")]
    SpawnError(#[source] std::io::Error),
    #[error("Worker thread panicked")]
    WorkerPanic,
}

/// A request that could not be answered with the route's success payload.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("{0}")]
    BadRequest(String),
    #[error("Request entity too large.")]
    PayloadTooLarge,
    #[error("internal error: {0}")]
    Internal(String),
}

impl RouteError {
    pub fn status(&self) -> u16 {
        match self {
            RouteError::BadRequest(_) => 400,
            RouteError::PayloadTooLarge => 413,
            RouteError::Internal(_) => 500,
        }
    }

    /// Text safe to send to the client. Internal details stay in the log.
    pub fn client_message(&self) -> String {
        match self {
            RouteError::Internal(_) => SERVER_ERROR.to_owned(),
            other => other.to_string(),
        }
    }
}

impl From<ValidationError> for RouteError {
    fn from(e: ValidationError) -> Self {
        RouteError::BadRequest(e.to_string())
    }
}

impl From<std::io::Error> for RouteError {
    fn from(e: std::io::Error) -> Self {
        RouteError::Internal(e.to_string())
    }
}
