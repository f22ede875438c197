//! Error types for command handlers.

use std::error::Error;

use serde_json::{json, Value};

use crate::auth::AuthError;
use crate::catalog::CatalogError;
use crate::checkout::{CheckoutError, Shortfall};
use crate::model::ModelError;
use crate::report::ReportError;

/// Error type for command handler operations.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    /// No handler registered for this command name.
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    /// Payload decode / deserialization failed.
    #[error("decode failed: {0}")]
    DecodeFailed(String),
    /// Input decoded but failed validation.
    #[error("{0}")]
    Invalid(String),
    /// Resource not found.
    #[error("{0}")]
    NotFound(String),
    /// Missing or invalid credentials.
    #[error("{0}")]
    Unauthorized(String),
    /// Authenticated, but the caller's role is not allowed.
    #[error("forbidden: {0}")]
    Forbidden(String),
    /// The write collides with existing state.
    #[error("{0}")]
    Conflict(String),
    /// Strict checkout could not fulfil every line.
    #[error("insufficient stock for {} line(s)", .0.len())]
    Shortfall(Vec<Shortfall>),
    /// Document store error.
    #[error("store error: {0}")]
    Store(#[from] ModelError),
    /// Guard rejected the command (input validation failed).
    #[error("guard rejected command: {0}")]
    GuardRejected(String),
    /// Other error.
    #[error("handler error: {0}")]
    Other(Box<dyn Error + Send + Sync>),
}

impl From<serde_json::Error> for HandlerError {
    fn from(err: serde_json::Error) -> Self {
        HandlerError::DecodeFailed(err.to_string())
    }
}

impl From<AuthError> for HandlerError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Invalid(msg) => HandlerError::Invalid(msg),
            AuthError::Duplicate => HandlerError::Conflict(err.to_string()),
            AuthError::InvalidCredentials
            | AuthError::MissingCredential
            | AuthError::MalformedToken
            | AuthError::BadSignature
            | AuthError::Expired => HandlerError::Unauthorized(err.to_string()),
            AuthError::Store(e) => HandlerError::Store(e),
            AuthError::Signing(_) | AuthError::Hashing(_) => HandlerError::Other(Box::new(err)),
        }
    }
}

impl From<CatalogError> for HandlerError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Invalid(msg) => HandlerError::Invalid(msg),
            CatalogError::Duplicate(_) => HandlerError::Conflict(err.to_string()),
            CatalogError::NotFound(_) => HandlerError::NotFound(err.to_string()),
            CatalogError::Store(e) => HandlerError::Store(e),
        }
    }
}

impl From<CheckoutError> for HandlerError {
    fn from(err: CheckoutError) -> Self {
        match err {
            CheckoutError::Validation(msg) => HandlerError::Invalid(msg),
            CheckoutError::Persistence(e) => HandlerError::Store(e),
            CheckoutError::Shortfall(shortfalls) => HandlerError::Shortfall(shortfalls),
        }
    }
}

impl From<ReportError> for HandlerError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::Store(e) => HandlerError::Store(e),
            ReportError::Overflow { .. } => HandlerError::Other(Box::new(err)),
        }
    }
}

impl HandlerError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::UnknownCommand(_) => 404,
            HandlerError::DecodeFailed(_) => 400,
            HandlerError::Invalid(_) => 400,
            HandlerError::NotFound(_) => 404,
            HandlerError::Unauthorized(_) => 401,
            HandlerError::Forbidden(_) => 403,
            HandlerError::Conflict(_) => 409,
            HandlerError::Shortfall(_) => 409,
            HandlerError::Store(_) => 500,
            HandlerError::GuardRejected(_) => 400,
            HandlerError::Other(_) => 500,
        }
    }

    /// JSON error payload: `{ "error": message }`, plus details where there are any.
    pub fn body(&self) -> Value {
        match self {
            HandlerError::Shortfall(shortfalls) => json!({
                "error": self.to_string(),
                "shortfalls": shortfalls,
            }),
            _ => json!({ "error": self.to_string() }),
        }
    }
}
