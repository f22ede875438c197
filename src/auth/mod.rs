//! Authentication - accounts, password hashing, and signed bearer tokens.
//!
//! The [`AuthGate`] trait is the seam the command handlers use: given the
//! caller's credential it yields an [`Identity`] with a [`Role`]. Route
//! policy (who may call what) lives in the handlers.

mod accounts;
pub mod password;
pub mod token;

use std::fmt;
use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::model::ModelError;

pub use accounts::{Account, Accounts, AdminSeed, LoginOutcome, PublicUser};
pub use token::{Claims, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Customer => f.write_str("customer"),
            Role::Admin => f.write_str("admin"),
        }
    }
}

/// An authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub user_id: String,
    pub email: String,
    pub role: Role,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("{0}")]
    Invalid(String),
    #[error("User already exists with this email.")]
    Duplicate,
    #[error("Invalid credentials.")]
    InvalidCredentials,
    #[error("missing bearer token")]
    MissingCredential,
    #[error("malformed token")]
    MalformedToken,
    #[error("token signature mismatch")]
    BadSignature,
    #[error("token expired")]
    Expired,
    #[error("token signing failed: {0}")]
    Signing(String),
    #[error("password hashing failed: {0}")]
    Hashing(String),
    #[error(transparent)]
    Store(#[from] ModelError),
}

/// Resolves a caller's credential into an identity.
pub trait AuthGate: Send + Sync {
    fn authenticate(&self, credential: &str) -> Result<Identity, AuthError>;
}

/// Issues and verifies the signed bearer tokens handed out at login.
#[derive(Clone)]
pub struct TokenGate {
    secret: String,
    ttl: Duration,
}

impl TokenGate {
    pub fn new(secret: impl Into<String>, ttl: Duration) -> Self {
        Self {
            secret: secret.into(),
            ttl,
        }
    }

    pub fn issue(&self, identity: &Identity) -> Result<Token, AuthError> {
        token::sign(identity, &self.secret, self.ttl)
    }
}

impl AuthGate for TokenGate {
    fn authenticate(&self, credential: &str) -> Result<Identity, AuthError> {
        if credential.is_empty() {
            return Err(AuthError::MissingCredential);
        }
        token::verify(credential, &self.secret, Utc::now()).map(Identity::from)
    }
}
