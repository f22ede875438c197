//! Session variables from the request context (HTTP headers, lower-cased).

use std::collections::HashMap;

/// Parsed session variables from the incoming request.
///
/// Over HTTP these are the request headers; the caller's credential arrives
/// as a standard bearer token:
///
/// ```text
/// authorization: Bearer eyJzdWIiOi...
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    variables: HashMap<String, String>,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session from a map of variables.
    pub fn from_map(variables: HashMap<String, String>) -> Self {
        Self { variables }
    }

    /// Session carrying only a bearer token.
    pub fn with_bearer(token: impl AsRef<str>) -> Self {
        let mut session = Self::new();
        session.set("authorization", format!("Bearer {}", token.as_ref()));
        session
    }

    /// The bearer token from the `authorization` variable, if any.
    pub fn bearer_token(&self) -> Option<&str> {
        let value = self.get("authorization")?.trim();
        let (scheme, token) = value.split_once(' ')?;
        if scheme.eq_ignore_ascii_case("bearer") {
            Some(token.trim()).filter(|t| !t.is_empty())
        } else {
            None
        }
    }

    /// Get a session variable by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|v| v.as_str())
    }

    /// Set a session variable.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    /// Check if a session variable exists.
    pub fn has(&self, key: &str) -> bool {
        self.variables.contains_key(key)
    }
}
