//! Context passed to command handlers.
//!
//! Carries the parsed input, session variables, and a reference to the
//! application state. Handlers access everything they need through the context.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::HandlerError;
use super::session::Session;
use crate::auth::{AuthGate, Identity, Role};

/// The context passed to every command handler.
///
/// Generic over `R`, the application state the service was built with.
///
/// ## Example
///
/// ```ignore
/// pub fn handle<S: ModelStore>(ctx: &Context<Storefront<S>>) -> Result<Value, HandlerError> {
///     let caller = ctx.identity()?;
///     let input = ctx.input::<Input>()?;
///     // ...
/// }
/// ```
pub struct Context<'a, R> {
    /// Raw JSON input from the request.
    input: Value,
    /// Session variables (request headers).
    session: Session,
    /// Reference to the application state.
    state: &'a R,
}

impl<'a, R> Context<'a, R> {
    /// Create a new context.
    pub(crate) fn new(input: Value, session: Session, state: &'a R) -> Self {
        Self {
            input,
            session,
            state,
        }
    }

    /// Deserialize the input payload into a typed struct.
    pub fn input<T: DeserializeOwned>(&self) -> Result<T, HandlerError> {
        serde_json::from_value(self.input.clone())
            .map_err(|e| HandlerError::DecodeFailed(e.to_string()))
    }

    /// Get the raw JSON input.
    pub fn raw_input(&self) -> &Value {
        &self.input
    }

    /// Get the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Get a reference to the application state.
    pub fn state(&self) -> &R {
        self.state
    }

    /// Check if the raw input contains a field.
    pub fn has_field(&self, field: &str) -> bool {
        self.input.get(field).is_some()
    }

    /// Check if the raw input contains all specified fields.
    pub fn has_fields(&self, fields: &[&str]) -> bool {
        fields.iter().all(|f| self.has_field(f))
    }
}

impl<'a, R: AuthGate> Context<'a, R> {
    /// Resolve the caller from the session's bearer token.
    pub fn identity(&self) -> Result<Identity, HandlerError> {
        let token = self
            .session
            .bearer_token()
            .ok_or_else(|| HandlerError::Unauthorized("missing bearer token".into()))?;
        Ok(self.state.authenticate(token)?)
    }

    /// Resolve the caller and require `role`.
    pub fn require_role(&self, role: Role) -> Result<Identity, HandlerError> {
        let identity = self.identity()?;
        if identity.role != role {
            return Err(HandlerError::Forbidden(format!("requires {} role", role)));
        }
        Ok(identity)
    }
}
