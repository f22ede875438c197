//! Service - command handler registry and dispatch.
//!
//! `Service<R>` holds the application state and a set of named command
//! handlers. Each handler receives a `Context<R>` and returns
//! `Result<Value, HandlerError>`.
//!
//! ## Example
//!
//! ```ignore
//! use storefront::microsvc::{Service, Session};
//! use serde_json::json;
//!
//! let service = Service::new(app).command_guarded(
//!     "product.list",
//!     |_ctx| true,
//!     |ctx| {
//!         let products = ctx.state().catalog().list_active()?;
//!         Ok(json!(products))
//!     },
//! );
//!
//! let result = service.dispatch("product.list", json!({}), Session::new());
//! ```

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, warn};

use super::context::Context;
use super::error::HandlerError;
use super::session::Session;

type GuardFn<R> = Box<dyn Fn(&Context<R>) -> bool + Send + Sync>;
type HandleFn<R> = Box<dyn Fn(&Context<R>) -> Result<Value, HandlerError> + Send + Sync>;

/// A registered command handler and its guard.
struct CommandHandler<R> {
    guard: GuardFn<R>,
    handle: HandleFn<R>,
}

/// Routes named commands to handler functions.
///
/// Generic over `R`, the application state. Handlers receive a `Context<R>`
/// and reach the state via `ctx.state()`.
pub struct Service<R> {
    state: R,
    handlers: HashMap<String, CommandHandler<R>>,
}

impl<R: Send + Sync + 'static> Service<R> {
    /// Create a new service around the given state.
    pub fn new(state: R) -> Self {
        Self {
            state,
            handlers: HashMap::new(),
        }
    }

    /// Register a command handler with a guard function.
    ///
    /// The guard is called before the handler. If it returns `false`,
    /// the command is rejected with `HandlerError::GuardRejected`.
    pub fn command_guarded<G, F>(mut self, name: &str, guard: G, handler: F) -> Self
    where
        G: Fn(&Context<R>) -> bool + Send + Sync + 'static,
        F: Fn(&Context<R>) -> Result<Value, HandlerError> + Send + Sync + 'static,
    {
        self.handlers.insert(
            name.to_string(),
            CommandHandler {
                guard: Box::new(guard),
                handle: Box::new(handler),
            },
        );
        self
    }

    /// Dispatch a command by name.
    ///
    /// Builds a `Context` from the input and session, looks up the handler,
    /// runs the guard, then calls the handler.
    pub fn dispatch(
        &self,
        command: &str,
        input: Value,
        session: Session,
    ) -> Result<Value, HandlerError> {
        let handler = self
            .handlers
            .get(command)
            .ok_or_else(|| HandlerError::UnknownCommand(command.to_string()))?;

        let ctx = Context::new(input, session, &self.state);

        if !(handler.guard)(&ctx) {
            debug!(command, "guard rejected command");
            return Err(HandlerError::GuardRejected(command.to_string()));
        }

        let result = (handler.handle)(&ctx);
        if let Err(e) = &result {
            if e.status_code() >= 500 {
                warn!(command, error = %e, "command failed");
            } else {
                debug!(command, error = %e, "command rejected");
            }
        }
        result
    }

    /// List registered command names.
    pub fn commands(&self) -> Vec<&str> {
        self.handlers.keys().map(|s| s.as_str()).collect()
    }

    /// Get a reference to the application state.
    pub fn state(&self) -> &R {
        &self.state
    }
}
