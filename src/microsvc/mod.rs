//! microsvc - Convention-based command handler framework.
//!
//! Build the API by registering command handlers on a `Service`.
//! Each handler receives a `Context<R>` with access to the input payload,
//! session variables, and the application state.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use storefront::microsvc;
//! use serde_json::json;
//!
//! let service = Arc::new(storefront::handlers::service(app));
//!
//! // Direct dispatch
//! let result = service.dispatch("product.list", json!({}), microsvc::Session::new());
//!
//! // HTTP transport (requires "http" feature)
//! // microsvc::serve(service, "0.0.0.0:3000", shutdown).await?;
//! ```
//!
//! ## Handler Convention
//!
//! ```ignore
//! // src/handlers/product_get.rs
//!
//! pub const COMMAND: &str = "product.get";
//!
//! pub fn guard<S>(ctx: &Context<Storefront<S>>) -> bool {
//!     ctx.has_fields(&["id"])
//! }
//!
//! pub fn handle<S: ModelStore>(ctx: &Context<Storefront<S>>) -> Result<Value, HandlerError> {
//!     let input = ctx.input::<Input>()?;
//!     let product = ctx.state().catalog().get(&input.id)?;
//!     Ok(json!(product))
//! }
//! ```
//!
//! Guards run before the handler, so a command that needs a caller keeps its
//! guard open and checks the caller first in `handle`. That way an anonymous
//! request is answered 401 rather than 400.

mod context;
mod error;
mod service;
mod session;

pub use context::Context;
pub use error::HandlerError;
pub use service::Service;
pub use session::Session;

// HTTP transport (requires "http" feature)
#[cfg(feature = "http")]
mod http;
#[cfg(feature = "http")]
pub use http::{router, serve};

/// Register handler modules with a service using the convention pattern.
///
/// Each handler module must export:
/// - `COMMAND: &str` - the command name
/// - `guard(ctx) -> bool` - input shape check for public commands
/// - `handle(ctx) -> Result<Value, HandlerError>` - the handler
///
/// # Example
/// ```ignore
/// let service = storefront::register_handlers!(
///     microsvc::Service::new(app),
///     handlers::product_list,
///     handlers::checkout,
/// );
/// ```
#[macro_export]
macro_rules! register_handlers {
    ($service:expr, $( $($seg:ident)::+ ),+ $(,)?) => {
        $service
        $(
            .command_guarded(
                $($seg)::+::COMMAND,
                $($seg)::+::guard,
                $($seg)::+::handle,
            )
        )+
    };
}
