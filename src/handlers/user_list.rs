//! Handler: user.list
//!
//! Admin only. Password hashes are never part of the response.

use serde_json::{json, Value};

use crate::app::Storefront;
use crate::auth::Role;
use crate::microsvc::{Context, HandlerError};
use crate::model::ModelStore;

pub const COMMAND: &str = "user.list";

pub fn guard<S>(_ctx: &Context<Storefront<S>>) -> bool {
    true
}

pub fn handle<S: ModelStore>(ctx: &Context<Storefront<S>>) -> Result<Value, HandlerError> {
    ctx.require_role(Role::Admin)?;
    let users = ctx.state().accounts().list_users()?;
    Ok(json!(users))
}
