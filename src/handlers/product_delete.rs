//! Handler: product.delete
//!
//! Soft delete; the product stays in storage for order history.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::app::Storefront;
use crate::auth::Role;
use crate::microsvc::{Context, HandlerError};
use crate::model::ModelStore;

pub const COMMAND: &str = "product.delete";

#[derive(Deserialize)]
pub struct Input {
    pub id: String,
}

pub fn guard<S>(_ctx: &Context<Storefront<S>>) -> bool {
    true
}

pub fn handle<S: ModelStore>(ctx: &Context<Storefront<S>>) -> Result<Value, HandlerError> {
    ctx.require_role(Role::Admin)?;
    let input = ctx.input::<Input>()?;
    let product = ctx.state().catalog().soft_delete(&input.id)?;
    Ok(json!({
        "message": "Product soft-deleted successfully.",
        "product": product.view(),
    }))
}
