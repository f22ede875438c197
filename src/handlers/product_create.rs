//! Handler: product.create

use serde_json::{json, Value};

use crate::app::Storefront;
use crate::auth::Role;
use crate::catalog::NewProduct;
use crate::microsvc::{Context, HandlerError};
use crate::model::ModelStore;

pub const COMMAND: &str = "product.create";

/// Open; the body is only decoded once the caller is known to be an admin.
pub fn guard<S>(_ctx: &Context<Storefront<S>>) -> bool {
    true
}

pub fn handle<S: ModelStore>(ctx: &Context<Storefront<S>>) -> Result<Value, HandlerError> {
    ctx.require_role(Role::Admin)?;
    let input = ctx.input::<NewProduct>()?;
    let product = ctx.state().catalog().create(input)?;
    Ok(json!(product.view()))
}
