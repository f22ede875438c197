//! Handler: product.update

use serde::Deserialize;
use serde_json::{json, Value};

use crate::app::Storefront;
use crate::auth::Role;
use crate::catalog::ProductPatch;
use crate::microsvc::{Context, HandlerError};
use crate::model::ModelStore;

pub const COMMAND: &str = "product.update";

#[derive(Deserialize)]
pub struct Input {
    pub id: String,
    #[serde(flatten)]
    pub patch: ProductPatch,
}

pub fn guard<S>(_ctx: &Context<Storefront<S>>) -> bool {
    true
}

pub fn handle<S: ModelStore>(ctx: &Context<Storefront<S>>) -> Result<Value, HandlerError> {
    ctx.require_role(Role::Admin)?;
    let input = ctx.input::<Input>()?;
    let product = ctx.state().catalog().update(&input.id, input.patch)?;
    Ok(json!(product.view()))
}
