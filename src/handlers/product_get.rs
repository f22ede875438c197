//! Handler: product.get
//!
//! Soft-deleted products are visible to admins only.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::app::Storefront;
use crate::microsvc::{Context, HandlerError};
use crate::model::ModelStore;

pub const COMMAND: &str = "product.get";

#[derive(Deserialize)]
pub struct Input {
    pub id: String,
}

pub fn guard<S>(ctx: &Context<Storefront<S>>) -> bool {
    ctx.has_fields(&["id"])
}

pub fn handle<S: ModelStore>(ctx: &Context<Storefront<S>>) -> Result<Value, HandlerError> {
    let input = ctx.input::<Input>()?;
    let is_admin = ctx.identity().is_ok_and(|caller| caller.is_admin());

    let product = ctx
        .state()
        .catalog()
        .get(&input.id)?
        .filter(|product| is_admin || product.is_active())
        .ok_or_else(|| HandlerError::NotFound(format!("product {} not found", input.id)))?;
    Ok(json!(product.view()))
}
