//! Handler: product.list

use serde_json::{json, Value};

use crate::app::Storefront;
use crate::catalog::Product;
use crate::microsvc::{Context, HandlerError};
use crate::model::ModelStore;

pub const COMMAND: &str = "product.list";

pub fn guard<S>(_ctx: &Context<Storefront<S>>) -> bool {
    true
}

pub fn handle<S: ModelStore>(ctx: &Context<Storefront<S>>) -> Result<Value, HandlerError> {
    let products = ctx.state().catalog().list_active()?;
    let views: Vec<_> = products.iter().map(Product::view).collect();
    Ok(json!(views))
}
