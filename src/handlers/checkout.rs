//! Handler: checkout
//!
//! Any authenticated caller may check out; the caller's user id is recorded
//! on every order item. The caller is resolved before the cart is looked at,
//! so an anonymous request is 401 whatever its body.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::app::Storefront;
use crate::checkout::CartLine;
use crate::microsvc::{Context, HandlerError};
use crate::model::ModelStore;

pub const COMMAND: &str = "checkout";

#[derive(Deserialize)]
pub struct Input {
    #[serde(default)]
    pub cart: Vec<CartLine>,
}

pub fn guard<S>(_ctx: &Context<Storefront<S>>) -> bool {
    true
}

pub fn handle<S: ModelStore>(ctx: &Context<Storefront<S>>) -> Result<Value, HandlerError> {
    let caller = ctx.identity()?;
    let input = ctx.input::<Input>()?;
    let receipt = ctx
        .state()
        .checkout()
        .checkout_for(Some(&caller.user_id), &input.cart)?;
    Ok(json!(receipt))
}
