//! Handler: user.login

use serde::Deserialize;
use serde_json::{json, Value};

use crate::app::Storefront;
use crate::microsvc::{Context, HandlerError};
use crate::model::ModelStore;

pub const COMMAND: &str = "user.login";

#[derive(Deserialize)]
pub struct Input {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

pub fn guard<S>(ctx: &Context<Storefront<S>>) -> bool {
    ctx.raw_input().is_object()
}

pub fn handle<S: ModelStore>(ctx: &Context<Storefront<S>>) -> Result<Value, HandlerError> {
    let input = ctx.input::<Input>()?;
    let outcome = ctx
        .state()
        .accounts()
        .login(&input.email, &input.password)?;
    Ok(json!(outcome))
}
