//! Handler: user.register

use serde::Deserialize;
use serde_json::{json, Value};

use crate::app::Storefront;
use crate::microsvc::{Context, HandlerError};
use crate::model::ModelStore;

pub const COMMAND: &str = "user.register";

#[derive(Deserialize)]
pub struct Input {
    #[serde(default)]
    pub name: String,
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
    let user = ctx
        .state()
        .accounts()
        .register(&input.name, &input.email, &input.password)?;
    Ok(json!(user))
}
