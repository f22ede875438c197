use super::receipt::Shortfall;
use crate::model::ModelError;

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    /// Empty cart or malformed line. Nothing was written.
    #[error("invalid cart: {0}")]
    Validation(String),
    /// Order records could not be written. No stock was left decremented.
    #[error("could not record order: {0}")]
    Persistence(#[from] ModelError),
    /// Strict mode only: at least one line could not be fully decremented.
    #[error("insufficient stock for {} line(s)", .0.len())]
    Shortfall(Vec<Shortfall>),
}
