//! Checkout - turns a cart into order records and inventory decrements.
//!
//! Two phases, not wrapped in one cross-document transaction:
//!
//! 1. Persist: every validated line becomes an [`OrderItem`], written as one
//!    all-or-nothing batch.
//! 2. Decrement: each product's stock is reduced with a single guarded
//!    find-and-modify (exists, active, `stock >= quantity`), so concurrent
//!    checkouts can never take stock below zero.
//!
//! In [`CheckoutMode::Lenient`] a failed decrement keeps the order record and
//! is reported in the receipt. [`CheckoutMode::Strict`] reverses the phases
//! and rejects the whole cart instead.

mod cart;
mod error;
mod processor;
mod receipt;

pub use cart::{CartLine, OrderItem};
pub use error::CheckoutError;
pub use processor::{CheckoutMode, CheckoutProcessor};
pub use receipt::{CheckoutReceipt, LineOutcome, LineResult, Shortfall, ShortfallReason};
