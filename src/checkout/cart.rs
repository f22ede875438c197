use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::CheckoutError;
use crate::model::Model;

/// One cart line as submitted by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub price: Option<Decimal>,
    pub quantity: i64,
}

impl CartLine {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Decimal, quantity: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: Some(price),
            quantity,
        }
    }
}

/// Immutable record of one sold cart line.
///
/// Name and price are snapshots taken at the time of sale; later catalog
/// edits do not touch them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub unit_price: Decimal,
    pub sale_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buyer: Option<String>,
}

impl Model for OrderItem {
    const COLLECTION: &'static str = "order_items";

    fn id(&self) -> &str {
        &self.id
    }
}

impl OrderItem {
    /// Line total, or `None` when it does not fit in a `Decimal`.
    pub fn revenue(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.quantity))
    }
}

/// Validate every line and turn the cart into order records.
///
/// Fails on the first bad line; nothing is produced for a partially valid
/// cart.
pub(crate) fn validate(
    cart: &[CartLine],
    buyer: Option<&str>,
    sale_date: DateTime<Utc>,
) -> Result<Vec<OrderItem>, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::Validation("cart is empty".into()));
    }

    cart.iter()
        .enumerate()
        .map(|(index, line)| {
            let invalid = |reason: &str| {
                CheckoutError::Validation(format!("line {}: {}", index + 1, reason))
            };

            if line.id.trim().is_empty() {
                return Err(invalid("product id is required"));
            }
            if line.name.trim().is_empty() {
                return Err(invalid("product name is required"));
            }
            let unit_price = line.price.ok_or_else(|| invalid("unit price is required"))?;
            if unit_price.is_sign_negative() {
                return Err(invalid("unit price must not be negative"));
            }
            let quantity = u32::try_from(line.quantity)
                .ok()
                .filter(|q| *q >= 1)
                .ok_or_else(|| invalid("quantity must be a whole number of at least 1"))?;
            if unit_price.checked_mul(Decimal::from(quantity)).is_none() {
                return Err(invalid("line total is too large"));
            }

            Ok(OrderItem {
                id: Uuid::new_v4().to_string(),
                product_id: line.id.clone(),
                product_name: line.name.clone(),
                quantity,
                unit_price,
                sale_date,
                buyer: buyer.map(str::to_string),
            })
        })
        .collect()
}
