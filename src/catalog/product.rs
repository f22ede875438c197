use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::Model;

/// Lowest price a product may carry.
pub const MIN_PRICE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Lifecycle state of a catalog entry.
///
/// Stored on the wire as the `isDeleted` boolean so existing documents and
/// clients keep working.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "bool", into = "bool")]
pub enum Lifecycle {
    #[default]
    Active,
    SoftDeleted,
}

impl Lifecycle {
    /// Move to `SoftDeleted`. Returns `None` if already deleted.
    pub fn soft_delete(self) -> Option<Lifecycle> {
        match self {
            Lifecycle::Active => Some(Lifecycle::SoftDeleted),
            Lifecycle::SoftDeleted => None,
        }
    }
}

impl From<bool> for Lifecycle {
    fn from(is_deleted: bool) -> Self {
        if is_deleted {
            Lifecycle::SoftDeleted
        } else {
            Lifecycle::Active
        }
    }
}

impl From<Lifecycle> for bool {
    fn from(lifecycle: Lifecycle) -> Self {
        lifecycle == Lifecycle::SoftDeleted
    }
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub stock: u32,
    #[serde(rename = "isDeleted", default)]
    pub lifecycle: Lifecycle,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Model for Product {
    const COLLECTION: &'static str = "products";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Product {
    pub fn view(&self) -> ProductView<'_> {
        ProductView {
            id: &self.id,
            name: &self.name,
            image: &self.image,
            description: &self.description,
            price: self.price,
            stock: self.stock,
            is_deleted: !self.is_active(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn is_active(&self) -> bool {
        self.lifecycle == Lifecycle::Active
    }

    /// Remove `quantity` units if the product is active and has enough on hand.
    ///
    /// This is the guard used by checkout's conditional decrement; it never
    /// takes stock below zero.
    pub fn take_stock(&mut self, quantity: u32) -> bool {
        if !self.is_active() || self.stock < quantity {
            return false;
        }
        self.stock -= quantity;
        self.updated_at = Utc::now();
        true
    }

    /// Return `quantity` units to stock.
    pub fn restock(&mut self, quantity: u32) {
        self.stock = self.stock.saturating_add(quantity);
        self.updated_at = Utc::now();
    }

    /// Soft delete. Returns false if the product was already deleted.
    pub fn retire(&mut self) -> bool {
        match self.lifecycle.soft_delete() {
            Some(next) => {
                self.lifecycle = next;
                self.updated_at = Utc::now();
                true
            }
            None => false,
        }
    }
}

/// Client-facing shape of a product, with the price as a JSON number.
///
/// The stored document keeps the price as an exact decimal string.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub image: &'a str,
    pub description: &'a str,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,
    pub stock: u32,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a product.
///
/// `stock` is signed so a negative value is reported as a validation error
/// rather than a decode failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    pub stock: i64,
}

/// Partial update of a product. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<i64>,
}
