use serde::{Deserialize, Serialize};

/// Why a line's stock decrement did not apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ShortfallReason {
    Insufficient { available: u32 },
    Missing,
    Deleted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shortfall {
    pub product_id: String,
    pub requested: u32,
    pub reason: ShortfallReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineOutcome {
    Decremented,
    Shortfall,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineResult {
    pub order_item_id: String,
    pub product_id: String,
    pub quantity: u32,
    pub outcome: LineOutcome,
}

/// Result of an accepted checkout.
///
/// `order_id` is the first created order record. In lenient mode
/// `shortfalls` lists lines whose order record exists but whose stock was
/// not decremented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutReceipt {
    pub message: String,
    pub order_id: String,
    pub order_ids: Vec<String>,
    pub lines: Vec<LineResult>,
    pub shortfalls: Vec<Shortfall>,
}

impl CheckoutReceipt {
    pub fn fully_fulfilled(&self) -> bool {
        self.shortfalls.is_empty()
    }
}
