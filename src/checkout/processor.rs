use std::collections::HashMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};

use super::cart::{validate, CartLine, OrderItem};
use super::error::CheckoutError;
use super::receipt::{CheckoutReceipt, LineOutcome, LineResult, Shortfall, ShortfallReason};
use crate::catalog::Product;
use crate::model::{ModelError, ModelStore, ModelsExt};

/// How stock shortfalls during checkout are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutMode {
    /// Record every order line, then decrement stock line by line. A line
    /// whose product is missing, deleted or short keeps its order record and
    /// is listed in the receipt's shortfalls; the checkout still succeeds.
    #[default]
    Lenient,
    /// Decrement stock for the whole cart in one atomic step and reject the
    /// cart if any line cannot be satisfied. Order records are written only
    /// after the decrement succeeded.
    Strict,
}

/// Converts carts into order records and stock decrements.
#[derive(Clone)]
pub struct CheckoutProcessor<S> {
    store: S,
    mode: CheckoutMode,
}

impl<S: ModelStore> CheckoutProcessor<S> {
    pub fn new(store: S, mode: CheckoutMode) -> Self {
        Self { store, mode }
    }

    pub fn mode(&self) -> CheckoutMode {
        self.mode
    }

    /// Check out an anonymous cart.
    pub fn checkout(&self, cart: &[CartLine]) -> Result<CheckoutReceipt, CheckoutError> {
        self.checkout_for(None, cart)
    }

    /// Check out a cart on behalf of `buyer`.
    ///
    /// Not idempotent: submitting the same cart twice records two orders.
    #[instrument(skip(self, cart), fields(mode = ?self.mode, lines = cart.len()))]
    pub fn checkout_for(
        &self,
        buyer: Option<&str>,
        cart: &[CartLine],
    ) -> Result<CheckoutReceipt, CheckoutError> {
        let items = validate(cart, buyer, Utc::now()).map_err(|e| {
            warn!(error = %e, "cart rejected");
            e
        })?;

        let receipt = match self.mode {
            CheckoutMode::Lenient => self.record_then_decrement(items)?,
            CheckoutMode::Strict => self.decrement_then_record(items)?,
        };

        info!(
            order_id = %receipt.order_id,
            shortfalls = receipt.shortfalls.len(),
            "checkout complete"
        );
        Ok(receipt)
    }

    fn record_then_decrement(&self, items: Vec<OrderItem>) -> Result<CheckoutReceipt, CheckoutError> {
        self.store
            .models::<OrderItem>()
            .insert_all(&items)
            .map_err(|e| {
                error!(error = %e, "failed to record order items; stock untouched");
                CheckoutError::Persistence(e)
            })?;

        let products = self.store.models::<Product>();
        let mut lines = Vec::with_capacity(items.len());
        let mut shortfalls = Vec::new();

        for item in &items {
            let applied = products.modify(&item.product_id, &mut |product: &mut Product| {
                product.take_stock(item.quantity)
            })?;

            let outcome = match applied {
                Some(product) => {
                    info!(
                        product_id = %item.product_id,
                        quantity = item.quantity,
                        remaining = product.data.stock,
                        "stock decremented"
                    );
                    LineOutcome::Decremented
                }
                None => {
                    let reason = self.shortfall_reason(&item.product_id)?;
                    warn!(
                        product_id = %item.product_id,
                        quantity = item.quantity,
                        order_item_id = %item.id,
                        ?reason,
                        "stock not decremented; order item kept"
                    );
                    shortfalls.push(Shortfall {
                        product_id: item.product_id.clone(),
                        requested: item.quantity,
                        reason,
                    });
                    LineOutcome::Shortfall
                }
            };

            lines.push(LineResult {
                order_item_id: item.id.clone(),
                product_id: item.product_id.clone(),
                quantity: item.quantity,
                outcome,
            });
        }

        Ok(receipt(&items, lines, shortfalls))
    }

    fn decrement_then_record(&self, items: Vec<OrderItem>) -> Result<CheckoutReceipt, CheckoutError> {
        let products = self.store.models::<Product>();
        let ids: Vec<&str> = items.iter().map(|item| item.product_id.as_str()).collect();

        // The store visits ids in order, so the guard walks the quantities alongside.
        let mut quantities = items.iter().map(|item| item.quantity);
        let applied = products.modify_all(&ids, &mut |product: &mut Product| {
            quantities
                .next()
                .is_some_and(|quantity| product.take_stock(quantity))
        })?;

        if applied.is_none() {
            let shortfalls = self.strict_shortfalls(&items)?;
            warn!(shortfalls = shortfalls.len(), "cart rejected for insufficient stock");
            return Err(CheckoutError::Shortfall(shortfalls));
        }

        if let Err(e) = self.store.models::<OrderItem>().insert_all(&items) {
            error!(error = %e, "failed to record order items; restoring stock");
            self.restore_stock(&items);
            return Err(CheckoutError::Persistence(e));
        }

        let lines = items
            .iter()
            .map(|item| LineResult {
                order_item_id: item.id.clone(),
                product_id: item.product_id.clone(),
                quantity: item.quantity,
                outcome: LineOutcome::Decremented,
            })
            .collect();

        Ok(receipt(&items, lines, Vec::new()))
    }

    /// Classify a failed decrement by reading the product's current state.
    fn shortfall_reason(&self, product_id: &str) -> Result<ShortfallReason, ModelError> {
        Ok(match self.store.models::<Product>().get(product_id)? {
            None => ShortfallReason::Missing,
            Some(p) if !p.data.is_active() => ShortfallReason::Deleted,
            Some(p) => ShortfallReason::Insufficient {
                available: p.data.stock,
            },
        })
    }

    /// Lines that cannot be satisfied, counting earlier lines for the same product.
    fn strict_shortfalls(&self, items: &[OrderItem]) -> Result<Vec<Shortfall>, ModelError> {
        let mut requested: HashMap<&str, u64> = HashMap::new();
        let mut shortfalls = Vec::new();

        for item in items {
            let total = requested.entry(item.product_id.as_str()).or_default();
            *total += u64::from(item.quantity);

            let reason = match self.shortfall_reason(&item.product_id)? {
                ShortfallReason::Insufficient { available } if u64::from(available) >= *total => {
                    continue;
                }
                reason => reason,
            };
            shortfalls.push(Shortfall {
                product_id: item.product_id.clone(),
                requested: item.quantity,
                reason,
            });
        }

        Ok(shortfalls)
    }

    fn restore_stock(&self, items: &[OrderItem]) {
        let products = self.store.models::<Product>();
        for item in items {
            let restored = products.modify(&item.product_id, &mut |product: &mut Product| {
                product.restock(item.quantity);
                true
            });
            if let Err(e) = restored {
                error!(product_id = %item.product_id, error = %e, "failed to restore stock");
            }
        }
    }
}

fn receipt(items: &[OrderItem], lines: Vec<LineResult>, shortfalls: Vec<Shortfall>) -> CheckoutReceipt {
    let order_ids: Vec<String> = items.iter().map(|item| item.id.clone()).collect();
    CheckoutReceipt {
        message: "Checkout successful".to_string(),
        order_id: order_ids.first().cloned().unwrap_or_default(),
        order_ids,
        lines,
        shortfalls,
    }
}
