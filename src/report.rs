//! Sales report - per-product totals over the order history.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::checkout::OrderItem;
use crate::model::{ModelError, ModelStore, ModelsExt};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReportLine {
    pub product_id: String,
    pub product_name: String,
    pub total_units_sold: u64,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("revenue for product {product_id} exceeds the supported range")]
    Overflow { product_id: String },
    #[error(transparent)]
    Store(#[from] ModelError),
}

/// Group order items by product id and name, summing units and revenue.
///
/// Sorted by units sold (descending), then product id and name ascending.
pub fn aggregate<'a, I>(items: I) -> Result<Vec<SalesReportLine>, ReportError>
where
    I: IntoIterator<Item = &'a OrderItem>,
{
    let mut groups: HashMap<(&str, &str), SalesReportLine> = HashMap::new();

    for item in items {
        let line = groups
            .entry((item.product_id.as_str(), item.product_name.as_str()))
            .or_insert_with(|| SalesReportLine {
                product_id: item.product_id.clone(),
                product_name: item.product_name.clone(),
                total_units_sold: 0,
                total_revenue: Decimal::ZERO,
            });
        let overflow = || ReportError::Overflow {
            product_id: item.product_id.clone(),
        };
        line.total_units_sold = line
            .total_units_sold
            .checked_add(u64::from(item.quantity))
            .ok_or_else(overflow)?;
        line.total_revenue = item
            .revenue()
            .and_then(|revenue| line.total_revenue.checked_add(revenue))
            .ok_or_else(overflow)?;
    }

    let mut lines: Vec<SalesReportLine> = groups.into_values().collect();
    lines.sort_by(|a, b| {
        b.total_units_sold
            .cmp(&a.total_units_sold)
            .then_with(|| a.product_id.cmp(&b.product_id))
            .then_with(|| a.product_name.cmp(&b.product_name))
    });
    Ok(lines)
}

/// Build the sales report from every recorded order item.
pub fn sales_report<S: ModelStore>(store: &S) -> Result<Vec<SalesReportLine>, ReportError> {
    let items = store.models::<OrderItem>().all()?;
    aggregate(items.iter().map(|versioned| &versioned.data))
}
