//! Lenient mode: order records first, then per-line guarded decrements.

use rust_decimal::Decimal;
use storefront::checkout::{LineOutcome, ShortfallReason};
use storefront::report::sales_report;
use storefront::{
    CheckoutError, CheckoutMode, CheckoutProcessor, ModelsExt, OrderItem, ProductCatalog,
    ProductPatch,
};

use crate::support::{headset, line, seeded_store, stock_of};

#[test]
fn sale_decrements_stock_and_feeds_report() {
    let store = seeded_store();
    let checkout = CheckoutProcessor::new(store.clone(), CheckoutMode::Lenient);

    let receipt = checkout.checkout(&[headset(2)]).unwrap();
    assert_eq!(receipt.message, "Checkout successful");
    assert!(receipt.fully_fulfilled());
    assert_eq!(receipt.order_ids.len(), 1);
    assert_eq!(receipt.order_id, receipt.order_ids[0]);
    assert_eq!(stock_of(&store, "P001"), 13);

    let report = sales_report(&store).unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].product_id, "P001");
    assert_eq!(report[0].product_name, "Stylish Headset");
    assert_eq!(report[0].total_units_sold, 2);
    assert_eq!(report[0].total_revenue, Decimal::new(11998, 2));
}

#[test]
fn short_line_keeps_its_order_record() {
    let store = seeded_store();
    let checkout = CheckoutProcessor::new(store.clone(), CheckoutMode::Lenient);

    let receipt = checkout
        .checkout(&[
            line("P002", "Ergonomic Mouse", 2450, 1),
            line("P003", "Portable Charger", 3500, 1),
        ])
        .unwrap();

    assert!(!receipt.fully_fulfilled());
    assert_eq!(receipt.lines[0].outcome, LineOutcome::Decremented);
    assert_eq!(receipt.lines[1].outcome, LineOutcome::Shortfall);
    assert_eq!(receipt.shortfalls.len(), 1);
    assert_eq!(receipt.shortfalls[0].product_id, "P003");
    assert_eq!(
        receipt.shortfalls[0].reason,
        ShortfallReason::Insufficient { available: 0 }
    );

    assert_eq!(stock_of(&store, "P002"), 49);
    assert_eq!(stock_of(&store, "P003"), 0);

    // The unfulfilled line is still counted as sold.
    let report = sales_report(&store).unwrap();
    let charger = report.iter().find(|l| l.product_id == "P003").unwrap();
    assert_eq!(charger.total_units_sold, 1);
    assert_eq!(charger.total_revenue, Decimal::new(3500, 2));
}

#[test]
fn deleted_and_unknown_products_are_reported() {
    let store = seeded_store();
    ProductCatalog::new(store.clone()).soft_delete("P002").unwrap();
    let checkout = CheckoutProcessor::new(store.clone(), CheckoutMode::Lenient);

    let receipt = checkout
        .checkout(&[
            line("P002", "Ergonomic Mouse", 2450, 1),
            line("P999", "Ghost Gadget", 1000, 1),
        ])
        .unwrap();

    let reasons: Vec<_> = receipt.shortfalls.iter().map(|s| s.reason.clone()).collect();
    assert_eq!(reasons, vec![ShortfallReason::Deleted, ShortfallReason::Missing]);
    assert_eq!(stock_of(&store, "P002"), 50);
    assert_eq!(store.models::<OrderItem>().all().unwrap().len(), 2);
}

#[test]
fn invalid_cart_writes_nothing() {
    let store = seeded_store();
    let checkout = CheckoutProcessor::new(store.clone(), CheckoutMode::Lenient);

    let err = checkout.checkout(&[]).unwrap_err();
    assert!(matches!(err, CheckoutError::Validation(ref msg) if msg == "cart is empty"));

    let err = checkout.checkout(&[headset(1), headset(-3)]).unwrap_err();
    assert!(matches!(err, CheckoutError::Validation(ref msg) if msg.starts_with("line 2")));

    assert_eq!(stock_of(&store, "P001"), 15);
    assert!(store.models::<OrderItem>().all().unwrap().is_empty());
}

#[test]
fn order_items_snapshot_name_and_price() {
    let store = seeded_store();
    let checkout = CheckoutProcessor::new(store.clone(), CheckoutMode::Lenient);
    checkout.checkout_for(Some("user-1"), &[headset(1)]).unwrap();

    ProductCatalog::new(store.clone())
        .update(
            "P001",
            ProductPatch {
                name: Some("Headset Mk II".into()),
                price: Some(Decimal::new(7999, 2)),
                ..Default::default()
            },
        )
        .unwrap();

    let items = store.models::<OrderItem>().all().unwrap();
    assert_eq!(items[0].data.product_name, "Stylish Headset");
    assert_eq!(items[0].data.unit_price, Decimal::new(5999, 2));
    assert_eq!(items[0].data.buyer.as_deref(), Some("user-1"));

    let report = sales_report(&store).unwrap();
    assert_eq!(report[0].total_revenue, Decimal::new(5999, 2));
}
