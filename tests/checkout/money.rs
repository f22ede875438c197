//! Money stays exact through storage and never overflows silently.

use rust_decimal::Decimal;
use storefront::report::{sales_report, ReportError};
use storefront::{
    CartLine, CheckoutError, CheckoutMode, CheckoutProcessor, ModelsExt, NewProduct, OrderItem,
    ProductCatalog,
};

use crate::support::{headset, seeded_store, stock_of};

fn price(text: &str) -> Decimal {
    text.parse().unwrap()
}

#[test]
fn high_precision_prices_are_stored_exactly() {
    let store = seeded_store();
    let checkout = CheckoutProcessor::new(store.clone(), CheckoutMode::Lenient);
    let precise = price("1234567890123.4567");

    checkout
        .checkout(&[
            CartLine::new("P001", "Stylish Headset", precise, 1),
            CartLine::new("P002", "Ergonomic Mouse", Decimal::MAX, 1),
        ])
        .unwrap();

    let items = store.models::<OrderItem>().all().unwrap();
    let unit_price = |id: &str| {
        items
            .iter()
            .find(|item| item.data.product_id == id)
            .map(|item| item.data.unit_price)
            .unwrap()
    };
    assert_eq!(unit_price("P001"), precise);
    assert_eq!(unit_price("P002"), Decimal::MAX);

    let report = sales_report(&store).unwrap();
    let revenue = |id: &str| {
        report
            .iter()
            .find(|line| line.product_id == id)
            .map(|line| line.total_revenue)
            .unwrap()
    };
    assert_eq!(revenue("P001"), precise);
    assert_eq!(revenue("P002"), Decimal::MAX);
}

#[test]
fn catalog_price_is_stored_exactly() {
    let store = seeded_store();
    let catalog = ProductCatalog::new(store.clone());
    let precise = price("1234567890123.4567");

    catalog
        .create(NewProduct {
            id: "P100".into(),
            name: "Gold Keyboard".into(),
            image: String::new(),
            description: String::new(),
            price: precise,
            stock: 1,
        })
        .unwrap();

    assert_eq!(catalog.get("P100").unwrap().unwrap().price, precise);
    let listed = catalog.list_active().unwrap();
    assert_eq!(listed.iter().find(|p| p.id == "P100").unwrap().price, precise);
}

#[test]
fn overflowing_line_total_is_rejected() {
    let store = seeded_store();
    let checkout = CheckoutProcessor::new(store.clone(), CheckoutMode::Lenient);
    checkout.checkout(&[headset(1)]).unwrap();

    let huge = price("40000000000000000000000000000");
    let err = checkout
        .checkout(&[CartLine::new("P002", "Ergonomic Mouse", huge, 2)])
        .unwrap_err();
    assert!(
        matches!(&err, CheckoutError::Validation(msg) if msg == "line 1: line total is too large"),
        "{err:?}"
    );

    assert_eq!(stock_of(&store, "P002"), 50);
    assert_eq!(store.models::<OrderItem>().all().unwrap().len(), 1);
    assert_eq!(sales_report(&store).unwrap().len(), 1);
}

#[test]
fn report_overflow_is_an_error_not_a_panic() {
    let store = seeded_store();
    let checkout = CheckoutProcessor::new(store.clone(), CheckoutMode::Lenient);
    let huge = price("40000000000000000000000000000");

    for _ in 0..2 {
        checkout
            .checkout(&[CartLine::new("P002", "Ergonomic Mouse", huge, 1)])
            .unwrap();
    }

    let err = sales_report(&store).unwrap_err();
    assert!(
        matches!(&err, ReportError::Overflow { product_id } if product_id == "P002"),
        "{err:?}"
    );
}
