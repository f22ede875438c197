//! Store failures while recording order items.

use storefront::{CheckoutError, CheckoutMode, CheckoutProcessor, ModelsExt, OrderItem};

use crate::support::{headset, seed, stock_of, FlakyStore};

fn flaky() -> FlakyStore {
    let store = FlakyStore::new();
    seed(&store);
    store.fail_inserts(true);
    store
}

#[test]
fn lenient_failure_leaves_stock_untouched() {
    let store = flaky();
    let checkout = CheckoutProcessor::new(store.clone(), CheckoutMode::Lenient);

    let err = checkout.checkout(&[headset(2)]).unwrap_err();
    assert!(matches!(err, CheckoutError::Persistence(_)));
    assert_eq!(stock_of(&store, "P001"), 15);
    assert!(store.models::<OrderItem>().all().unwrap().is_empty());
}

#[test]
fn strict_failure_restores_stock() {
    let store = flaky();
    let checkout = CheckoutProcessor::new(store.clone(), CheckoutMode::Strict);

    let err = checkout.checkout(&[headset(2), headset(3)]).unwrap_err();
    assert!(matches!(err, CheckoutError::Persistence(_)));
    assert_eq!(stock_of(&store, "P001"), 15);

    store.fail_inserts(false);
    checkout.checkout(&[headset(2)]).unwrap();
    assert_eq!(stock_of(&store, "P001"), 13);
}
