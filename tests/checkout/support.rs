//! Shared fixtures for checkout tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rust_decimal::Decimal;
use storefront::model::Guard;
use storefront::{
    CartLine, InMemoryModelStore, Model, ModelError, ModelStore, ModelsExt, NewProduct, Product,
    ProductCatalog, Versioned,
};

/// A store holding P001 (59.99, 15), P002 (24.50, 50) and P003 (35.00, 0).
pub fn seeded_store() -> InMemoryModelStore {
    let store = InMemoryModelStore::new();
    seed(&store);
    store
}

pub fn seed<S: ModelStore + Clone>(store: &S) {
    let catalog = ProductCatalog::new(store.clone());
    for (id, name, cents, stock) in [
        ("P001", "Stylish Headset", 5999, 15),
        ("P002", "Ergonomic Mouse", 2450, 50),
        ("P003", "Portable Charger", 3500, 0),
    ] {
        catalog
            .create(NewProduct {
                id: id.into(),
                name: name.into(),
                image: String::new(),
                description: String::new(),
                price: Decimal::new(cents, 2),
                stock,
            })
            .unwrap();
    }
}

pub fn line(id: &str, name: &str, cents: i64, quantity: i64) -> CartLine {
    CartLine::new(id, name, Decimal::new(cents, 2), quantity)
}

pub fn headset(quantity: i64) -> CartLine {
    line("P001", "Stylish Headset", 5999, quantity)
}

pub fn stock_of<S: ModelStore>(store: &S, id: &str) -> u32 {
    store
        .models::<Product>()
        .get(id)
        .unwrap()
        .map(|p| p.data.stock)
        .unwrap()
}

/// Wraps the in-memory store and can be told to fail batch inserts.
#[derive(Clone, Default)]
pub struct FlakyStore {
    inner: InMemoryModelStore,
    fail_inserts: Arc<AtomicBool>,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_inserts(&self, fail: bool) {
        self.fail_inserts.store(fail, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), ModelError> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(ModelError::Storage("backend unavailable".into()));
        }
        Ok(())
    }
}

impl ModelStore for FlakyStore {
    fn get_model<M: Model>(&self, id: &str) -> Result<Option<Versioned<M>>, ModelError> {
        self.inner.get_model(id)
    }

    fn insert_model<M: Model>(&self, model: &M) -> Result<Versioned<M>, ModelError> {
        self.check()?;
        self.inner.insert_model(model)
    }

    fn insert_models<M: Model>(&self, models: &[M]) -> Result<Vec<Versioned<M>>, ModelError> {
        self.check()?;
        self.inner.insert_models(models)
    }

    fn modify_model<M: Model>(
        &self,
        id: &str,
        guard: &mut Guard<'_, M>,
    ) -> Result<Option<Versioned<M>>, ModelError> {
        self.inner.modify_model(id, guard)
    }

    fn modify_models<M: Model>(
        &self,
        ids: &[&str],
        guard: &mut Guard<'_, M>,
    ) -> Result<Option<Vec<Versioned<M>>>, ModelError> {
        self.inner.modify_models(ids, guard)
    }

    fn delete_model<M: Model>(&self, id: &str) -> Result<bool, ModelError> {
        self.inner.delete_model::<M>(id)
    }

    fn find_models<M: Model>(
        &self,
        predicate: &dyn Fn(&M) -> bool,
    ) -> Result<Vec<Versioned<M>>, ModelError> {
        self.inner.find_models(predicate)
    }
}
