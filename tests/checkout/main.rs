//! Checkout integration tests: catalog, checkout and sales report over one store.

mod support;
mod lenient;
mod persistence;
mod money;
