//! Storefront - a small e-commerce backend.
//!
//! A product catalog with soft deletion, a checkout flow whose inventory
//! decrements are atomic per product, a sales report aggregated from order
//! records, and token-based accounts. Everything sits on the [`ModelStore`]
//! document abstraction; [`microsvc`] exposes it as commands and HTTP routes.

mod app;
pub mod auth;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod handlers;
pub mod microsvc;
pub mod model;
pub mod report;
pub mod seed;
pub mod telemetry;

pub use app::Storefront;
pub use auth::{AuthError, AuthGate, Identity, Role, TokenGate};
pub use catalog::{CatalogError, NewProduct, Product, ProductCatalog, ProductPatch};
pub use checkout::{CartLine, CheckoutError, CheckoutMode, CheckoutProcessor, CheckoutReceipt, OrderItem};
pub use model::{InMemoryModelStore, Model, ModelError, ModelRepository, ModelStore, ModelsExt, Versioned};
pub use report::{ReportError, SalesReportLine};
