//! Product catalog - create, update, soft delete and list products.

mod catalog;
mod error;
mod product;

pub use catalog::ProductCatalog;
pub use error::CatalogError;
pub use product::{Lifecycle, NewProduct, Product, ProductPatch, ProductView, MIN_PRICE};
