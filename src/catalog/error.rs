use crate::model::ModelError;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid product: {0}")]
    Invalid(String),
    #[error("product {0} already exists")]
    Duplicate(String),
    #[error("product {0} not found or already deleted")]
    NotFound(String),
    #[error(transparent)]
    Store(#[from] ModelError),
}
