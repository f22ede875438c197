use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, instrument};

use super::error::CatalogError;
use super::product::{Lifecycle, NewProduct, Product, ProductPatch, MIN_PRICE};
use crate::model::{ModelError, ModelStore, ModelsExt};

/// Admin-facing product catalog over a document store.
#[derive(Clone)]
pub struct ProductCatalog<S> {
    store: S,
}

fn check_price(price: Decimal) -> Result<(), CatalogError> {
    if price < MIN_PRICE {
        return Err(CatalogError::Invalid(format!(
            "price must be at least {}",
            MIN_PRICE
        )));
    }
    Ok(())
}

fn check_stock(stock: i64) -> Result<u32, CatalogError> {
    u32::try_from(stock)
        .map_err(|_| CatalogError::Invalid("stock must be a non-negative integer".into()))
}

fn check_text(field: &str, value: &str) -> Result<(), CatalogError> {
    if value.trim().is_empty() {
        return Err(CatalogError::Invalid(format!("{} is required", field)));
    }
    Ok(())
}

impl NewProduct {
    fn into_product(self) -> Result<Product, CatalogError> {
        check_text("id", &self.id)?;
        check_text("name", &self.name)?;
        check_price(self.price)?;
        let stock = check_stock(self.stock)?;

        let now = Utc::now();
        Ok(Product {
            id: self.id,
            name: self.name,
            image: self.image,
            description: self.description,
            price: self.price,
            stock,
            lifecycle: Lifecycle::Active,
            created_at: now,
            updated_at: now,
        })
    }
}

/// A patch that passed validation, ready to apply inside a store guard.
struct CheckedPatch {
    name: Option<String>,
    image: Option<String>,
    description: Option<String>,
    price: Option<Decimal>,
    stock: Option<u32>,
}

impl ProductPatch {
    fn check(self) -> Result<CheckedPatch, CatalogError> {
        if let Some(name) = &self.name {
            check_text("name", name)?;
        }
        if let Some(price) = self.price {
            check_price(price)?;
        }
        let stock = self.stock.map(check_stock).transpose()?;
        Ok(CheckedPatch {
            name: self.name,
            image: self.image,
            description: self.description,
            price: self.price,
            stock,
        })
    }
}

impl CheckedPatch {
    fn apply(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(image) = &self.image {
            product.image = image.clone();
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        product.updated_at = Utc::now();
    }
}

impl<S: ModelStore> ProductCatalog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[instrument(skip(self, input), fields(product_id = %input.id))]
    pub fn create(&self, input: NewProduct) -> Result<Product, CatalogError> {
        let product = input.into_product()?;
        match self.store.models::<Product>().insert(&product) {
            Ok(saved) => {
                info!("product created");
                Ok(saved.data)
            }
            Err(ModelError::Conflict { id, .. }) => Err(CatalogError::Duplicate(id)),
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self, patch))]
    pub fn update(&self, id: &str, patch: ProductPatch) -> Result<Product, CatalogError> {
        let patch = patch.check()?;
        let updated = self
            .store
            .models::<Product>()
            .modify(id, &mut |product: &mut Product| {
                if !product.is_active() {
                    return false;
                }
                patch.apply(product);
                true
            })?
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        info!("product updated");
        Ok(updated.data)
    }

    /// Soft delete a product. Deleting twice reports `NotFound`.
    #[instrument(skip(self))]
    pub fn soft_delete(&self, id: &str) -> Result<Product, CatalogError> {
        let deleted = self
            .store
            .models::<Product>()
            .modify(id, &mut |product: &mut Product| product.retire())?
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        info!("product soft deleted");
        Ok(deleted.data)
    }

    /// Fetch one product, including soft-deleted ones.
    pub fn get(&self, id: &str) -> Result<Option<Product>, CatalogError> {
        Ok(self
            .store
            .models::<Product>()
            .get(id)?
            .map(|versioned| versioned.data))
    }

    /// Public listing: active products sorted by name.
    pub fn list_active(&self) -> Result<Vec<Product>, CatalogError> {
        let mut products: Vec<Product> = self
            .store
            .models::<Product>()
            .find(&|p: &Product| p.is_active())?
            .into_iter()
            .map(|versioned| versioned.data)
            .collect();
        products.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(products)
    }

    /// Replace the whole catalog with `products`.
    #[instrument(skip_all, fields(count = products.len()))]
    pub fn seed(&self, products: Vec<NewProduct>) -> Result<usize, CatalogError> {
        let products = products
            .into_iter()
            .map(NewProduct::into_product)
            .collect::<Result<Vec<_>, _>>()?;

        let repo = self.store.models::<Product>();
        for existing in repo.all()? {
            repo.delete(&existing.data.id)?;
        }
        repo.insert_all(&products)?;

        info!("catalog seeded");
        Ok(products.len())
    }
}
