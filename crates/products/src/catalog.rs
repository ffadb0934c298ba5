//! In-memory product catalog.

use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use shopcart_core::{DomainResult, Entity, ProductId};

use crate::product::{Product, UpdateProduct};

/// The single source of truth for product records.
///
/// Records keep insertion order. Lookups are linear, which is fine for a
/// catalog of tens of products.
#[derive(Debug, Default)]
pub struct ProductCatalog {
    products: RwLock<Vec<Product>>,
}

/// Read access to the catalog held across several lookups.
///
/// Used by the cart store so a whole total computation sees one consistent
/// set of prices.
pub struct CatalogReadGuard<'a> {
    products: RwLockReadGuard<'a, Vec<Product>>,
}

impl CatalogReadGuard<'_> {
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from seed records. A repeated id replaces the earlier record.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let catalog = Self::new();
        for product in products {
            catalog.upsert_product(product);
        }
        catalog
    }

    pub fn read(&self) -> CatalogReadGuard<'_> {
        CatalogReadGuard {
            products: self.products.read().unwrap_or_else(PoisonError::into_inner),
        }
    }

    /// All products in catalog order.
    pub fn list_products(&self) -> Vec<Product> {
        let products = self.read();
        tracing::debug!(count = products.products.len(), "listing products");
        products.iter().cloned().collect()
    }

    pub fn find_product(&self, id: &ProductId) -> Option<Product> {
        self.read().find(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replace the product with the same id, or append it if none exists.
    ///
    /// The whole lookup + write happens under one write lock.
    pub fn upsert_product(&self, product: Product) -> Product {
        let mut products = self.products.write().unwrap_or_else(PoisonError::into_inner);

        match products.iter_mut().find(|p| p.id() == product.id()) {
            Some(existing) => {
                tracing::info!(product_id = %product.id(), "replacing product");
                *existing = product.clone();
            }
            None => {
                tracing::info!(product_id = %product.id(), "adding product");
                products.push(product.clone());
            }
        }
        product
    }

    /// Validate a client update and upsert it.
    pub fn update_product(&self, cmd: UpdateProduct) -> DomainResult<Product> {
        let product = cmd.validate().inspect_err(|e| {
            tracing::warn!(error = %e, "rejected product update");
        })?;
        Ok(self.upsert_product(product))
    }
}
