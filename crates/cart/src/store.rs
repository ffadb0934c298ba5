//! In-memory cart store.

use std::sync::{Arc, PoisonError, RwLock};

use shopcart_core::{CartId, DomainError, DomainResult, Entity, ProductId};
use shopcart_products::ProductCatalog;

use crate::cart::{AddProductToCart, Cart, ValidatedAddProduct};
use crate::view::CartView;

/// Owns the carts and derives their totals from a shared [`ProductCatalog`].
///
/// Locking: the carts lock is always taken before the catalog lock.
#[derive(Debug)]
pub struct CartStore {
    catalog: Arc<ProductCatalog>,
    carts: RwLock<Vec<Cart>>,
}

impl CartStore {
    pub fn new(catalog: Arc<ProductCatalog>) -> Self {
        Self {
            catalog,
            carts: RwLock::new(Vec::new()),
        }
    }

    /// Build a store from seed carts.
    ///
    /// Every line must reference a product that exists in `catalog`, and cart
    /// ids must be unique.
    pub fn with_carts(
        catalog: Arc<ProductCatalog>,
        carts: impl IntoIterator<Item = Cart>,
    ) -> DomainResult<Self> {
        let carts: Vec<Cart> = carts.into_iter().collect();
        {
            let products = catalog.read();
            for (idx, cart) in carts.iter().enumerate() {
                if carts[..idx].iter().any(|c| c.id() == cart.id()) {
                    return Err(DomainError::invariant(format!("duplicate cart id {}", cart.id())));
                }
                for line in cart.lines() {
                    if products.find(line.product_id()).is_none() {
                        return Err(DomainError::not_found("product", line.product_id().as_str()));
                    }
                }
            }
        }

        Ok(Self {
            catalog,
            carts: RwLock::new(carts),
        })
    }

    pub fn catalog(&self) -> &Arc<ProductCatalog> {
        &self.catalog
    }

    /// Every cart with freshly derived totals.
    pub fn list_carts(&self) -> Vec<CartView> {
        let carts = self.carts.read().unwrap_or_else(PoisonError::into_inner);
        let products = self.catalog.read();
        tracing::debug!(count = carts.len(), "listing carts");
        carts.iter().map(|c| CartView::build(c, &products)).collect()
    }

    pub fn find_cart(&self, id: &CartId) -> Option<CartView> {
        let carts = self.carts.read().unwrap_or_else(PoisonError::into_inner);
        let products = self.catalog.read();
        carts.iter().find(|c| c.id() == id).map(|c| CartView::build(c, &products))
    }

    /// Validate a client request and apply it.
    pub fn add_product_to_cart(&self, cmd: AddProductToCart) -> DomainResult<Vec<CartView>> {
        let ValidatedAddProduct {
            cart_id,
            product_id,
            qty,
        } = cmd.validate()?;
        self.add_product(&cart_id, &product_id, qty)
    }

    /// Add `qty` of a product to a cart, merging into an existing line.
    ///
    /// Returns the whole cart collection after the change. Resolution failures
    /// abort before anything is mutated.
    pub fn add_product(
        &self,
        cart_id: &CartId,
        product_id: &ProductId,
        qty: u32,
    ) -> DomainResult<Vec<CartView>> {
        let mut carts = self.carts.write().unwrap_or_else(PoisonError::into_inner);
        let products = self.catalog.read();

        let result = carts
            .iter_mut()
            .find(|c| c.id() == cart_id)
            .ok_or_else(|| DomainError::not_found("cart", cart_id.as_str()))
            .and_then(|cart| {
                let product = products
                    .find(product_id)
                    .ok_or_else(|| DomainError::not_found("product", product_id.as_str()))?;
                let line = cart.add_product(product.id().clone(), qty)?;
                tracing::info!(
                    cart_id = %cart_id,
                    product_id = %product_id,
                    line_id = %line.id(),
                    added = qty,
                    qty = line.qty(),
                    "added product to cart"
                );
                Ok(())
            });

        if let Err(e) = result {
            tracing::warn!(
                cart_id = %cart_id,
                product_id = %product_id,
                error = %e,
                "add to cart rejected"
            );
            return Err(e);
        }

        Ok(carts.iter().map(|c| CartView::build(c, &products)).collect())
    }
}
