//! Derived cart views (line count + totals), computed at read time.

use serde::Serialize;

use shopcart_core::{CartId, CartLineId, Entity, Money};
use shopcart_products::{CatalogReadGuard, Product};

use crate::cart::Cart;

/// A cart line joined with the product it references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLineView {
    pub id: CartLineId,
    pub product: Product,
    pub qty: u32,
    /// `product.price * qty` at the current price.
    pub total: Money,
}

/// A cart with its derived `line_count` and `total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub id: CartId,
    pub lines: Vec<CartLineView>,
    pub line_count: usize,
    pub total: Money,
}

impl CartView {
    /// Join `cart` against the catalog and derive its totals.
    ///
    /// Lines whose product no longer resolves are left out of the view.
    pub fn build(cart: &Cart, catalog: &CatalogReadGuard<'_>) -> Self {
        let mut lines = Vec::with_capacity(cart.lines().len());
        let mut total = Money::ZERO;

        for line in cart.lines() {
            let Some(product) = catalog.find(line.product_id()) else {
                tracing::warn!(
                    cart_id = %cart.id(),
                    line_id = %line.id(),
                    product_id = %line.product_id(),
                    "cart line references a missing product"
                );
                continue;
            };

            let line_total = product.subtotal(line.qty()).unwrap_or_else(|e| {
                tracing::warn!(cart_id = %cart.id(), error = %e, "saturating line total");
                Money::from_cents(u64::MAX)
            });
            total = total.saturating_add(line_total);

            lines.push(CartLineView {
                id: line.id().clone(),
                product: product.clone(),
                qty: line.qty(),
                total: line_total,
            });
        }

        Self {
            id: cart.id().clone(),
            line_count: lines.len(),
            lines,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopcart_products::ProductCatalog;

    #[test]
    fn line_with_missing_product_is_left_out() {
        let catalog = ProductCatalog::new();
        let mut cart = Cart::new("c-1".parse().unwrap());
        cart.add_product("p-x".parse().unwrap(), 4).unwrap();

        let view = CartView::build(&cart, &catalog.read());

        assert!(view.lines.is_empty());
        assert_eq!(view.line_count, 0);
        assert_eq!(view.total, Money::ZERO);
        assert_eq!(view.id.as_str(), "c-1");
    }

    #[test]
    fn overflowing_line_total_saturates() {
        let huge = Product::new("p-1".parse().unwrap(), "Huge", 1, Money::from_cents(u64::MAX))
            .unwrap();
        let cheap = Product::new("p-2".parse().unwrap(), "Cheap", 1, Money::from_cents(5)).unwrap();
        let catalog = ProductCatalog::with_products([huge, cheap]);

        let mut cart = Cart::new("c-1".parse().unwrap());
        cart.add_product("p-1".parse().unwrap(), 2).unwrap();
        cart.add_product("p-2".parse().unwrap(), 1).unwrap();

        let view = CartView::build(&cart, &catalog.read());

        assert_eq!(view.line_count, 2);
        assert_eq!(view.lines[0].total.cents(), u64::MAX);
        assert_eq!(view.lines[1].total.cents(), 5);
        assert_eq!(view.total.cents(), u64::MAX);
    }
}
