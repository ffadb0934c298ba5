use serde::{Deserialize, Serialize};

use shopcart_core::{CartId, CartLineId, DomainError, DomainResult, Entity, ProductId};

/// Cart line: a product reference and a quantity.
///
/// Holds the product id only, so reads always see the catalog's current record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    id: CartLineId,
    product_id: ProductId,
    qty: u32,
}

impl CartLine {
    fn new(product_id: ProductId, qty: u32) -> Self {
        Self {
            id: CartLineId::new(),
            product_id,
            qty,
        }
    }

    pub fn id(&self) -> &CartLineId {
        &self.id
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn qty(&self) -> u32 {
        self.qty
    }
}

/// Entity: Cart.
///
/// Invariant: at most one line per product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cart {
    id: CartId,
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new(id: CartId) -> Self {
        Self {
            id,
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line_for(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.product_id == product_id)
    }

    /// Merge `qty` into the existing line for `product_id`, or append a new line.
    ///
    /// On error the cart is left untouched.
    pub fn add_product(&mut self, product_id: ProductId, qty: u32) -> DomainResult<&CartLine> {
        if qty == 0 {
            return Err(DomainError::validation("qty must be positive"));
        }

        match self.lines.iter().position(|l| l.product_id == product_id) {
            Some(idx) => {
                let line = &mut self.lines[idx];
                line.qty = line.qty.checked_add(qty).ok_or_else(|| {
                    DomainError::invariant(format!("qty overflow on line {}", line.id))
                })?;
                Ok(&self.lines[idx])
            }
            None => {
                let idx = self.lines.len();
                self.lines.push(CartLine::new(product_id, qty));
                Ok(&self.lines[idx])
            }
        }
    }
}

impl Entity for Cart {
    type Id = CartId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Command: AddProductToCart (raw client shape).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddProductToCart {
    pub cart_id: String,
    pub product_id: String,
    pub qty: i64,
}

/// [`AddProductToCart`] after field-level validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedAddProduct {
    pub cart_id: CartId,
    pub product_id: ProductId,
    pub qty: u32,
}

impl AddProductToCart {
    pub fn validate(self) -> DomainResult<ValidatedAddProduct> {
        let cart_id: CartId = self.cart_id.parse()?;
        let product_id: ProductId = self.product_id.parse()?;

        if self.qty <= 0 {
            return Err(DomainError::validation("qty must be positive"));
        }
        let qty = u32::try_from(self.qty).map_err(|_| DomainError::validation("qty is too large"))?;

        Ok(ValidatedAddProduct {
            cart_id,
            product_id,
            qty,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(s: &str) -> ProductId {
        s.parse().unwrap()
    }

    fn cart() -> Cart {
        Cart::new("c-1".parse().unwrap())
    }

    #[test]
    fn adding_new_product_appends_line() {
        let mut cart = cart();
        cart.add_product(pid("p-1"), 5).unwrap();
        cart.add_product(pid("p-2"), 1).unwrap();

        let products: Vec<_> = cart.lines().iter().map(|l| l.product_id().to_string()).collect();
        assert_eq!(products, vec!["p-1", "p-2"]);
    }

    #[test]
    fn adding_existing_product_merges_into_line() {
        let mut cart = cart();
        let line_id = cart.add_product(pid("p-1"), 5).unwrap().id().clone();
        let merged = cart.add_product(pid("p-1"), 3).unwrap();

        assert_eq!(merged.id(), &line_id);
        assert_eq!(merged.qty(), 8);
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn zero_qty_is_rejected() {
        let mut cart = cart();
        let err = cart.add_product(pid("p-1"), 0).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(cart.lines().is_empty());
    }

    #[test]
    fn qty_overflow_leaves_line_unchanged() {
        let mut cart = cart();
        cart.add_product(pid("p-1"), u32::MAX).unwrap();
        let err = cart.add_product(pid("p-1"), 1).unwrap_err();

        assert!(matches!(err, DomainError::InvariantViolation(_)));
        assert_eq!(cart.line_for(&pid("p-1")).unwrap().qty(), u32::MAX);
    }

    #[test]
    fn validate_rejects_non_positive_qty() {
        for qty in [0, -3] {
            let err = AddProductToCart {
                cart_id: "c-1".to_string(),
                product_id: "p-1".to_string(),
                qty,
            }
            .validate()
            .unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
        }
    }

    #[test]
    fn validate_rejects_blank_ids() {
        let err = AddProductToCart {
            cart_id: " ".to_string(),
            product_id: "p-1".to_string(),
            qty: 1,
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }

    #[test]
    fn validate_parses_ids() {
        let cmd = AddProductToCart {
            cart_id: "c-1".to_string(),
            product_id: "X".to_string(),
            qty: 2,
        }
        .validate()
        .unwrap();
        assert_eq!(cmd.cart_id.as_str(), "c-1");
        assert_eq!(cmd.product_id.as_str(), "X");
        assert_eq!(cmd.qty, 2);
    }
}
