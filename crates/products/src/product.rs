use serde::{Deserialize, Serialize};

use shopcart_core::{DomainError, DomainResult, Entity, Money, ProductId};

/// Entity: Product.
///
/// Fields are private so a `Product` is always valid once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    id: ProductId,
    title: String,
    stock: u32,
    price: Money,
}

impl Product {
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        stock: u32,
        price: Money,
    ) -> DomainResult<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DomainError::validation("title cannot be empty"));
        }
        Ok(Self {
            id,
            title,
            stock,
            price,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn price(&self) -> Money {
        self.price
    }

    /// Price of `qty` units at the current price.
    pub fn subtotal(&self, qty: u32) -> DomainResult<Money> {
        self.price.checked_mul(qty).ok_or_else(|| {
            DomainError::invariant(format!("subtotal overflow for product {} x {qty}", self.id))
        })
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Command: UpdateProduct (full-record upsert input).
///
/// Carries the raw client shape; [`UpdateProduct::validate`] turns it into a
/// [`Product`] or a typed error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateProduct {
    pub id: String,
    pub title: String,
    pub stock: i64,
    pub price: f64,
}

impl UpdateProduct {
    pub fn validate(self) -> DomainResult<Product> {
        let id: ProductId = self.id.parse()?;

        if self.stock < 0 {
            return Err(DomainError::validation("stock cannot be negative"));
        }
        let stock = u32::try_from(self.stock)
            .map_err(|_| DomainError::validation("stock is too large"))?;

        let price = Money::from_decimal(self.price)?;

        Product::new(id, self.title, stock, price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd() -> UpdateProduct {
        UpdateProduct {
            id: "p-1".to_string(),
            title: "Wrench".to_string(),
            stock: 2001,
            price: 5.43,
        }
    }

    #[test]
    fn validate_builds_product() {
        let product = cmd().validate().unwrap();
        assert_eq!(product.id().as_str(), "p-1");
        assert_eq!(product.title(), "Wrench");
        assert_eq!(product.stock(), 2001);
        assert_eq!(product.price().cents(), 543);
    }

    #[test]
    fn validate_rejects_blank_title() {
        let err = UpdateProduct {
            title: "  ".to_string(),
            ..cmd()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, DomainError::validation("title cannot be empty"));
    }

    #[test]
    fn validate_rejects_negative_stock() {
        let err = UpdateProduct { stock: -1, ..cmd() }.validate().unwrap_err();
        assert_eq!(err, DomainError::validation("stock cannot be negative"));
    }

    #[test]
    fn validate_rejects_negative_price() {
        let err = UpdateProduct { price: -0.5, ..cmd() }.validate().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn validate_rejects_blank_id() {
        let err = UpdateProduct {
            id: String::new(),
            ..cmd()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }

    #[test]
    fn validate_rejects_sub_cent_price() {
        let err = UpdateProduct { price: 2.999, ..cmd() }.validate().unwrap_err();
        assert_eq!(err, DomainError::validation("price must have at most two decimal places"));
    }

    #[test]
    fn zero_stock_and_price_are_allowed() {
        let product = UpdateProduct {
            stock: 0,
            price: 0.0,
            ..cmd()
        }
        .validate()
        .unwrap();
        assert_eq!(product.stock(), 0);
        assert_eq!(product.price(), Money::ZERO);
    }

    #[test]
    fn subtotal_uses_price() {
        let product = cmd().validate().unwrap();
        assert_eq!(product.subtotal(3).unwrap().cents(), 1629);
    }

    #[test]
    fn subtotal_reports_overflow() {
        let product = Product::new(
            "p".parse().unwrap(),
            "Huge",
            1,
            Money::from_cents(u64::MAX),
        )
        .unwrap();
        assert!(matches!(product.subtotal(2), Err(DomainError::InvariantViolation(_))));
    }
}
