//! GraphQL object and input types.
//!
//! Output shapes:
//! `Product{id, title, stock, price}`, `Cart{id, lines, lineCount, total}`,
//! `CartLine{id, product, qty, total}`.

use async_graphql::{InputObject, SimpleObject, ID};

use shopcart_cart::{AddProductToCart, CartLineView, CartView};
use shopcart_core::Entity;
use shopcart_products::{Product, UpdateProduct};

// -------------------------
// Output types
// -------------------------

#[derive(Debug, Clone, PartialEq, SimpleObject)]
#[graphql(name = "Product")]
pub struct GqlProduct {
    pub id: ID,
    pub title: String,
    pub stock: u32,
    pub price: f64,
}

impl From<&Product> for GqlProduct {
    fn from(p: &Product) -> Self {
        Self {
            id: ID(p.id().to_string()),
            title: p.title().to_string(),
            stock: p.stock(),
            price: p.price().to_decimal(),
        }
    }
}

impl From<Product> for GqlProduct {
    fn from(p: Product) -> Self {
        Self::from(&p)
    }
}

#[derive(Debug, Clone, PartialEq, SimpleObject)]
#[graphql(name = "CartLine")]
pub struct GqlCartLine {
    pub id: ID,
    pub product: GqlProduct,
    pub qty: u32,
    /// Line subtotal at the current product price.
    pub total: f64,
}

impl From<CartLineView> for GqlCartLine {
    fn from(line: CartLineView) -> Self {
        Self {
            id: ID(line.id.into_inner()),
            product: GqlProduct::from(&line.product),
            qty: line.qty,
            total: line.total.to_decimal(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, SimpleObject)]
#[graphql(name = "Cart")]
pub struct GqlCart {
    pub id: ID,
    pub lines: Vec<GqlCartLine>,
    pub line_count: u32,
    /// Sum of line totals at current product prices.
    pub total: f64,
}

impl From<CartView> for GqlCart {
    fn from(cart: CartView) -> Self {
        Self {
            id: ID(cart.id.into_inner()),
            line_count: u32::try_from(cart.line_count).unwrap_or(u32::MAX),
            total: cart.total.to_decimal(),
            lines: cart.lines.into_iter().map(GqlCartLine::from).collect(),
        }
    }
}

// -------------------------
// Input types
// -------------------------

/// Full product record; replaces the product with the same id or adds a new one.
#[derive(Debug, Clone, InputObject)]
pub struct UpdateProductInput {
    pub id: ID,
    pub title: String,
    pub stock: i32,
    pub price: f64,
}

impl From<UpdateProductInput> for UpdateProduct {
    fn from(input: UpdateProductInput) -> Self {
        Self {
            id: input.id.0,
            title: input.title,
            stock: i64::from(input.stock),
            price: input.price,
        }
    }
}

#[derive(Debug, Clone, InputObject)]
pub struct AddProductToCartInput {
    pub cart_id: ID,
    pub product_id: ID,
    pub qty: i32,
}

impl From<AddProductToCartInput> for AddProductToCart {
    fn from(input: AddProductToCartInput) -> Self {
        Self {
            cart_id: input.cart_id.0,
            product_id: input.product_id.0,
            qty: i64::from(input.qty),
        }
    }
}
