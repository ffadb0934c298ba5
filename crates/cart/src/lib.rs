//! Cart domain module.
//!
//! Carts hold lines that reference catalog products by id. Totals are never
//! stored: they are derived from current catalog prices every time a cart is
//! read.

pub mod cart;
pub mod store;
pub mod view;

pub use cart::{AddProductToCart, Cart, CartLine, ValidatedAddProduct};
pub use store::CartStore;
pub use view::{CartLineView, CartView};
