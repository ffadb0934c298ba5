//! Products domain module (product catalog).
//!
//! This crate owns product records and the in-memory catalog they live in.
//! It has no knowledge of carts or of the transport layer.

pub mod catalog;
pub mod product;

pub use catalog::{CatalogReadGuard, ProductCatalog};
pub use product::{Product, UpdateProduct};
