use std::sync::Arc;

use shopcart_cart::{Cart, CartStore};
use shopcart_core::{DomainResult, Money, ProductId};
use shopcart_products::{Product, ProductCatalog};

/// Fixed id of the seeded "BR120" product.
pub const SEED_PRODUCT_ID: &str = "8bceb990-9335-403b-9056-496f275cb8f4";
/// Fixed id of the seeded demo cart.
pub const SEED_CART_ID: &str = "5a797e70-cdba-4738-b7a5-ca6a63a2ddc0";

/// Service state owned by one running API instance.
///
/// Built once at startup and shared with resolvers through the schema data.
#[derive(Debug)]
pub struct AppServices {
    pub catalog: Arc<ProductCatalog>,
    pub carts: CartStore,
}

impl AppServices {
    pub fn new(catalog: Arc<ProductCatalog>, carts: CartStore) -> Self {
        Self { catalog, carts }
    }

    pub fn empty() -> Self {
        let catalog = Arc::new(ProductCatalog::new());
        let carts = CartStore::new(catalog.clone());
        Self::new(catalog, carts)
    }
}

/// Demo catalog: four products and one cart holding 5 x BR120.
pub fn build_seeded_services() -> DomainResult<AppServices> {
    let br120: ProductId = SEED_PRODUCT_ID.parse()?;

    let catalog = Arc::new(ProductCatalog::with_products([
        Product::new(br120.clone(), "BR120", 48923, Money::from_cents(517))?,
        Product::new(ProductId::new(), "Battery", 4100, Money::from_cents(1050))?,
        Product::new(ProductId::new(), "Oil Funnel", 1410, Money::from_cents(218))?,
        Product::new(ProductId::new(), "Wrench", 2001, Money::from_cents(543))?,
    ]));

    let mut cart = Cart::new(SEED_CART_ID.parse()?);
    cart.add_product(br120, 5)?;

    let carts = CartStore::with_carts(catalog.clone(), [cart])?;

    tracing::info!(
        products = catalog.len(),
        carts = 1,
        "seeded in-memory catalog"
    );

    Ok(AppServices::new(catalog, carts))
}
