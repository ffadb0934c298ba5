//! GraphQL endpoint.
//!
//! - `POST /graphql` executes queries and mutations
//! - `GET /graphql` serves GraphiQL (when enabled)

use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Object, Result as GqlResult, Schema, ID};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::Extension,
    response::{Html, IntoResponse},
    routing::{get, post},
    Router,
};

use shopcart_cart::AddProductToCart;
use shopcart_core::{CartId, ProductId};
use shopcart_products::UpdateProduct;

use crate::app::dto::{AddProductToCartInput, GqlCart, GqlProduct, UpdateProductInput};
use crate::app::errors::domain_error;
use crate::app::services::AppServices;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All products in catalog order.
    async fn products(&self, ctx: &Context<'_>) -> GqlResult<Vec<GqlProduct>> {
        let services = ctx.data::<Arc<AppServices>>()?;
        Ok(services.catalog.list_products().into_iter().map(GqlProduct::from).collect())
    }

    /// All carts with totals computed from current prices.
    async fn carts(&self, ctx: &Context<'_>) -> GqlResult<Vec<GqlCart>> {
        let services = ctx.data::<Arc<AppServices>>()?;
        Ok(services.carts.list_carts().into_iter().map(GqlCart::from).collect())
    }

    /// Look up one product; `null` when no product has this id.
    async fn product(&self, ctx: &Context<'_>, id: ID) -> GqlResult<Option<GqlProduct>> {
        let services = ctx.data::<Arc<AppServices>>()?;
        let Ok(id) = id.parse::<ProductId>() else {
            return Ok(None);
        };
        Ok(services.catalog.find_product(&id).map(GqlProduct::from))
    }

    /// Look up one cart; `null` when no cart has this id.
    async fn cart(&self, ctx: &Context<'_>, id: ID) -> GqlResult<Option<GqlCart>> {
        let services = ctx.data::<Arc<AppServices>>()?;
        let Ok(id) = id.parse::<CartId>() else {
            return Ok(None);
        };
        Ok(services.carts.find_cart(&id).map(GqlCart::from))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Replace the product with `input.id`, or add it when it does not exist.
    async fn update_product(
        &self,
        ctx: &Context<'_>,
        input: UpdateProductInput,
    ) -> GqlResult<GqlProduct> {
        let services = ctx.data::<Arc<AppServices>>()?;
        let product = services
            .catalog
            .update_product(UpdateProduct::from(input))
            .map_err(domain_error)?;
        Ok(product.into())
    }

    /// Add `qty` of a product to a cart and return every cart afterwards.
    async fn add_product_to_cart(
        &self,
        ctx: &Context<'_>,
        input: AddProductToCartInput,
    ) -> GqlResult<Vec<GqlCart>> {
        let services = ctx.data::<Arc<AppServices>>()?;
        let carts = services
            .carts
            .add_product_to_cart(AddProductToCart::from(input))
            .map_err(domain_error)?;
        Ok(carts.into_iter().map(GqlCart::from).collect())
    }
}

pub type ShopSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Create the GraphQL schema.
pub fn create_schema(services: Arc<AppServices>) -> ShopSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(services)
        .finish()
}

/// Handler for GraphQL requests.
pub async fn graphql_handler(
    Extension(schema): Extension<ShopSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// Handler for GraphiQL playground.
pub async fn graphiql_handler() -> impl IntoResponse {
    Html(async_graphql::http::GraphiQLSource::build().endpoint("/graphql").finish())
}

pub fn router(schema: ShopSchema, playground: bool) -> Router {
    let route = if playground {
        get(graphiql_handler).post(graphql_handler)
    } else {
        post(graphql_handler)
    };

    Router::new().route("/graphql", route).layer(Extension(schema))
}
