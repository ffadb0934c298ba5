//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the in-memory catalog and cart store, plus seed data
//! - `routes/`: HTTP routes + handlers (GraphQL endpoint, health)
//! - `dto.rs`: GraphQL object/input types and mapping from domain types
//! - `errors.rs`: domain error -> GraphQL error mapping

use std::sync::Arc;

use axum::{routing::get, Router};
use shopcart_core::DomainResult;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &ApiConfig) -> DomainResult<Router> {
    let services = if config.seed {
        services::build_seeded_services()?
    } else {
        services::AppServices::empty()
    };
    Ok(build_router(Arc::new(services), config.playground))
}

/// Build the router around an existing service instance.
pub fn build_router(services: Arc<services::AppServices>, playground: bool) -> Router {
    let schema = routes::graphql::create_schema(services);

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::graphql::router(schema, playground))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
