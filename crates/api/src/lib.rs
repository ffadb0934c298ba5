//! HTTP API: GraphQL schema, server wiring, configuration.

pub mod app;
pub mod config;
