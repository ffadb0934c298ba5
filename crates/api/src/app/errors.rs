use async_graphql::ErrorExtensions;

use shopcart_core::DomainError;

/// Map a domain error to a GraphQL error carrying `extensions.code`.
pub fn domain_error(err: DomainError) -> async_graphql::Error {
    let code = err.code();
    async_graphql::Error::new(err.to_string()).extend_with(|_, e| e.set("code", code))
}
