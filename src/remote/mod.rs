//! Remote side of the product manager: the four collection operations the
//! state store is synchronised through.

mod http;

pub use http::HttpProductApi;

use async_trait::async_trait;

use crate::domain::{Draft, Product, ProductId};
use crate::error::NetworkError;

/// Collection endpoint for products.
///
/// Every call is a single request; no retries, no timeouts, no caching.
#[async_trait]
pub trait ProductApi: Send + Sync + 'static {
    /// Fetches the whole collection.
    async fn list(&self) -> Result<Vec<Product>, NetworkError>;

    /// Creates a product from the draft and returns it with its new id.
    async fn create(&self, draft: &Draft) -> Result<Product, NetworkError>;

    /// Replaces the product with `id` by the draft's fields.
    async fn update(&self, id: &ProductId, draft: &Draft) -> Result<Product, NetworkError>;

    /// Deletes the product with `id`. The response body is never read.
    async fn delete(&self, id: &ProductId) -> Result<(), NetworkError>;
}

/// How a DELETE response is judged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum DeletePolicy {
    /// A non-2xx status is a `NetworkError`, like every other operation.
    #[default]
    Strict,
    /// Any response that arrives counts as success; only transport failures fail.
    Lenient,
}
