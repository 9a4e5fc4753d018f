use thiserror::Error;

use crate::domain::ProductId;

/// Failure of a single request against the product endpoint.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum NetworkError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Network response was not ok: HTTP {status}")]
    Status { status: u16 },
    #[error("Invalid response body: {0}")]
    Decode(String),
}

/// Errors reported back to whoever dispatched an intent.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ManagerError {
    #[error(transparent)]
    Network(#[from] NetworkError),
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),
    #[error("Invalid {field}: {value:?}")]
    InvalidField { field: &'static str, value: String },
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
