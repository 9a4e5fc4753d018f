//! # Mock Framework
//!
//! Utilities for testing the product manager without a server.
//!
//! Use [`create_mock_api`] to get a `ProductApi` and a receiver of the calls
//! made on it. Then use helpers like [`expect_create`] or [`expect_delete`]
//! to assert each call and answer it with whatever the test needs.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use crate::domain::{Draft, Product, ProductId};
use crate::error::NetworkError;
use crate::remote::ProductApi;

pub type Responder<T> = oneshot::Sender<Result<T, NetworkError>>;

/// One call made on [`MockProductApi`], with the channel to answer it.
#[derive(Debug)]
pub enum ApiCall {
    List {
        respond_to: Responder<Vec<Product>>,
    },
    Create {
        draft: Draft,
        respond_to: Responder<Product>,
    },
    Update {
        id: ProductId,
        draft: Draft,
        respond_to: Responder<Product>,
    },
    Delete {
        id: ProductId,
        respond_to: Responder<()>,
    },
}

pub struct MockProductApi {
    sender: mpsc::Sender<ApiCall>,
}

impl MockProductApi {
    async fn call<T>(&self, make: impl FnOnce(Responder<T>) -> ApiCall) -> Result<T, NetworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| NetworkError::Transport("mock closed".to_string()))?;
        response
            .await
            .map_err(|_| NetworkError::Transport("mock dropped the request".to_string()))?
    }
}

#[async_trait]
impl ProductApi for MockProductApi {
    async fn list(&self) -> Result<Vec<Product>, NetworkError> {
        self.call(|respond_to| ApiCall::List { respond_to }).await
    }

    async fn create(&self, draft: &Draft) -> Result<Product, NetworkError> {
        let draft = draft.clone();
        self.call(|respond_to| ApiCall::Create { draft, respond_to }).await
    }

    async fn update(&self, id: &ProductId, draft: &Draft) -> Result<Product, NetworkError> {
        let (id, draft) = (id.clone(), draft.clone());
        self.call(|respond_to| ApiCall::Update { id, draft, respond_to }).await
    }

    async fn delete(&self, id: &ProductId) -> Result<(), NetworkError> {
        let id = id.clone();
        self.call(|respond_to| ApiCall::Delete { id, respond_to }).await
    }
}

/// Creates a mock API and a receiver for asserting the calls made on it.
///
/// The code under test awaits until the test answers through the call's
/// responder, so the test decides success, failure and completion order.
pub fn create_mock_api(buffer_size: usize) -> (Arc<MockProductApi>, mpsc::Receiver<ApiCall>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (Arc::new(MockProductApi { sender }), receiver)
}

/// Helper to verify that the next call is a list
pub async fn expect_list(receiver: &mut mpsc::Receiver<ApiCall>) -> Option<Responder<Vec<Product>>> {
    match receiver.recv().await {
        Some(ApiCall::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next call is a create
pub async fn expect_create(receiver: &mut mpsc::Receiver<ApiCall>) -> Option<(Draft, Responder<Product>)> {
    match receiver.recv().await {
        Some(ApiCall::Create { draft, respond_to }) => Some((draft, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next call is an update
pub async fn expect_update(
    receiver: &mut mpsc::Receiver<ApiCall>,
) -> Option<(ProductId, Draft, Responder<Product>)> {
    match receiver.recv().await {
        Some(ApiCall::Update { id, draft, respond_to }) => Some((id, draft, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next call is a delete
pub async fn expect_delete(receiver: &mut mpsc::Receiver<ApiCall>) -> Option<(ProductId, Responder<()>)> {
    match receiver.recv().await {
        Some(ApiCall::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_api() {
        let (api, mut receiver) = create_mock_api(10);

        let create_task = tokio::spawn(async move { api.create(&Draft::new("Pen", 500.0, 10)).await });

        let (draft, responder) = expect_create(&mut receiver).await.expect("Expected Create call");
        assert_eq!(draft.name, "Pen");
        responder.send(Ok(Product::new(1, "Pen", 500.0, 10))).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok(Product::new(1, "Pen", 500.0, 10)));
    }
}
