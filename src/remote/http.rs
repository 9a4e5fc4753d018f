use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use super::{DeletePolicy, ProductApi};
use crate::domain::{Draft, Product, ProductId};
use crate::error::NetworkError;

/// `ProductApi` over plain HTTP/JSON against one collection URL.
///
/// | op     | method | path          |
/// |--------|--------|---------------|
/// | list   | GET    | `{base}`      |
/// | create | POST   | `{base}`      |
/// | update | PUT    | `{base}/{id}` |
/// | delete | DELETE | `{base}/{id}` |
#[derive(Debug, Clone)]
pub struct HttpProductApi {
    client: reqwest::Client,
    base_url: String,
    delete_policy: DeletePolicy,
}

impl HttpProductApi {
    pub fn new(base_url: impl Into<String>, delete_policy: DeletePolicy) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            delete_policy,
        }
    }

    fn item_url(&self, id: &ProductId) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

async fn send(request: RequestBuilder) -> Result<Response, NetworkError> {
    request
        .send()
        .await
        .map_err(|e| NetworkError::Transport(e.to_string()))
}

fn ensure_success(response: Response) -> Result<Response, NetworkError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(NetworkError::Status { status: status.as_u16() })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, NetworkError> {
    response
        .json::<T>()
        .await
        .map_err(|e| NetworkError::Decode(e.to_string()))
}

#[async_trait]
impl ProductApi for HttpProductApi {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Product>, NetworkError> {
        debug!(url = %self.base_url, "GET collection");
        let response = ensure_success(send(self.client.get(&self.base_url)).await?)?;
        decode(response).await
    }

    #[instrument(skip(self, draft), fields(product_name = %draft.name))]
    async fn create(&self, draft: &Draft) -> Result<Product, NetworkError> {
        debug!(url = %self.base_url, "POST collection");
        let response = ensure_success(send(self.client.post(&self.base_url).json(draft)).await?)?;
        decode(response).await
    }

    #[instrument(skip(self, draft), fields(product_id = %id))]
    async fn update(&self, id: &ProductId, draft: &Draft) -> Result<Product, NetworkError> {
        debug!("PUT item");
        let response = ensure_success(send(self.client.put(self.item_url(id)).json(draft)).await?)?;
        decode(response).await
    }

    #[instrument(skip(self), fields(product_id = %id))]
    async fn delete(&self, id: &ProductId) -> Result<(), NetworkError> {
        debug!(policy = ?self.delete_policy, "DELETE item");
        let response = send(self.client.delete(self.item_url(id))).await?;
        match self.delete_policy {
            DeletePolicy::Strict => ensure_success(response).map(|_| ()),
            DeletePolicy::Lenient => {
                debug!(status = response.status().as_u16(), "Status ignored");
                Ok(())
            }
        }
    }
}
