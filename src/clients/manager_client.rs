use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::domain::ProductId;
use crate::error::ManagerError;
use crate::manager_actor::{ManagerRequest, ManagerResult, ProductState};
use crate::view::{render, View};

/// Handle to the product manager actor. Cheap to clone; every method is one
/// round trip through the mailbox.
///
/// Network intents (`submit`, `delete`, `refresh`) resolve once the server
/// has answered and the outcome has been applied to the state.
#[derive(Clone)]
pub struct ProductManagerClient {
    sender: mpsc::Sender<ManagerRequest>,
}

impl ProductManagerClient {
    pub fn new(sender: mpsc::Sender<ManagerRequest>) -> Self {
        Self { sender }
    }

    /// Renders the current state.
    pub async fn view(&self) -> ManagerResult<View> {
        let state = self.snapshot().await?;
        Ok(render(&state))
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> ManagerResult<()> {
        debug!("Sending shutdown request");
        self.sender
            .send(ManagerRequest::Shutdown)
            .await
            .map_err(|_| ManagerError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(ProductManagerClient => fn snapshot() -> ProductState as ManagerRequest::Snapshot);
client_method!(ProductManagerClient => fn set_name(name: String) -> () as ManagerRequest::SetName);
client_method!(ProductManagerClient => fn set_price(price: String) -> () as ManagerRequest::SetPrice);
client_method!(ProductManagerClient => fn set_stock(stock: String) -> () as ManagerRequest::SetStock);
client_method!(ProductManagerClient => fn edit(id: ProductId) -> () as ManagerRequest::Edit);
client_method!(ProductManagerClient => fn cancel() -> () as ManagerRequest::Cancel);
client_method!(ProductManagerClient => fn submit() -> () as ManagerRequest::Submit);
client_method!(ProductManagerClient => fn delete(id: ProductId) -> () as ManagerRequest::Delete);
client_method!(ProductManagerClient => fn refresh() -> () as ManagerRequest::Refresh);
