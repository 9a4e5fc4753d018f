use tokio::sync::oneshot;

use super::state::ProductState;
use crate::domain::{Product, ProductId};
use crate::error::{ManagerError, NetworkError};

pub type ManagerResult<T> = std::result::Result<T, ManagerError>;
pub type ManagerResponse<T> = oneshot::Sender<ManagerResult<T>>;

/// Messages accepted by [`ProductManagerActor`](super::ProductManagerActor).
///
/// Every user intent carries a oneshot responder. For intents that go over
/// the network the responder travels with the request and is answered when
/// the completion has been applied.
#[derive(Debug)]
pub enum ManagerRequest {
    Snapshot {
        respond_to: ManagerResponse<ProductState>,
    },
    SetName {
        name: String,
        respond_to: ManagerResponse<()>,
    },
    SetPrice {
        price: String,
        respond_to: ManagerResponse<()>,
    },
    SetStock {
        stock: String,
        respond_to: ManagerResponse<()>,
    },
    Edit {
        id: ProductId,
        respond_to: ManagerResponse<()>,
    },
    Cancel {
        respond_to: ManagerResponse<()>,
    },
    Submit {
        respond_to: ManagerResponse<()>,
    },
    Delete {
        id: ProductId,
        respond_to: ManagerResponse<()>,
    },
    Refresh {
        respond_to: ManagerResponse<()>,
    },
    /// Posted by the actor's own background requests.
    Completed(Completion),
    Shutdown,
}

/// Outcome of a background request, applied on the actor task.
#[derive(Debug)]
pub enum Completion {
    Listed {
        result: Result<Vec<Product>, NetworkError>,
        respond_to: ManagerResponse<()>,
    },
    Created {
        result: Result<Product, NetworkError>,
        respond_to: ManagerResponse<()>,
    },
    Updated {
        result: Result<Product, NetworkError>,
        respond_to: ManagerResponse<()>,
    },
    Deleted {
        id: ProductId,
        result: Result<(), NetworkError>,
        respond_to: ManagerResponse<()>,
    },
}
