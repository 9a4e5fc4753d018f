use std::future::Future;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn, Instrument};

use super::messages::{Completion, ManagerRequest, ManagerResponse};
use super::state::ProductState;
use crate::clients::ProductManagerClient;
use crate::domain::ProductId;
use crate::error::ManagerError;
use crate::remote::ProductApi;

/// Owns the product state and applies every change to it, one message at a
/// time.
///
/// Network requests never block the mailbox: each one runs in a spawned task
/// and posts a [`Completion`] back here. Several requests may be in flight;
/// completions are applied in arrival order, so the last one to land wins.
pub struct ProductManagerActor {
    receiver: mpsc::Receiver<ManagerRequest>,
    // Weak so that dropping every client still closes the mailbox.
    mailbox: mpsc::WeakSender<ManagerRequest>,
    api: Arc<dyn ProductApi>,
    state: ProductState,
}

impl ProductManagerActor {
    pub fn new(buffer_size: usize, api: Arc<dyn ProductApi>) -> (Self, ProductManagerClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            mailbox: sender.downgrade(),
            api,
            state: ProductState::new(),
        };
        (actor, ProductManagerClient::new(sender))
    }

    #[instrument(name = "product_manager", skip(self))]
    pub async fn run(mut self) {
        info!("ProductManager starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ManagerRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
                ManagerRequest::SetName { name, respond_to } => {
                    self.state.set_name(name);
                    let _ = respond_to.send(Ok(()));
                }
                ManagerRequest::SetPrice { price, respond_to } => {
                    let _ = respond_to.send(self.state.set_price(&price));
                }
                ManagerRequest::SetStock { stock, respond_to } => {
                    let _ = respond_to.send(self.state.set_stock(&stock));
                }
                ManagerRequest::Edit { id, respond_to } => self.handle_edit(id, respond_to),
                ManagerRequest::Cancel { respond_to } => {
                    debug!("Edit cancelled");
                    self.state.cancel_edit();
                    let _ = respond_to.send(Ok(()));
                }
                ManagerRequest::Submit { respond_to } => self.handle_submit(respond_to),
                ManagerRequest::Delete { id, respond_to } => self.handle_delete(id, respond_to),
                ManagerRequest::Refresh { respond_to } => self.handle_refresh(respond_to),
                ManagerRequest::Completed(completion) => self.handle_completion(completion),
                ManagerRequest::Shutdown => {
                    info!("ProductManager shutting down");
                    break;
                }
            }
        }
        info!("ProductManager stopped");
    }

    #[instrument(fields(product_id = %id), skip(self, respond_to))]
    fn handle_edit(&mut self, id: ProductId, respond_to: ManagerResponse<()>) {
        let result = match self.state.find(&self.state.resolve(&id)).cloned() {
            Some(product) => {
                self.state.begin_edit(&product);
                info!(product_name = %product.name, "Editing product");
                Ok(())
            }
            None => {
                warn!("Product not in list");
                Err(ManagerError::ProductNotFound(id))
            }
        };
        let _ = respond_to.send(result);
    }

    #[instrument(skip(self, respond_to))]
    fn handle_submit(&self, respond_to: ManagerResponse<()>) {
        let api = Arc::clone(&self.api);
        let draft = self.state.draft().clone();
        match self.state.editing().cloned() {
            None => {
                debug!(product_name = %draft.name, "Submitting new product");
                self.spawn_request(async move {
                    let result = api.create(&draft).await;
                    Completion::Created { result, respond_to }
                });
            }
            Some(id) => {
                debug!(product_id = %id, "Submitting product update");
                self.spawn_request(async move {
                    let result = api.update(&id, &draft).await;
                    Completion::Updated { result, respond_to }
                });
            }
        }
    }

    #[instrument(fields(product_id = %id), skip(self, respond_to))]
    fn handle_delete(&self, id: ProductId, respond_to: ManagerResponse<()>) {
        let id = self.state.resolve(&id);
        debug!(resolved_id = ?id, "Deleting product");
        let api = Arc::clone(&self.api);
        self.spawn_request(async move {
            let result = api.delete(&id).await;
            Completion::Deleted { id, result, respond_to }
        });
    }

    #[instrument(skip(self, respond_to))]
    fn handle_refresh(&self, respond_to: ManagerResponse<()>) {
        debug!("Fetching product list");
        let api = Arc::clone(&self.api);
        self.spawn_request(async move {
            let result = api.list().await;
            Completion::Listed { result, respond_to }
        });
    }

    /// Runs `request` off the actor task and mails its completion back.
    fn spawn_request<F>(&self, request: F)
    where
        F: Future<Output = Completion> + Send + 'static,
    {
        let mailbox = self.mailbox.clone();
        tokio::spawn(
            async move {
                let completion = request.await;
                let Some(sender) = mailbox.upgrade() else {
                    warn!("Mailbox closed before request completed");
                    return;
                };
                if sender.send(ManagerRequest::Completed(completion)).await.is_err() {
                    warn!("ProductManager stopped before request completed");
                }
            }
            .in_current_span(),
        );
    }

    fn handle_completion(&mut self, completion: Completion) {
        match completion {
            Completion::Listed { result, respond_to } => {
                let result = match result {
                    Ok(products) => {
                        info!(product_count = products.len(), "Product list loaded");
                        self.state.replace_all(products);
                        Ok(())
                    }
                    Err(e) => {
                        error!(error = %e, "Error fetching data");
                        Err(e.into())
                    }
                };
                let _ = respond_to.send(result);
            }
            Completion::Created { result, respond_to } => {
                let result = match result {
                    Ok(product) => {
                        info!(product_id = %product.id, product_name = %product.name, "Product added");
                        self.state.apply_created(product);
                        Ok(())
                    }
                    Err(e) => {
                        error!(error = %e, "Error adding product");
                        Err(e.into())
                    }
                };
                let _ = respond_to.send(result);
            }
            Completion::Updated { result, respond_to } => {
                let result = match result {
                    Ok(product) => {
                        let product_id = product.id.clone();
                        if self.state.apply_updated(product) {
                            info!(product_id = %product_id, "Product updated");
                        } else {
                            warn!(product_id = %product_id, "Updated product is not in the list");
                        }
                        Ok(())
                    }
                    Err(e) => {
                        error!(error = %e, "Error updating product");
                        Err(e.into())
                    }
                };
                let _ = respond_to.send(result);
            }
            Completion::Deleted { id, result, respond_to } => {
                let result = match result {
                    Ok(()) => {
                        let removed = self.state.apply_removed(&id);
                        info!(product_id = %id, removed, "Product deleted");
                        Ok(())
                    }
                    Err(e) => {
                        error!(product_id = %id, error = %e, "Error deleting product");
                        Err(e.into())
                    }
                };
                let _ = respond_to.send(result);
            }
        }
    }
}
