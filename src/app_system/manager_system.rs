use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::clients::ProductManagerClient;
use crate::config::Config;
use crate::manager_actor::ProductManagerActor;
use crate::remote::{HttpProductApi, ProductApi};

/// The running product manager: the actor task plus a handle to it.
///
/// Responsible for starting the actor, kicking off the initial list load,
/// and handling shutdown.
pub struct ProductManagerSystem {
    pub client: ProductManagerClient,
    handle: JoinHandle<()>,
    mount: JoinHandle<()>,
}

impl ProductManagerSystem {
    /// Starts against the HTTP endpoint named in `config`.
    pub fn start(config: &Config) -> Self {
        let api = HttpProductApi::new(config.base_url.as_str(), config.delete_policy);
        Self::with_api(Arc::new(api), config.mailbox_size)
    }

    /// Starts on any `ProductApi`. The mount fetch runs in the background:
    /// the list is empty until it lands, and a failed fetch is only logged.
    pub fn with_api(api: Arc<dyn ProductApi>, mailbox_size: usize) -> Self {
        let (actor, client) = ProductManagerActor::new(mailbox_size.max(1), api);
        let handle = tokio::spawn(actor.run());

        let mount_client = client.clone();
        let mount = tokio::spawn(async move {
            match mount_client.refresh().await {
                Ok(()) => info!("Initial product load complete"),
                Err(e) => error!(error = %e, "Initial product load failed"),
            }
        });

        Self { client, handle, mount }
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        // A mount still in flight would only report the actor going away.
        self.mount.abort();

        if let Err(e) = self.client.shutdown().await {
            // Already stopped; the join below reports why.
            error!(error = %e, "Shutdown request not delivered");
        }
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
