use tracing::{error, info};

use crate::clients::{ConfigStoreClient, ShippingClient};
use crate::config_store::{ConfigSource, ConfigStoreService};

use super::SystemError;

const CONFIG_STORE_BUFFER: usize = 32;

/// Starts the configuration store and wires the clients around it.
///
/// Must be created inside a Tokio runtime.
pub struct ShippingSystem {
    pub config_store: ConfigStoreClient,
    pub shipping_client: ShippingClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ShippingSystem {
    /// # Errors
    /// The first snapshot could not be loaded from `source`.
    pub fn new(source: impl ConfigSource) -> Result<Self, SystemError> {
        info!("Starting shipping system");

        let (store, config_store) = ConfigStoreService::new(CONFIG_STORE_BUFFER, source)?;
        let store_handle = tokio::spawn(store.run());

        let shipping_client = ShippingClient::new(config_store.clone());

        Ok(Self {
            config_store,
            shipping_client,
            handles: vec![store_handle],
        })
    }

    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        // Clones of the clients may outlive the system, so ask the store to
        // stop instead of relying on its channel closing.
        if let Err(e) = self.config_store.shutdown().await {
            error!(error = %e, "Config store already stopped");
        }

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SystemError::TaskFailed(format!("{:?}", e)));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
