use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::config_store::{ConfigError, ConfigSnapshot};
use crate::domain::{ShippingConfig, ShippingSettings};
use crate::messages::ConfigStoreRequest;

/// Client for the configuration store actor.
///
/// Reads hand back a shared snapshot; the write methods are what the
/// administrative side calls after it changes the matrix.
#[derive(Clone)]
pub struct ConfigStoreClient {
    sender: mpsc::Sender<ConfigStoreRequest>,
}

impl ConfigStoreClient {
    pub fn new(sender: mpsc::Sender<ConfigStoreRequest>) -> Self {
        Self { sender }
    }

    /// Replaces the whole matrix. Skips the config in the span; it can be large.
    #[instrument(skip(self, config), fields(zones = config.zones.len(), rates = config.rates.len()))]
    pub async fn publish(&self, config: ShippingConfig) -> Result<u64, ConfigError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ConfigStoreRequest::Publish { config, respond_to })
            .await
            .map_err(|_| ConfigError::ActorCommunicationError("Actor closed".to_string()))?;

        response
            .await
            .map_err(|_| ConfigError::ActorCommunicationError("Actor dropped".to_string()))?
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), ConfigError> {
        debug!("Sending shutdown request");
        self.sender
            .send(ConfigStoreRequest::Shutdown)
            .await
            .map_err(|e| ConfigError::ActorCommunicationError(e.to_string()))
    }
}

client_method!(ConfigStoreClient => fn snapshot() -> Arc<ConfigSnapshot> as ConfigStoreRequest::Snapshot, Error = ConfigError);
client_method!(ConfigStoreClient => fn update_settings(settings: ShippingSettings) -> u64 as ConfigStoreRequest::UpdateSettings, Error = ConfigError);
client_method!(ConfigStoreClient => fn reload() -> u64 as ConfigStoreRequest::Reload, Error = ConfigError);
