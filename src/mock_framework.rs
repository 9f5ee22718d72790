//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_config_store`] to get a client and a receiver.
//! Then use helpers like [`expect_snapshot`] or [`expect_publish`] to assert behavior.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::clients::ConfigStoreClient;
use crate::config_store::{ConfigError, ConfigSnapshot};
use crate::domain::{ShippingConfig, ShippingSettings};
use crate::messages::{ConfigStoreRequest, ServiceResponse};

/// Creates a mock config store client and a receiver for asserting requests.
///
/// Tests that only exercise client logic (e.g. `ShippingClient`) answer the
/// requests themselves instead of running a `ConfigStoreService`, which makes
/// failures, stale snapshots and dropped replies easy to simulate.
pub fn create_mock_config_store(buffer_size: usize) -> (ConfigStoreClient, mpsc::Receiver<ConfigStoreRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ConfigStoreClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Snapshot request
pub async fn expect_snapshot(
    receiver: &mut mpsc::Receiver<ConfigStoreRequest>,
) -> Option<ServiceResponse<Arc<ConfigSnapshot>, ConfigError>> {
    match receiver.recv().await {
        Some(ConfigStoreRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Publish request
pub async fn expect_publish(
    receiver: &mut mpsc::Receiver<ConfigStoreRequest>,
) -> Option<(ShippingConfig, ServiceResponse<u64, ConfigError>)> {
    match receiver.recv().await {
        Some(ConfigStoreRequest::Publish { config, respond_to }) => Some((config, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an UpdateSettings request
pub async fn expect_update_settings(
    receiver: &mut mpsc::Receiver<ConfigStoreRequest>,
) -> Option<(ShippingSettings, ServiceResponse<u64, ConfigError>)> {
    match receiver.recv().await {
        Some(ConfigStoreRequest::UpdateSettings { settings, respond_to }) => Some((settings, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_config_store() {
        let (client, mut receiver) = create_mock_config_store(10);

        let publish_task = tokio::spawn(async move { client.publish(ShippingConfig::default()).await });

        let (config, responder) = expect_publish(&mut receiver).await.expect("Expected Publish request");
        assert!(config.zones.is_empty());
        responder.send(Ok(2)).unwrap();

        let result = publish_task.await.unwrap();
        assert_eq!(result, Ok(2));
    }

    #[tokio::test]
    async fn test_mock_settings_update() {
        let (client, mut receiver) = create_mock_config_store(10);

        let update_task =
            tokio::spawn(async move { client.update_settings(ShippingSettings::new(5000)).await });

        let (settings, responder) = expect_update_settings(&mut receiver)
            .await
            .expect("Expected UpdateSettings request");
        assert_eq!(settings.volumetric_divisor, 5000);
        responder.send(Err(ConfigError::InvalidSettings("rejected".to_string()))).unwrap();

        let result = update_task.await.unwrap();
        assert!(matches!(result, Err(ConfigError::InvalidSettings(_))));
    }
}
