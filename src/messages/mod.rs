use std::sync::Arc;

use tokio::sync::oneshot;

use crate::config_store::{ConfigError, ConfigSnapshot};
use crate::domain::{ShippingConfig, ShippingSettings};

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Requests handled by the configuration store. Writes answer with the version
/// of the snapshot they installed.
#[derive(Debug)]
pub enum ConfigStoreRequest {
    Snapshot {
        respond_to: ServiceResponse<Arc<ConfigSnapshot>, ConfigError>,
    },
    Publish {
        config: ShippingConfig,
        respond_to: ServiceResponse<u64, ConfigError>,
    },
    UpdateSettings {
        settings: ShippingSettings,
        respond_to: ServiceResponse<u64, ConfigError>,
    },
    Reload {
        respond_to: ServiceResponse<u64, ConfigError>,
    },
    Shutdown,
}
