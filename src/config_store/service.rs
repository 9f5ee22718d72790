use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

use crate::clients::ConfigStoreClient;
use crate::domain::{ShippingConfig, ShippingSettings};
use crate::messages::{ConfigStoreRequest, ServiceResponse};

use super::{audit, ConfigError, ConfigSnapshot, ConfigSource};

/// Owns the current configuration snapshot.
///
/// Readers get a clone of the `Arc` and keep using it for as long as they
/// like. Writers never mutate a snapshot in place: they build the next version
/// and swap the `Arc`, so a quote in flight is never affected by a write.
pub struct ConfigStoreService {
    receiver: mpsc::Receiver<ConfigStoreRequest>,
    source: Box<dyn ConfigSource>,
    current: Arc<ConfigSnapshot>,
}

impl ConfigStoreService {
    /// Loads the first snapshot (version 1) from `source`.
    ///
    /// # Errors
    /// Whatever `source` or snapshot validation reports.
    pub fn new(
        buffer_size: usize,
        source: impl ConfigSource,
    ) -> Result<(Self, ConfigStoreClient), ConfigError> {
        let config = source.load()?;
        let snapshot = ConfigSnapshot::new(config, 1)?;
        report_warnings(&snapshot);
        info!(
            source = %source.describe(),
            zones = snapshot.zones().len(),
            classes = snapshot.classes().len(),
            rates = snapshot.rates().len(),
            "Loaded shipping configuration"
        );

        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            source: Box::new(source),
            current: Arc::new(snapshot),
        };
        Ok((service, ConfigStoreClient::new(sender)))
    }

    #[instrument(name = "config_store", skip(self))]
    pub async fn run(mut self) {
        info!(version = self.current.version(), "ConfigStore starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ConfigStoreRequest::Snapshot { respond_to } => {
                    self.handle_snapshot(respond_to);
                }
                ConfigStoreRequest::Publish { config, respond_to } => {
                    self.handle_publish(config, respond_to);
                }
                ConfigStoreRequest::UpdateSettings {
                    settings,
                    respond_to,
                } => {
                    self.handle_update_settings(settings, respond_to);
                }
                ConfigStoreRequest::Reload { respond_to } => {
                    self.handle_reload(respond_to);
                }
                ConfigStoreRequest::Shutdown => {
                    info!("ConfigStore shutting down");
                    break;
                }
            }
        }

        info!("ConfigStore stopped");
    }

    fn handle_snapshot(&self, respond_to: ServiceResponse<Arc<ConfigSnapshot>, ConfigError>) {
        debug!(version = self.current.version(), "Processing snapshot request");
        let _ = respond_to.send(Ok(Arc::clone(&self.current)));
    }

    #[instrument(
        fields(zones = config.zones.len(), rates = config.rates.len()),
        skip(self, config, respond_to)
    )]
    fn handle_publish(&mut self, config: ShippingConfig, respond_to: ServiceResponse<u64, ConfigError>) {
        debug!("Processing publish request");
        let result = ConfigSnapshot::new(config, self.next_version()).map(|next| self.install(next));
        let _ = respond_to.send(result);
    }

    #[instrument(fields(volumetric_divisor = settings.volumetric_divisor), skip(self, respond_to))]
    fn handle_update_settings(
        &mut self,
        settings: ShippingSettings,
        respond_to: ServiceResponse<u64, ConfigError>,
    ) {
        debug!("Processing update_settings request");
        let result = self.current.with_settings(settings).map(|next| self.install(next));
        let _ = respond_to.send(result);
    }

    #[instrument(skip(self, respond_to))]
    fn handle_reload(&mut self, respond_to: ServiceResponse<u64, ConfigError>) {
        debug!(source = %self.source.describe(), "Processing reload request");
        let result = self
            .source
            .load()
            .and_then(|config| ConfigSnapshot::new(config, self.next_version()))
            .map(|next| self.install(next));

        if let Err(e) = &result {
            error!(error = %e, "Reload failed, keeping current snapshot");
        }
        let _ = respond_to.send(result);
    }

    fn next_version(&self) -> u64 {
        self.current.version() + 1
    }

    fn install(&mut self, next: ConfigSnapshot) -> u64 {
        report_warnings(&next);
        let version = next.version();
        self.current = Arc::new(next);
        info!(version, "Installed configuration snapshot");
        version
    }
}

fn report_warnings(snapshot: &ConfigSnapshot) {
    for warning in audit(snapshot.config()) {
        warn!(version = snapshot.version(), %warning, "Shipping configuration warning");
    }
}
