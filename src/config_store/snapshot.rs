use std::collections::HashSet;

use crate::domain::{ShippingClass, ShippingConfig, ShippingRate, ShippingSettings, ShippingZone};

use super::ConfigError;

/// One immutable, versioned copy of the whole shipping configuration.
///
/// Zones, classes, rates and settings always travel together, so a resolution
/// holding a snapshot can never see a zone from one version and rates from
/// another. Ids and codes are unique within a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSnapshot {
    version: u64,
    config: ShippingConfig,
}

impl ConfigSnapshot {
    /// Checks `config` and tags it with `version`.
    ///
    /// # Errors
    /// `InvalidSettings` for a zero volumetric divisor, `DuplicateId` or
    /// `DuplicateCode` when two rows of the same kind collide.
    pub fn new(config: ShippingConfig, version: u64) -> Result<Self, ConfigError> {
        validate(&config)?;
        Ok(Self { version, config })
    }

    /// Copy of this snapshot with new settings and the next version number.
    pub fn with_settings(&self, settings: ShippingSettings) -> Result<Self, ConfigError> {
        let config = ShippingConfig {
            settings,
            ..self.config.clone()
        };
        Self::new(config, self.version + 1)
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn config(&self) -> &ShippingConfig {
        &self.config
    }

    pub fn settings(&self) -> ShippingSettings {
        self.config.settings
    }

    pub fn zones(&self) -> &[ShippingZone] {
        &self.config.zones
    }

    pub fn classes(&self) -> &[ShippingClass] {
        &self.config.classes
    }

    pub fn rates(&self) -> &[ShippingRate] {
        &self.config.rates
    }
}

fn validate(config: &ShippingConfig) -> Result<(), ConfigError> {
    if config.settings.volumetric_divisor == 0 {
        return Err(ConfigError::InvalidSettings(
            "volumetric_divisor must be positive".to_string(),
        ));
    }

    unique_ids("zone", config.zones.iter().map(|zone| zone.id))?;
    unique_ids("class", config.classes.iter().map(|class| class.id))?;
    unique_ids("rate", config.rates.iter().map(|rate| rate.id))?;
    unique_codes("zone", config.zones.iter().map(|zone| zone.code.as_str()))?;
    unique_codes("class", config.classes.iter().map(|class| class.code.as_str()))?;

    Ok(())
}

fn unique_ids(kind: &'static str, ids: impl Iterator<Item = u32>) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ConfigError::DuplicateId { kind, id });
        }
    }
    Ok(())
}

fn unique_codes<'a>(kind: &'static str, codes: impl Iterator<Item = &'a str>) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for code in codes {
        if !seen.insert(code) {
            return Err(ConfigError::DuplicateCode {
                kind,
                code: code.to_string(),
            });
        }
    }
    Ok(())
}
