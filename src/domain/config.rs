use serde::{Deserialize, Serialize};

use super::{ShippingClass, ShippingRate, ShippingSettings, ShippingZone};

/// The administrator-maintained rate matrix, as plain data.
///
/// Deserializes from a TOML table of the form:
///
/// ```toml
/// [settings]
/// volumetric_divisor = 4000
///
/// [[zones]]
/// id = 1
/// code = "continente"
/// name = "Portugal Continental"
/// postal_code_start = 1000
/// postal_code_end = 8999
/// free_shipping_threshold_cents = 15000
///
/// [[classes]]
/// id = 1
/// code = "standard"
/// name = "Standard"
/// carrier_name = "CTT"
/// max_weight_grams = 30000
///
/// [[rates]]
/// id = 1
/// zone_id = 1
/// class_id = 1
/// min_weight_grams = 0
/// max_weight_grams = 30000
/// base_rate_cents = 500
/// extra_kg_rate_cents = 100
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingConfig {
    #[serde(default)]
    pub settings: ShippingSettings,
    #[serde(default)]
    pub zones: Vec<ShippingZone>,
    #[serde(default)]
    pub classes: Vec<ShippingClass>,
    #[serde(default)]
    pub rates: Vec<ShippingRate>,
}

impl ShippingConfig {
    pub fn new(
        settings: ShippingSettings,
        zones: Vec<ShippingZone>,
        classes: Vec<ShippingClass>,
        rates: Vec<ShippingRate>,
    ) -> Self {
        Self {
            settings,
            zones,
            classes,
            rates,
        }
    }
}
