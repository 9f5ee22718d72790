use serde::{Deserialize, Serialize};

pub const DEFAULT_VOLUMETRIC_DIVISOR: u32 = 4000;

/// Process-wide shipping settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingSettings {
    /// cm³ per kilogram-equivalent: `volumetric kg = L × W × H / divisor`.
    #[serde(default = "default_volumetric_divisor")]
    pub volumetric_divisor: u32,
}

fn default_volumetric_divisor() -> u32 {
    DEFAULT_VOLUMETRIC_DIVISOR
}

impl ShippingSettings {
    pub fn new(volumetric_divisor: u32) -> Self {
        Self { volumetric_divisor }
    }
}

impl Default for ShippingSettings {
    fn default() -> Self {
        Self::new(DEFAULT_VOLUMETRIC_DIVISOR)
    }
}
