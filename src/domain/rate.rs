use serde::{Deserialize, Serialize};

use super::{ClassId, ZoneId};

pub type RateId = u32;

/// One priced weight band within a (zone, class) pair.
///
/// Bands are inclusive on both ends: a rate with `min_weight_grams = 1000` and
/// `max_weight_grams = 5000` matches exactly 1000 g and exactly 5000 g.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingRate {
    pub id: RateId,
    pub zone_id: ZoneId,
    pub class_id: ClassId,
    pub min_weight_grams: u32,
    pub max_weight_grams: u32,
    /// Price for the band's minimum weight.
    pub base_rate_cents: u64,
    /// Price per started kilogram above `min_weight_grams`.
    #[serde(default)]
    pub extra_kg_rate_cents: u64,
    #[serde(default = "default_days_min")]
    pub estimated_days_min: u32,
    #[serde(default = "default_days_max")]
    pub estimated_days_max: u32,
    #[serde(default = "super::active_by_default")]
    pub is_active: bool,
}

fn default_days_min() -> u32 {
    1
}

fn default_days_max() -> u32 {
    3
}

impl ShippingRate {
    /// Creates an active band with no per-kg surcharge and a 1-3 day estimate.
    pub fn new(
        id: RateId,
        zone_id: ZoneId,
        class_id: ClassId,
        min_weight_grams: u32,
        max_weight_grams: u32,
        base_rate_cents: u64,
    ) -> Self {
        Self {
            id,
            zone_id,
            class_id,
            min_weight_grams,
            max_weight_grams,
            base_rate_cents,
            extra_kg_rate_cents: 0,
            estimated_days_min: default_days_min(),
            estimated_days_max: default_days_max(),
            is_active: true,
        }
    }

    pub fn with_extra_kg_rate(mut self, extra_kg_rate_cents: u64) -> Self {
        self.extra_kg_rate_cents = extra_kg_rate_cents;
        self
    }

    pub fn with_estimated_days(mut self, min: u32, max: u32) -> Self {
        self.estimated_days_min = min;
        self.estimated_days_max = max;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub fn covers(&self, weight_grams: u32) -> bool {
        self.min_weight_grams <= weight_grams && weight_grams <= self.max_weight_grams
    }
}
