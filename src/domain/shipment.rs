use serde::{Deserialize, Serialize};

/// Outer package dimensions in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length_cm: u32,
    pub width_cm: u32,
    pub height_cm: u32,
}

impl Dimensions {
    pub fn new(length_cm: u32, width_cm: u32, height_cm: u32) -> Self {
        Self {
            length_cm,
            width_cm,
            height_cm,
        }
    }

    pub fn volume_cm3(&self) -> u128 {
        u128::from(self.length_cm) * u128::from(self.width_cm) * u128::from(self.height_cm)
    }

    pub fn has_zero_side(&self) -> bool {
        self.length_cm == 0 || self.width_cm == 0 || self.height_cm == 0
    }
}

/// Everything the resolver needs to price one shipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingRequest {
    pub actual_weight_grams: u32,
    #[serde(default)]
    pub dimensions_cm: Option<Dimensions>,
    pub destination_postal_code: u32,
    pub order_subtotal_cents: u64,
}

impl ShippingRequest {
    pub fn new(actual_weight_grams: u32, destination_postal_code: u32, order_subtotal_cents: u64) -> Self {
        Self {
            actual_weight_grams,
            dimensions_cm: None,
            destination_postal_code,
            order_subtotal_cents,
        }
    }

    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions_cm = Some(dimensions);
        self
    }
}

/// Final price and delivery estimate for a resolved rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingCost {
    pub cost_cents: u64,
    pub estimated_days_min: u32,
    pub estimated_days_max: u32,
    pub free_shipping: bool,
}

/// A priced shipment together with what it was resolved against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingQuote {
    pub zone_code: String,
    pub zone_name: String,
    pub class_code: String,
    pub class_name: String,
    pub carrier_name: String,
    pub actual_weight_grams: u32,
    pub volumetric_weight_grams: Option<u32>,
    pub billable_weight_grams: u32,
    pub cost: ShippingCost,
    pub free_shipping_threshold_cents: Option<u64>,
    /// Zero once the threshold is met, or when the zone has none.
    pub amount_to_free_shipping_cents: u64,
    pub config_version: u64,
}
