use thiserror::Error;

/// Why a shipment could not be priced.
///
/// `InvalidInput`, `ZoneNotFound` and `NoRateForWeight` are deterministic: retrying
/// with the same request against the same snapshot yields the same error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShippingError {
    #[error("Invalid shipment input: {0}")]
    InvalidInput(String),
    #[error("No active shipping zone covers postal code {postal_code}")]
    ZoneNotFound { postal_code: u32 },
    #[error("No active rate in zone {zone_code} covers {billable_weight_grams} g")]
    NoRateForWeight {
        zone_code: String,
        billable_weight_grams: u32,
    },
    #[error("Shipping configuration unavailable: {0}")]
    ConfigUnavailable(String),
}

impl ShippingError {
    /// True for errors a shopper should see as "shipping unavailable" rather
    /// than as a caller bug.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            ShippingError::ZoneNotFound { .. } | ShippingError::NoRateForWeight { .. }
        )
    }
}
