use crate::domain::Dimensions;

use super::ShippingError;

/// Actual, volumetric and billable weight of one shipment, in grams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightBreakdown {
    pub actual_grams: u32,
    pub volumetric_grams: Option<u32>,
    pub billable_grams: u32,
}

/// Billable weight: the greater of the actual and the volumetric weight.
///
/// Volumetric weight is `L × W × H / divisor` kilograms, converted to grams and
/// rounded half-up to the nearest gram.
///
/// # Errors
/// `InvalidInput` when the actual weight is zero, a side is zero, or the
/// divisor is zero.
pub fn compute_billable_weight(
    actual_weight_grams: u32,
    dimensions_cm: Option<Dimensions>,
    volumetric_divisor: u32,
) -> Result<u32, ShippingError> {
    weigh(actual_weight_grams, dimensions_cm, volumetric_divisor).map(|w| w.billable_grams)
}

/// Same as [`compute_billable_weight`], keeping both inputs of the comparison.
pub fn weigh(
    actual_weight_grams: u32,
    dimensions_cm: Option<Dimensions>,
    volumetric_divisor: u32,
) -> Result<WeightBreakdown, ShippingError> {
    if actual_weight_grams == 0 {
        return Err(ShippingError::InvalidInput(
            "actual weight must be positive".to_string(),
        ));
    }
    if volumetric_divisor == 0 {
        return Err(ShippingError::InvalidInput(
            "volumetric divisor must be positive".to_string(),
        ));
    }

    let volumetric_grams = match dimensions_cm {
        Some(dimensions) => Some(volumetric_grams(dimensions, volumetric_divisor)?),
        None => None,
    };

    let billable_grams = volumetric_grams.map_or(actual_weight_grams, |v| v.max(actual_weight_grams));

    Ok(WeightBreakdown {
        actual_grams: actual_weight_grams,
        volumetric_grams,
        billable_grams,
    })
}

fn volumetric_grams(dimensions: Dimensions, divisor: u32) -> Result<u32, ShippingError> {
    if dimensions.has_zero_side() {
        return Err(ShippingError::InvalidInput(format!(
            "package dimensions must be positive, got {}x{}x{} cm",
            dimensions.length_cm, dimensions.width_cm, dimensions.height_cm
        )));
    }

    // round(V * 1000 / d) with halves going up, in integers.
    let divisor = u128::from(divisor);
    let grams = (2 * dimensions.volume_cm3() * 1000 + divisor) / (2 * divisor);

    u32::try_from(grams).map_err(|_| {
        ShippingError::InvalidInput(format!("volumetric weight of {grams} g is out of range"))
    })
}
