use crate::domain::{ShippingCost, ShippingRate, ShippingZone};

const GRAMS_PER_KG: u32 = 1000;

/// Prices a resolved rate.
///
/// Free shipping zeroes the price but keeps the rate's transit estimate.
/// Otherwise every started kilogram above the band minimum costs
/// `extra_kg_rate_cents`.
pub fn compute_cost(
    zone: &ShippingZone,
    rate: &ShippingRate,
    billable_weight_grams: u32,
    order_subtotal_cents: u64,
) -> ShippingCost {
    if qualifies_for_free_shipping(zone, order_subtotal_cents) {
        return ShippingCost {
            cost_cents: 0,
            estimated_days_min: rate.estimated_days_min,
            estimated_days_max: rate.estimated_days_max,
            free_shipping: true,
        };
    }

    let extra_grams = billable_weight_grams.saturating_sub(rate.min_weight_grams);
    let extra_kg = u64::from(extra_grams.div_ceil(GRAMS_PER_KG));

    ShippingCost {
        cost_cents: rate
            .base_rate_cents
            .saturating_add(extra_kg.saturating_mul(rate.extra_kg_rate_cents)),
        estimated_days_min: rate.estimated_days_min,
        estimated_days_max: rate.estimated_days_max,
        free_shipping: false,
    }
}

pub fn qualifies_for_free_shipping(zone: &ShippingZone, order_subtotal_cents: u64) -> bool {
    zone.free_shipping_threshold_cents
        .is_some_and(|threshold| order_subtotal_cents >= threshold)
}
