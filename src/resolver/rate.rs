use crate::domain::{ClassId, ShippingClass, ShippingRate, ShippingZone};

use super::ShippingError;

/// A matched band together with the class that carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRate<'a> {
    pub rate: &'a ShippingRate,
    pub class: &'a ShippingClass,
}

/// Picks the one active rate in `zone` able to carry `billable_weight_grams`.
///
/// A candidate must be active, belong to `zone`, reference an active class,
/// cover the weight with its inclusive band, and stay under the class ceiling.
/// When bands overlap the winner is, in order: the class with the smallest
/// `max_weight_grams`, the smallest `base_rate_cents`, the smallest rate `id`.
/// The input order of `classes` and `rates` never matters.
///
/// # Errors
/// `NoRateForWeight` when nothing qualifies.
pub fn resolve_rate<'a>(
    zone: &ShippingZone,
    classes: &'a [ShippingClass],
    rates: &'a [ShippingRate],
    billable_weight_grams: u32,
) -> Result<ResolvedRate<'a>, ShippingError> {
    rates
        .iter()
        .filter(|rate| rate.zone_id == zone.id && rate.is_active && rate.covers(billable_weight_grams))
        .filter_map(|rate| {
            active_class(classes, rate.class_id)
                .filter(|class| billable_weight_grams <= class.max_weight_grams)
                .map(|class| ResolvedRate { rate, class })
        })
        .min_by_key(|candidate| {
            (
                candidate.class.max_weight_grams,
                candidate.rate.base_rate_cents,
                candidate.rate.id,
            )
        })
        .ok_or_else(|| ShippingError::NoRateForWeight {
            zone_code: zone.code.clone(),
            billable_weight_grams,
        })
}

// Class ids are unique within a snapshot.
fn active_class(classes: &[ShippingClass], class_id: ClassId) -> Option<&ShippingClass> {
    classes
        .iter()
        .find(|class| class.id == class_id && class.is_active)
}
