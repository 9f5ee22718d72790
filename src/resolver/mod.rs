//! The pricing pipeline: billable weight, zone, rate, cost.
//!
//! Every function here is pure. A resolution reads one configuration and keeps
//! no state between calls, so any number of quotes can run concurrently over a
//! shared snapshot.

pub mod cost;
pub mod error;
pub mod rate;
pub mod weight;
pub mod zone;

pub use cost::*;
pub use error::*;
pub use rate::*;
pub use weight::*;
pub use zone::*;

use tracing::{debug, instrument};

use crate::config_store::ConfigSnapshot;
use crate::display::amount_to_free_shipping;
use crate::domain::{ShippingConfig, ShippingCost, ShippingQuote, ShippingRequest};

/// Prices `request` against `config`.
///
/// # Errors
/// `InvalidInput`, `ZoneNotFound` or `NoRateForWeight`, from whichever stage
/// fails first.
pub fn resolve_shipping_cost(
    request: &ShippingRequest,
    config: &ShippingConfig,
) -> Result<ShippingCost, ShippingError> {
    let billable = compute_billable_weight(
        request.actual_weight_grams,
        request.dimensions_cm,
        config.settings.volumetric_divisor,
    )?;
    let zone = resolve_zone(request.destination_postal_code, &config.zones)?;
    let resolved = resolve_rate(zone, &config.classes, &config.rates, billable)?;

    Ok(compute_cost(zone, resolved.rate, billable, request.order_subtotal_cents))
}

/// Runs the pipeline and reports what the price was resolved against.
#[instrument(
    skip(request, snapshot),
    fields(
        postal_code = request.destination_postal_code,
        config_version = snapshot.version()
    )
)]
pub fn quote(request: &ShippingRequest, snapshot: &ConfigSnapshot) -> Result<ShippingQuote, ShippingError> {
    let config = snapshot.config();

    let weight = weigh(
        request.actual_weight_grams,
        request.dimensions_cm,
        config.settings.volumetric_divisor,
    )?;
    debug!(
        actual_grams = weight.actual_grams,
        volumetric_grams = ?weight.volumetric_grams,
        billable_grams = weight.billable_grams,
        "Computed billable weight"
    );

    let zone = resolve_zone(request.destination_postal_code, &config.zones)?;
    debug!(zone_code = %zone.code, "Resolved zone");

    let resolved = resolve_rate(zone, &config.classes, &config.rates, weight.billable_grams)?;
    debug!(rate_id = resolved.rate.id, class_code = %resolved.class.code, "Resolved rate");

    let cost = compute_cost(zone, resolved.rate, weight.billable_grams, request.order_subtotal_cents);

    Ok(ShippingQuote {
        zone_code: zone.code.clone(),
        zone_name: zone.name.clone(),
        class_code: resolved.class.code.clone(),
        class_name: resolved.class.name.clone(),
        carrier_name: resolved.class.carrier_name.clone(),
        actual_weight_grams: weight.actual_grams,
        volumetric_weight_grams: weight.volumetric_grams,
        billable_weight_grams: weight.billable_grams,
        cost,
        free_shipping_threshold_cents: zone.free_shipping_threshold_cents,
        amount_to_free_shipping_cents: amount_to_free_shipping(
            request.order_subtotal_cents,
            zone.free_shipping_threshold_cents,
        ),
        config_version: snapshot.version(),
    })
}
