//! Configuration lint for the administrative side.
//!
//! None of these findings stop a snapshot from being installed: the resolver
//! settles overlaps with its tie-break order and simply finds nothing in a gap.
//! They are reported so an administrator can clean the matrix up.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::domain::{ClassId, RateId, ShippingClass, ShippingConfig, ShippingRate, ZoneId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    InvertedZone { zone_id: ZoneId },
    OverlappingZones { first: ZoneId, second: ZoneId },
    InvertedBand { rate_id: RateId },
    InvertedTransitDays { rate_id: RateId },
    UnknownZone { rate_id: RateId, zone_id: ZoneId },
    UnknownClass { rate_id: RateId, class_id: ClassId },
    BandExceedsClass { rate_id: RateId, class_id: ClassId, class_max_grams: u32 },
    OverlappingBands { zone_id: ZoneId, class_id: ClassId, first: RateId, second: RateId },
    BandGap { zone_id: ZoneId, class_id: ClassId, from_grams: u32, to_grams: u32 },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::InvertedZone { zone_id } => {
                write!(f, "zone {zone_id} ends before it starts")
            }
            ConfigWarning::OverlappingZones { first, second } => {
                write!(f, "active zones {first} and {second} share postal codes")
            }
            ConfigWarning::InvertedBand { rate_id } => {
                write!(f, "rate {rate_id} has max weight not above min weight")
            }
            ConfigWarning::InvertedTransitDays { rate_id } => {
                write!(f, "rate {rate_id} has an empty delivery window")
            }
            ConfigWarning::UnknownZone { rate_id, zone_id } => {
                write!(f, "rate {rate_id} references missing zone {zone_id}")
            }
            ConfigWarning::UnknownClass { rate_id, class_id } => {
                write!(f, "rate {rate_id} references missing class {class_id}")
            }
            ConfigWarning::BandExceedsClass {
                rate_id,
                class_id,
                class_max_grams,
            } => write!(
                f,
                "rate {rate_id} extends past the {class_max_grams} g ceiling of class {class_id}"
            ),
            ConfigWarning::OverlappingBands {
                zone_id,
                class_id,
                first,
                second,
            } => write!(
                f,
                "rates {first} and {second} overlap in zone {zone_id}, class {class_id}"
            ),
            ConfigWarning::BandGap {
                zone_id,
                class_id,
                from_grams,
                to_grams,
            } => write!(
                f,
                "zone {zone_id}, class {class_id} has no rate for {from_grams}-{to_grams} g"
            ),
        }
    }
}

/// Lists everything in `config` that breaks the matrix invariants.
///
/// Only active rows are considered for overlaps and gaps. Output order is
/// stable for a given config.
pub fn audit(config: &ShippingConfig) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    audit_zones(config, &mut warnings);
    audit_rates(config, &mut warnings);

    warnings
}

fn audit_zones(config: &ShippingConfig, warnings: &mut Vec<ConfigWarning>) {
    let mut zones: Vec<_> = config.zones.iter().filter(|zone| zone.is_active).collect();
    zones.sort_by_key(|zone| zone.id);

    for zone in &zones {
        if zone.postal_code_start > zone.postal_code_end {
            warnings.push(ConfigWarning::InvertedZone { zone_id: zone.id });
        }
    }

    for (i, a) in zones.iter().enumerate() {
        for b in &zones[i + 1..] {
            if a.postal_code_start <= b.postal_code_end && b.postal_code_start <= a.postal_code_end {
                warnings.push(ConfigWarning::OverlappingZones {
                    first: a.id,
                    second: b.id,
                });
            }
        }
    }
}

fn audit_rates(config: &ShippingConfig, warnings: &mut Vec<ConfigWarning>) {
    let classes: HashMap<ClassId, &ShippingClass> =
        config.classes.iter().map(|class| (class.id, class)).collect();
    let mut groups: BTreeMap<(ZoneId, ClassId), Vec<&ShippingRate>> = BTreeMap::new();

    let mut rates: Vec<_> = config.rates.iter().filter(|rate| rate.is_active).collect();
    rates.sort_by_key(|rate| rate.id);

    for rate in rates {
        if rate.min_weight_grams >= rate.max_weight_grams {
            warnings.push(ConfigWarning::InvertedBand { rate_id: rate.id });
        }
        if rate.estimated_days_min == 0 || rate.estimated_days_min > rate.estimated_days_max {
            warnings.push(ConfigWarning::InvertedTransitDays { rate_id: rate.id });
        }

        let zone = config.zones.iter().find(|zone| zone.id == rate.zone_id);
        if zone.is_none() {
            warnings.push(ConfigWarning::UnknownZone {
                rate_id: rate.id,
                zone_id: rate.zone_id,
            });
        }

        let Some(class) = classes.get(&rate.class_id) else {
            warnings.push(ConfigWarning::UnknownClass {
                rate_id: rate.id,
                class_id: rate.class_id,
            });
            continue;
        };

        if rate.max_weight_grams > class.max_weight_grams {
            warnings.push(ConfigWarning::BandExceedsClass {
                rate_id: rate.id,
                class_id: class.id,
                class_max_grams: class.max_weight_grams,
            });
        }

        let zone_active = zone.is_some_and(|zone| zone.is_active);
        if zone_active && class.is_active && rate.min_weight_grams < rate.max_weight_grams {
            groups.entry((rate.zone_id, rate.class_id)).or_default().push(rate);
        }
    }

    for ((zone_id, class_id), bands) in groups {
        let ceiling = classes[&class_id].max_weight_grams;
        audit_bands(zone_id, class_id, ceiling, bands, warnings);
    }
}

fn audit_bands(
    zone_id: ZoneId,
    class_id: ClassId,
    ceiling: u32,
    mut bands: Vec<&ShippingRate>,
    warnings: &mut Vec<ConfigWarning>,
) {
    bands.sort_by_key(|rate| (rate.min_weight_grams, rate.max_weight_grams, rate.id));

    for (i, a) in bands.iter().enumerate() {
        for b in &bands[i + 1..] {
            if b.min_weight_grams <= a.max_weight_grams {
                let (first, second) = if a.id < b.id { (a.id, b.id) } else { (b.id, a.id) };
                warnings.push(ConfigWarning::OverlappingBands {
                    zone_id,
                    class_id,
                    first,
                    second,
                });
            }
        }
    }

    // Billable weights start at 1 g.
    let mut reach = 0u32;
    for band in &bands {
        if band.min_weight_grams > reach.saturating_add(1) && reach < ceiling {
            warnings.push(ConfigWarning::BandGap {
                zone_id,
                class_id,
                from_grams: reach + 1,
                to_grams: (band.min_weight_grams - 1).min(ceiling),
            });
        }
        reach = reach.max(band.max_weight_grams.min(ceiling));
    }
    if reach < ceiling {
        warnings.push(ConfigWarning::BandGap {
            zone_id,
            class_id,
            from_grams: reach + 1,
            to_grams: ceiling,
        });
    }
}
