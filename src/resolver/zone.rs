use crate::domain::ShippingZone;

use super::ShippingError;

/// Finds the active zone serving `postal_code`.
///
/// Overlapping active zones are ordered by `display_order`, then `id`, and the
/// first one wins. The order is total as long as zone ids are unique, which
/// snapshot construction guarantees.
///
/// # Errors
/// `ZoneNotFound` when no active zone covers the code.
pub fn resolve_zone(postal_code: u32, zones: &[ShippingZone]) -> Result<&ShippingZone, ShippingError> {
    zones
        .iter()
        .filter(|zone| zone.is_active && zone.covers(postal_code))
        .min_by_key(|zone| (zone.display_order, zone.id))
        .ok_or(ShippingError::ZoneNotFound { postal_code })
}

/// Extracts the 4-digit numeric prefix from a Portuguese postal code.
///
/// Accepts `1234`, `1234-567` and `1234567`; anything that is not a digit is
/// ignored. The prefix must be between 1000 and 9999.
pub fn parse_postal_code(raw: &str) -> Result<u32, ShippingError> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    if !(4..=7).contains(&digits.len()) {
        return Err(ShippingError::InvalidInput(format!("invalid postal code: {raw:?}")));
    }

    let prefix: u32 = digits[..4]
        .parse()
        .map_err(|_| ShippingError::InvalidInput(format!("invalid postal code: {raw:?}")))?;

    if !(1000..=9999).contains(&prefix) {
        return Err(ShippingError::InvalidInput(format!(
            "postal code prefix {prefix} is outside 1000-9999"
        )));
    }

    Ok(prefix)
}
