//! Shopper-facing formatting for quotes.

/// `500` → `"5.00€"`.
pub fn format_cost_cents(cents: u64) -> String {
    format!("{}.{:02}€", cents / 100, cents % 100)
}

/// Grams below one kilogram print as grams, heavier weights as kilograms with
/// one decimal: `800` → `"800 g"`, `1500` → `"1.5 kg"`.
pub fn format_weight(grams: u32) -> String {
    if grams >= 1000 {
        let tenths = (u64::from(grams) + 50) / 100;
        format!("{}.{} kg", tenths / 10, tenths % 10)
    } else {
        format!("{grams} g")
    }
}

/// Working-day transit window, in Portuguese.
pub fn format_estimated_days(min: u32, max: u32) -> String {
    match (min, max) {
        (1, 1) => "1 dia útil".to_string(),
        (min, max) if min == max => format!("{min} dias úteis"),
        (min, max) => format!("{min}-{max} dias úteis"),
    }
}

/// Percentage of the way to free shipping, 0 to 100. Zero when the zone has no
/// positive threshold.
pub fn free_shipping_progress(subtotal_cents: u64, threshold_cents: Option<u64>) -> u8 {
    match threshold_cents {
        Some(threshold) if threshold > 0 => {
            if subtotal_cents >= threshold {
                100
            } else {
                let percent = (u128::from(subtotal_cents) * 200 + u128::from(threshold)) / (u128::from(threshold) * 2);
                percent as u8
            }
        }
        _ => 0,
    }
}

/// Cents still missing before the order ships free.
pub fn amount_to_free_shipping(subtotal_cents: u64, threshold_cents: Option<u64>) -> u64 {
    threshold_cents.map_or(0, |threshold| threshold.saturating_sub(subtotal_cents))
}
