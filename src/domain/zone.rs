use serde::{Deserialize, Serialize};

pub type ZoneId = u32;

/// A geographic partition keyed by an inclusive postal-code interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingZone {
    pub id: ZoneId,
    pub code: String,
    pub name: String,
    pub postal_code_start: u32,
    pub postal_code_end: u32,
    /// Orders with a subtotal at or above this amount ship free in this zone.
    #[serde(default)]
    pub free_shipping_threshold_cents: Option<u64>,
    #[serde(default = "super::active_by_default")]
    pub is_active: bool,
    /// Only used to break ties between overlapping zones.
    #[serde(default)]
    pub display_order: i32,
}

impl ShippingZone {
    /// Creates an active zone with no free-shipping threshold.
    pub fn new(
        id: ZoneId,
        code: impl Into<String>,
        name: impl Into<String>,
        postal_code_start: u32,
        postal_code_end: u32,
    ) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
            postal_code_start,
            postal_code_end,
            free_shipping_threshold_cents: None,
            is_active: true,
            display_order: 0,
        }
    }

    pub fn with_free_shipping_threshold(mut self, threshold_cents: u64) -> Self {
        self.free_shipping_threshold_cents = Some(threshold_cents);
        self
    }

    pub fn with_display_order(mut self, display_order: i32) -> Self {
        self.display_order = display_order;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub fn covers(&self, postal_code: u32) -> bool {
        self.postal_code_start <= postal_code && postal_code <= self.postal_code_end
    }
}
