use serde::{Deserialize, Serialize};

pub type ClassId = u32;

/// A carrier/weight-capacity grouping, independent of geography.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingClass {
    pub id: ClassId,
    pub code: String,
    pub name: String,
    pub carrier_name: String,
    /// Hard ceiling this class can ever carry.
    pub max_weight_grams: u32,
    #[serde(default = "super::active_by_default")]
    pub is_active: bool,
}

impl ShippingClass {
    pub fn new(
        id: ClassId,
        code: impl Into<String>,
        name: impl Into<String>,
        carrier_name: impl Into<String>,
        max_weight_grams: u32,
    ) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
            carrier_name: carrier_name.into(),
            max_weight_grams,
            is_active: true,
        }
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}
