use serde::{Deserialize, Serialize};

use super::Dimension;

/// Shipping class of the order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ShippingType {
    #[serde(rename = "Standard Class")]
    StandardClass,
    #[serde(rename = "Second Class")]
    SecondClass,
    #[serde(rename = "First Class")]
    FirstClass,
    #[serde(rename = "Same Day")]
    SameDay,
}

impl Dimension for ShippingType {
    const COLUMN: &'static str = "Shipping Type";
    const VALUES: &'static [Self] = &[
        ShippingType::StandardClass,
        ShippingType::SecondClass,
        ShippingType::FirstClass,
        ShippingType::SameDay,
    ];

    fn label(&self) -> &'static str {
        match self {
            ShippingType::StandardClass => "Standard Class",
            ShippingType::SecondClass => "Second Class",
            ShippingType::FirstClass => "First Class",
            ShippingType::SameDay => "Same Day",
        }
    }
}

impl std::fmt::Display for ShippingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
