use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::{Category, CustomerSegment, PaymentMethod, Region, ShippingType};

/// Allowed discount fractions
pub const DISCOUNT_LEVELS: [f64; 4] = [0.0, 0.1, 0.2, 0.3];

/// Inclusive quantity bounds of a single order line
pub const QUANTITY_MIN: u32 = 1;
pub const QUANTITY_MAX: u32 = 10;

/// Calendar month used as the time-series key.
///
/// Ordering is chronological (year first, then month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Parse from "YYYY-MM"
    pub fn parse(s: &str) -> Option<Self> {
        let (year, month) = s.split_once('-')?;
        let year: i32 = year.parse().ok()?;
        let month: u32 = month.parse().ok()?;
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(Self { year, month })
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        YearMonth::parse(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid year-month: {s}")))
    }
}

/// One order line of the sales dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOrder {
    pub order_id: Uuid,
    pub order_date: NaiveDate,
    pub customer_id: Uuid,
    pub customer_name: String,
    pub region: Region,
    pub category: Category,
    pub sub_category: String,
    /// Order amount, never negative
    pub sales: f64,
    pub quantity: u32,
    /// One of [`DISCOUNT_LEVELS`]
    pub discount: f64,
    /// Profit, clamped at zero
    pub profit: f64,
    pub payment_method: PaymentMethod,
    pub customer_segment: CustomerSegment,
    pub shipping_type: ShippingType,
    pub product_id: Uuid,
    pub product_name: String,
    /// Derived from `order_date`
    pub year_month: YearMonth,
}

impl SalesOrder {
    /// Column headers, in export order
    pub const COLUMNS: [&'static str; 17] = [
        "Order ID",
        "Order Date",
        "Customer ID",
        "Customer Name",
        "Region",
        "Category",
        "Sub-Category",
        "Sales",
        "Quantity",
        "Discount",
        "Profit",
        "Payment Method",
        "Customer Segment",
        "Shipping Type",
        "Product ID",
        "Product Name",
        "YearMonth",
    ];

    /// Checks the record invariants. Returns the first violation found.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.sales >= 0.0) {
            return Err(format!("sales must be non-negative, got {}", self.sales));
        }
        if !(self.profit >= 0.0) {
            return Err(format!("profit must be non-negative, got {}", self.profit));
        }
        if !(QUANTITY_MIN..=QUANTITY_MAX).contains(&self.quantity) {
            return Err(format!("quantity out of range: {}", self.quantity));
        }
        if !DISCOUNT_LEVELS.iter().any(|d| (d - self.discount).abs() < 1e-9) {
            return Err(format!("unexpected discount: {}", self.discount));
        }
        if !self.category.sub_categories().contains(&self.sub_category.as_str()) {
            return Err(format!(
                "sub-category '{}' does not belong to {}",
                self.sub_category, self.category
            ));
        }
        if self.year_month != YearMonth::from_date(self.order_date) {
            return Err(format!(
                "year_month {} does not match order date {}",
                self.year_month, self.order_date
            ));
        }
        Ok(())
    }
}
