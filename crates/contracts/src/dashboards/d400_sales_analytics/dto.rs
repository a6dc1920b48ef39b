use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a001_sales_order::aggregate::{SalesOrder, YearMonth};
use crate::enums::{Category, CustomerSegment, PaymentMethod, Region, ShippingType};
use crate::shared::indicators::IndicatorValue;

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

/// Multi-select state of the dashboard filters.
///
/// Each list holds the selected labels. An empty list, or a list containing
/// "All", places no constraint on that column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalesFilter {
    pub region: Vec<String>,
    pub category: Vec<String>,
    pub payment_method: Vec<String>,
    pub customer_segment: Vec<String>,
}

/// Options offered by each multi-select ("All" first, then sorted labels)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterOptions {
    pub region: Vec<String>,
    pub category: Vec<String>,
    pub payment_method: Vec<String>,
    pub customer_segment: Vec<String>,
}

// ---------------------------------------------------------------------------
// KPIs
// ---------------------------------------------------------------------------

/// Scalar summary of a set of orders. All zero for an empty set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesKpis {
    pub total_sales: f64,
    pub average_profit: f64,
    pub average_quantity: f64,
    pub total_orders: usize,
}

// ---------------------------------------------------------------------------
// Chart series
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySales {
    pub period: YearMonth,
    pub sales: f64,
}

/// Aggregated value for one group key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupTotal<K> {
    pub key: K,
    pub value: f64,
}

/// Number of orders for one group key and its share of all orders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupCount<K> {
    pub key: K,
    pub count: usize,
    pub share: f64,
}

/// Five-number summary with Tukey fences, as drawn by a box plot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    /// Smallest value not below `q1 - 1.5 * IQR`
    pub lower_whisker: f64,
    /// Largest value not above `q3 + 1.5 * IQR`
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
}

/// Full value distribution of one group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution<K> {
    pub key: K,
    pub values: Vec<f64>,
    pub summary: BoxSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
    /// `count / (n * width)`, so the bins integrate to 1
    pub density: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub sales: f64,
    pub profit: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingCount {
    pub shipping_type: ShippingType,
    pub count: usize,
}

/// One stacked bar: a segment broken down by every shipping type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentShippingRow {
    pub segment: CustomerSegment,
    pub counts: Vec<ShippingCount>,
    pub total: usize,
}

/// Every series the dashboard charts are drawn from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub monthly_sales: Vec<MonthlySales>,
    pub sales_by_region: Vec<GroupTotal<Region>>,
    pub profit_by_category: Vec<Distribution<Category>>,
    pub quantity_histogram: Vec<HistogramBin>,
    pub sales_vs_profit: Vec<ScatterPoint>,
    pub profit_by_segment: Vec<GroupTotal<CustomerSegment>>,
    pub orders_by_payment_method: Vec<GroupCount<PaymentMethod>>,
    pub segment_shipping_counts: Vec<SegmentShippingRow>,
    pub avg_profit_by_shipping: Vec<GroupTotal<ShippingType>>,
    pub sales_by_category: Vec<Distribution<Category>>,
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// Size information about the filtered view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub total_records: usize,
    pub total_columns: usize,
    /// Deep in-memory size estimate in MiB, 2 decimals
    pub memory_mb: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    /// "Showing N orders out of M total orders"
    pub headline: String,
    pub filtered_orders: usize,
    pub total_orders: usize,
    pub kpis: SalesKpis,
    /// KPI cards with display strings
    pub kpi_cards: Vec<IndicatorValue>,
    pub charts: ChartSeries,
    pub info: DatasetInfo,
    /// Set when the filter matches nothing
    pub notice: Option<String>,
    pub generated_at: DateTime<Utc>,
}

/// Raw data preview request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordsRequest {
    #[serde(default)]
    pub filter: SalesFilter,
    /// Maximum number of rows returned; everything when absent
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordsResponse {
    /// Number of matching rows before `limit` is applied
    pub total: usize,
    pub records: Vec<SalesOrder>,
    pub notice: Option<String>,
}
