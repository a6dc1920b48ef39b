use serde::{Deserialize, Serialize};

use crate::dashboards::d400_sales_analytics::SalesFilter;

// ---------------------------------------------------------------------------
// Indicator identity & display metadata
// ---------------------------------------------------------------------------

/// Unique indicator identifier, used as key in registry and API requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndicatorId(pub String);

impl IndicatorId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// How the numeric value is rendered on a KPI card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money { currency: String },
    Number { decimals: u8 },
    Integer,
}

/// Visual status of the indicator (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Neutral,
    Warning,
}

/// Static metadata describing one indicator (label, format, icon, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorMeta {
    pub id: IndicatorId,
    pub label: String,
    pub short_label: Option<String>,
    pub icon: String,
    pub format: ValueFormat,
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Indicator sets
// ---------------------------------------------------------------------------

/// Unique set identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndicatorSetId(pub String);

impl IndicatorSetId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Metadata for a group of indicators rendered together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorSetMeta {
    pub id: IndicatorSetId,
    pub label: String,
    pub indicators: Vec<IndicatorId>,
    /// Number of columns in the card grid (2, 3, 4).
    pub columns: u8,
}

// ---------------------------------------------------------------------------
// Computed values
// ---------------------------------------------------------------------------

/// A single computed indicator result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorValue {
    pub id: IndicatorId,
    pub label: String,
    pub value: f64,
    /// Value rendered according to the indicator's [`ValueFormat`]
    pub display: String,
    pub status: IndicatorStatus,
    /// Optional secondary text displayed below the value.
    pub subtitle: Option<String>,
}

// ---------------------------------------------------------------------------
// API request / response
// ---------------------------------------------------------------------------

/// Batch request: compute several indicators over one filtered view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeIndicatorsRequest {
    pub indicator_ids: Vec<IndicatorId>,
    #[serde(default)]
    pub filter: SalesFilter,
}

/// Batch response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeIndicatorsResponse {
    pub values: Vec<IndicatorValue>,
}

/// Full catalogue returned by the metadata endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorCatalogResponse {
    pub indicators: Vec<IndicatorMeta>,
    pub sets: Vec<IndicatorSetMeta>,
}
