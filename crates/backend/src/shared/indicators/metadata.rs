use contracts::shared::indicators::*;

/// Well-known indicator IDs (constants to avoid typos).
pub mod ids {
    use super::*;

    pub fn total_sales() -> IndicatorId {
        IndicatorId::new("total_sales")
    }
    pub fn average_profit() -> IndicatorId {
        IndicatorId::new("average_profit")
    }
    pub fn average_quantity() -> IndicatorId {
        IndicatorId::new("average_quantity")
    }
    pub fn total_orders() -> IndicatorId {
        IndicatorId::new("total_orders")
    }

    /// KPI cards of the dashboard, in display order
    pub fn dashboard_set() -> Vec<IndicatorId> {
        vec![total_sales(), average_profit(), average_quantity(), total_orders()]
    }
}

pub const CURRENCY: &str = "$";

/// Build the full catalogue of indicators + sets.
pub fn build_catalog() -> IndicatorCatalogResponse {
    let indicators = vec![
        IndicatorMeta {
            id: ids::total_sales(),
            label: "Total Sales".into(),
            short_label: None,
            icon: "dollar-sign".into(),
            format: ValueFormat::Money {
                currency: CURRENCY.into(),
            },
            description: Some("Sum of order amounts in the filtered view".into()),
        },
        IndicatorMeta {
            id: ids::average_profit(),
            label: "Avg Profit".into(),
            short_label: None,
            icon: "chart".into(),
            format: ValueFormat::Money {
                currency: CURRENCY.into(),
            },
            description: Some("Mean profit per order".into()),
        },
        IndicatorMeta {
            id: ids::average_quantity(),
            label: "Avg Quantity".into(),
            short_label: Some("Avg Qty".into()),
            icon: "package".into(),
            format: ValueFormat::Number { decimals: 2 },
            description: Some("Mean number of items per order".into()),
        },
        IndicatorMeta {
            id: ids::total_orders(),
            label: "Total Orders".into(),
            short_label: None,
            icon: "orders".into(),
            format: ValueFormat::Integer,
            description: Some("Number of orders in the filtered view".into()),
        },
    ];

    let sets = vec![IndicatorSetMeta {
        id: IndicatorSetId::new("sales_overview"),
        label: "Key Performance Indicators".into(),
        indicators: ids::dashboard_set(),
        columns: 4,
    }];

    IndicatorCatalogResponse { indicators, sets }
}

/// Metadata of a single indicator
pub fn find(id: &IndicatorId) -> Option<IndicatorMeta> {
    build_catalog().indicators.into_iter().find(|m| &m.id == id)
}
