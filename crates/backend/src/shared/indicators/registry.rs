use contracts::dashboards::d400_sales_analytics::SalesKpis;
use contracts::shared::indicators::*;
use std::collections::HashMap;

use super::compute::sales;
use super::metadata::{self, ids};
use crate::shared::format::{format_decimal, format_money, format_number};

type ComputeFn = fn(&SalesKpis) -> f64;

/// Central registry: maps `IndicatorId` to its compute function and metadata.
pub struct IndicatorRegistry {
    fns: HashMap<String, (ComputeFn, IndicatorMeta)>,
}

impl Default for IndicatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl IndicatorRegistry {
    pub fn new() -> Self {
        let entries: [(IndicatorId, ComputeFn); 4] = [
            (ids::total_sales(), sales::compute_total_sales),
            (ids::average_profit(), sales::compute_average_profit),
            (ids::average_quantity(), sales::compute_average_quantity),
            (ids::total_orders(), sales::compute_total_orders),
        ];

        let mut fns = HashMap::new();
        for (id, compute_fn) in entries {
            match metadata::find(&id) {
                Some(meta) => {
                    fns.insert(id.0, (compute_fn, meta));
                }
                None => tracing::warn!("indicator {} has no catalogue entry", id.0),
            }
        }

        Self { fns }
    }

    /// Evaluate the requested indicators against precomputed KPIs.
    /// Unknown ids are skipped.
    pub fn compute(&self, ids: &[IndicatorId], kpis: &SalesKpis) -> Vec<IndicatorValue> {
        let mut results = Vec::with_capacity(ids.len());

        for id in ids {
            if let Some((compute_fn, meta)) = self.fns.get(&id.0) {
                let value = compute_fn(kpis);
                let (status, subtitle) = if kpis.total_orders == 0 {
                    (IndicatorStatus::Warning, Some("No data".to_string()))
                } else {
                    (IndicatorStatus::Neutral, None)
                };
                results.push(IndicatorValue {
                    id: id.clone(),
                    label: meta.label.clone(),
                    value,
                    display: format_value(value, &meta.format),
                    status,
                    subtitle,
                });
            } else {
                tracing::warn!("indicator {} not found in registry", id.0);
            }
        }

        results
    }
}

pub fn format_value(value: f64, format: &ValueFormat) -> String {
    match format {
        ValueFormat::Money { currency } => format_money(value, currency),
        ValueFormat::Number { decimals } => format_decimal(value, *decimals),
        ValueFormat::Integer => format_number(value.max(0.0).round() as usize),
    }
}
