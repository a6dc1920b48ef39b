//! Series behind the dashboard charts.
//!
//! Every function is a pure function of the view it gets. Groups without rows
//! are left out, except in [`segment_shipping_counts`] which always returns
//! the full segment x shipping type grid. Groups are accumulated in
//! enumeration order, so descending sorts keep that order for ties.

use contracts::dashboards::d400_sales_analytics::{
    BoxSummary, ChartSeries, Distribution, GroupCount, GroupTotal, HistogramBin, MonthlySales,
    ScatterPoint, SegmentShippingRow, ShippingCount,
};
use contracts::domain::a001_sales_order::aggregate::SalesOrder;
use contracts::enums::{
    Category, CustomerSegment, Dimension, PaymentMethod, Region, ShippingType,
};
use std::collections::{BTreeMap, HashMap};

/// Number of bins of the quantity histogram
pub const QUANTITY_BINS: usize = 10;

/// Whisker reach in interquartile ranges
const WHISKER_IQR: f64 = 1.5;

/// Build all ten series for one view
pub fn build(records: &[&SalesOrder]) -> ChartSeries {
    ChartSeries {
        monthly_sales: monthly_sales(records),
        sales_by_region: sales_by_region(records),
        profit_by_category: profit_by_category(records),
        quantity_histogram: quantity_histogram(records),
        sales_vs_profit: sales_vs_profit(records),
        profit_by_segment: profit_by_segment(records),
        orders_by_payment_method: orders_by_payment_method(records),
        segment_shipping_counts: segment_shipping_counts(records),
        avg_profit_by_shipping: avg_profit_by_shipping(records),
        sales_by_category: sales_by_category(records),
    }
}

/// Sales per month, oldest first
pub fn monthly_sales(records: &[&SalesOrder]) -> Vec<MonthlySales> {
    sum_by(records, |o| o.year_month, |o| o.sales)
        .into_iter()
        .map(|(period, sales)| MonthlySales { period, sales })
        .collect()
}

/// Sales per region, largest first
pub fn sales_by_region(records: &[&SalesOrder]) -> Vec<GroupTotal<Region>> {
    descending(sum_by(records, |o| o.region, |o| o.sales))
}

pub fn profit_by_category(records: &[&SalesOrder]) -> Vec<Distribution<Category>> {
    distribution_by(records, |o| o.category, |o| o.profit)
}

/// Probability-density histogram of quantities over [`QUANTITY_BINS`]
/// equal-width bins spanning the observed range.
pub fn quantity_histogram(records: &[&SalesOrder]) -> Vec<HistogramBin> {
    let values: Vec<f64> = records.iter().map(|o| f64::from(o.quantity)).collect();
    histogram(&values, QUANTITY_BINS)
}

/// One point per order, in view order
pub fn sales_vs_profit(records: &[&SalesOrder]) -> Vec<ScatterPoint> {
    records
        .iter()
        .map(|o| ScatterPoint {
            sales: o.sales,
            profit: o.profit,
        })
        .collect()
}

/// Profit per customer segment, largest first
pub fn profit_by_segment(records: &[&SalesOrder]) -> Vec<GroupTotal<CustomerSegment>> {
    descending(sum_by(records, |o| o.customer_segment, |o| o.profit))
}

/// Order count and share per payment method, most frequent first
pub fn orders_by_payment_method(records: &[&SalesOrder]) -> Vec<GroupCount<PaymentMethod>> {
    let mut counts: BTreeMap<PaymentMethod, usize> = BTreeMap::new();
    for order in records {
        *counts.entry(order.payment_method).or_insert(0) += 1;
    }

    let total = records.len() as f64;
    let mut rows: Vec<GroupCount<PaymentMethod>> = counts
        .into_iter()
        .map(|(key, count)| GroupCount {
            key,
            count,
            share: count as f64 / total,
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}

/// Order count for every segment x shipping type pair, zero-filled
pub fn segment_shipping_counts(records: &[&SalesOrder]) -> Vec<SegmentShippingRow> {
    let mut counts: HashMap<(CustomerSegment, ShippingType), usize> = HashMap::new();
    for order in records {
        *counts
            .entry((order.customer_segment, order.shipping_type))
            .or_insert(0) += 1;
    }

    CustomerSegment::VALUES
        .iter()
        .map(|&segment| {
            let cells: Vec<ShippingCount> = ShippingType::VALUES
                .iter()
                .map(|&shipping_type| ShippingCount {
                    shipping_type,
                    count: counts.get(&(segment, shipping_type)).copied().unwrap_or(0),
                })
                .collect();
            let total = cells.iter().map(|c| c.count).sum();
            SegmentShippingRow {
                segment,
                counts: cells,
                total,
            }
        })
        .collect()
}

/// Mean profit per shipping type, largest first
pub fn avg_profit_by_shipping(records: &[&SalesOrder]) -> Vec<GroupTotal<ShippingType>> {
    let mut acc: BTreeMap<ShippingType, (f64, usize)> = BTreeMap::new();
    for order in records {
        let entry = acc.entry(order.shipping_type).or_insert((0.0, 0));
        entry.0 += order.profit;
        entry.1 += 1;
    }

    let means: BTreeMap<ShippingType, f64> = acc
        .into_iter()
        .map(|(key, (sum, count))| (key, sum / count as f64))
        .collect();
    descending(means)
}

pub fn sales_by_category(records: &[&SalesOrder]) -> Vec<Distribution<Category>> {
    distribution_by(records, |o| o.category, |o| o.sales)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn sum_by<K, FK, FV>(records: &[&SalesOrder], key: FK, value: FV) -> BTreeMap<K, f64>
where
    K: Ord,
    FK: Fn(&SalesOrder) -> K,
    FV: Fn(&SalesOrder) -> f64,
{
    let mut totals = BTreeMap::new();
    for &order in records {
        *totals.entry(key(order)).or_insert(0.0) += value(order);
    }
    totals
}

/// Stable sort by value, largest first
fn descending<K>(totals: BTreeMap<K, f64>) -> Vec<GroupTotal<K>> {
    let mut rows: Vec<GroupTotal<K>> = totals
        .into_iter()
        .map(|(key, value)| GroupTotal { key, value })
        .collect();
    rows.sort_by(|a, b| b.value.total_cmp(&a.value));
    rows
}

fn distribution_by<K, FK, FV>(records: &[&SalesOrder], key: FK, value: FV) -> Vec<Distribution<K>>
where
    K: Ord,
    FK: Fn(&SalesOrder) -> K,
    FV: Fn(&SalesOrder) -> f64,
{
    let mut groups: BTreeMap<K, Vec<f64>> = BTreeMap::new();
    for &order in records {
        groups.entry(key(order)).or_default().push(value(order));
    }

    groups
        .into_iter()
        .filter_map(|(key, values)| {
            let summary = box_summary(&values)?;
            Some(Distribution {
                key,
                values,
                summary,
            })
        })
        .collect()
}

/// Quartiles use linear interpolation between closest ranks. Whiskers reach
/// the furthest values within 1.5 IQR of the quartiles; values beyond them
/// are outliers, reported in input order. `None` for an empty slice.
pub fn box_summary(values: &[f64]) -> Option<BoxSummary> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let q1 = quantile(&sorted, 0.25);
    let median = quantile(&sorted, 0.5);
    let q3 = quantile(&sorted, 0.75);
    let iqr = q3 - q1;
    let lower_fence = q1 - WHISKER_IQR * iqr;
    let upper_fence = q3 + WHISKER_IQR * iqr;

    let within: Vec<f64> = sorted
        .iter()
        .copied()
        .filter(|v| *v >= lower_fence && *v <= upper_fence)
        .collect();
    let lower_whisker = within.first().copied().unwrap_or(q1);
    let upper_whisker = within.last().copied().unwrap_or(q3);

    let outliers = values
        .iter()
        .copied()
        .filter(|v| *v < lower_fence || *v > upper_fence)
        .collect();

    Some(BoxSummary {
        min: sorted[0],
        q1,
        median,
        q3,
        max: sorted[sorted.len() - 1],
        lower_whisker,
        upper_whisker,
        outliers,
    })
}

/// `q`-quantile of a sorted, non-empty slice
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

/// Equal-width bins over `[min, max]`, last bin closed on the right. A single
/// distinct value gets a unit-wide range centred on it.
fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return vec![];
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let (start, end) = if max > min {
        (min, max)
    } else {
        (min - 0.5, max + 0.5)
    };
    let width = (end - start) / bins as f64;

    let mut counts = vec![0usize; bins];
    for v in values {
        let idx = (((v - start) / width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }

    let n = values.len() as f64;
    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: start + i as f64 * width,
            end: start + (i + 1) as f64 * width,
            count,
            density: count as f64 / (n * width),
        })
        .collect()
}
