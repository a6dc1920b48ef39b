use chrono::Local;
use contracts::dashboards::d400_sales_analytics::{
    DashboardResponse, DatasetInfo, RecordsRequest, RecordsResponse, SalesFilter,
};
use contracts::domain::a001_sales_order::aggregate::SalesOrder;
use contracts::shared::indicators::{ComputeIndicatorsRequest, ComputeIndicatorsResponse};

use super::export::{self, ExportError, ExportKind};
use super::filter::{self, OrderSelection};
use super::{aggregation, metrics};
use crate::domain::a001_sales_order::repository::Dataset;
use crate::shared::format::{bytes_to_mb, format_number};
use crate::shared::indicators::metadata::ids;
use crate::shared::indicators::registry::IndicatorRegistry;

pub const NO_DATA_NOTICE: &str = "No data available with current filters.";
pub const NO_RECORDS_NOTICE: &str = "No data to display with current filters.";

/// A CSV document ready to be downloaded
#[derive(Debug)]
pub struct CsvFile {
    pub filename: String,
    pub content: Vec<u8>,
    pub rows: usize,
}

/// Orders of the dataset matching the filter
pub fn filtered_view<'a>(dataset: &'a Dataset, filter: &SalesFilter) -> Vec<&'a SalesOrder> {
    let selection = OrderSelection::from(filter);
    filter::apply(dataset.records(), &selection)
}

/// Everything one dashboard render needs: KPIs, cards, ten series, info
pub fn get_dashboard(dataset: &Dataset, filter: &SalesFilter) -> DashboardResponse {
    let view = filtered_view(dataset, filter);

    let kpis = metrics::calculate(&view);
    let kpi_cards = IndicatorRegistry::new().compute(&ids::dashboard_set(), &kpis);
    let charts = aggregation::build(&view);
    let notice = view.is_empty().then(|| NO_DATA_NOTICE.to_string());

    DashboardResponse {
        headline: headline(view.len(), dataset.len()),
        filtered_orders: view.len(),
        total_orders: dataset.len(),
        kpis,
        kpi_cards,
        charts,
        info: dataset_info(&view),
        notice,
        generated_at: dataset.generated_at(),
    }
}

/// Raw rows for the data preview
pub fn get_records(dataset: &Dataset, request: &RecordsRequest) -> RecordsResponse {
    let view = filtered_view(dataset, &request.filter);
    let total = view.len();
    let limit = request.limit.unwrap_or(total);

    RecordsResponse {
        total,
        records: view.into_iter().take(limit).cloned().collect(),
        notice: (total == 0).then(|| NO_RECORDS_NOTICE.to_string()),
    }
}

pub fn compute_indicators(
    dataset: &Dataset,
    request: &ComputeIndicatorsRequest,
) -> ComputeIndicatorsResponse {
    let view = filtered_view(dataset, &request.filter);
    let kpis = metrics::calculate(&view);
    let values = IndicatorRegistry::new().compute(&request.indicator_ids, &kpis);
    ComputeIndicatorsResponse { values }
}

/// CSV of the filtered view. `None` when nothing matches.
pub fn export_filtered(
    dataset: &Dataset,
    filter: &SalesFilter,
) -> Result<Option<CsvFile>, ExportError> {
    let view = filtered_view(dataset, filter);
    if view.is_empty() {
        return Ok(None);
    }

    let content = export::to_csv_bytes(view.iter().copied())?;
    Ok(Some(CsvFile {
        filename: export::export_filename(ExportKind::Filtered, &Local::now()),
        content,
        rows: view.len(),
    }))
}

/// CSV of the whole dataset
pub fn export_full(dataset: &Dataset) -> Result<CsvFile, ExportError> {
    let content = export::to_csv_bytes(dataset.records())?;
    Ok(CsvFile {
        filename: export::export_filename(ExportKind::Full, &Local::now()),
        content,
        rows: dataset.len(),
    })
}

pub fn headline(filtered: usize, total: usize) -> String {
    format!(
        "Showing {} orders out of {} total orders",
        format_number(filtered),
        format_number(total)
    )
}

pub fn dataset_info(records: &[&SalesOrder]) -> DatasetInfo {
    DatasetInfo {
        total_records: records.len(),
        total_columns: SalesOrder::COLUMNS.len(),
        memory_mb: bytes_to_mb(estimate_memory_bytes(records)),
    }
}

/// Inline size of every record plus the heap bytes of its strings
fn estimate_memory_bytes(records: &[&SalesOrder]) -> usize {
    records
        .iter()
        .map(|o| {
            std::mem::size_of::<SalesOrder>()
                + o.customer_name.capacity()
                + o.sub_category.capacity()
                + o.product_name.capacity()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{north_north_south, sample_dataset};
    use super::*;
    use contracts::shared::indicators::IndicatorId;

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn south_only() -> SalesFilter {
        SalesFilter {
            region: labels(&["South"]),
            ..SalesFilter::default()
        }
    }

    #[test]
    fn test_dashboard_for_example() {
        let dataset = Dataset::from_records(north_north_south());
        let response = get_dashboard(&dataset, &SalesFilter::default());

        assert_eq!(response.kpis.total_sales, 35.0);
        assert_eq!(response.filtered_orders, 3);
        assert_eq!(response.headline, "Showing 3 orders out of 3 total orders");
        assert_eq!(response.kpi_cards.len(), 4);
        assert_eq!(response.kpi_cards[0].display, "$35.00");
        assert_eq!(response.charts.sales_by_region.len(), 2);
        assert_eq!(response.info.total_columns, 17);
        assert!(response.notice.is_none());
    }

    #[test]
    fn test_dashboard_filtered_to_south() {
        let dataset = Dataset::from_records(north_north_south());
        let response = get_dashboard(&dataset, &south_only());
        assert_eq!(response.filtered_orders, 1);
        assert_eq!(response.kpis.total_sales, 5.0);
        assert_eq!(response.info.total_records, 1);
    }

    #[test]
    fn test_dashboard_without_matches() {
        let dataset = Dataset::from_records(north_north_south());
        let filter = SalesFilter {
            region: labels(&["West"]),
            ..SalesFilter::default()
        };
        let response = get_dashboard(&dataset, &filter);

        assert_eq!(response.filtered_orders, 0);
        assert_eq!(response.kpis.total_orders, 0);
        assert_eq!(response.kpis.average_profit, 0.0);
        assert_eq!(response.notice.as_deref(), Some(NO_DATA_NOTICE));
        assert!(response.charts.monthly_sales.is_empty());
        assert_eq!(response.charts.segment_shipping_counts.len(), 3);
        assert_eq!(response.info.memory_mb, 0.0);
    }

    #[test]
    fn test_records_limit() {
        let dataset = Dataset::from_records(sample_dataset(50));
        let response = get_records(
            &dataset,
            &RecordsRequest {
                filter: SalesFilter::default(),
                limit: Some(10),
            },
        );
        assert_eq!(response.total, 50);
        assert_eq!(response.records.len(), 10);
        assert_eq!(response.records[0], dataset.records()[0]);
        assert!(response.notice.is_none());
    }

    #[test]
    fn test_records_empty_notice() {
        let dataset = Dataset::from_records(north_north_south());
        let request = RecordsRequest {
            filter: SalesFilter {
                region: labels(&["East"]),
                ..SalesFilter::default()
            },
            limit: None,
        };
        let response = get_records(&dataset, &request);
        assert_eq!(response.total, 0);
        assert_eq!(response.notice.as_deref(), Some(NO_RECORDS_NOTICE));
    }

    #[test]
    fn test_compute_indicators_for_filter() {
        let dataset = Dataset::from_records(north_north_south());
        let response = compute_indicators(
            &dataset,
            &ComputeIndicatorsRequest {
                indicator_ids: vec![IndicatorId::new("total_sales")],
                filter: south_only(),
            },
        );
        assert_eq!(response.values.len(), 1);
        assert_eq!(response.values[0].value, 5.0);
    }

    #[test]
    fn test_exports() {
        let dataset = Dataset::from_records(north_north_south());

        let filtered = export_filtered(&dataset, &south_only()).unwrap().unwrap();
        assert_eq!(filtered.rows, 1);
        assert!(filtered.filename.starts_with("sales_data_filtered_"));
        assert_eq!(String::from_utf8(filtered.content).unwrap().lines().count(), 2);

        let full = export_full(&dataset).unwrap();
        assert_eq!(full.rows, 3);
        assert!(full.filename.starts_with("sales_data_full_"));

        let nothing = SalesFilter {
            category: labels(&["Toys"]),
            ..SalesFilter::default()
        };
        assert!(export_filtered(&dataset, &nothing).unwrap().is_none());
    }

    #[test]
    fn test_dataset_info_memory_grows_with_rows() {
        let orders = sample_dataset(5000);
        let all: Vec<&SalesOrder> = orders.iter().collect();
        let info = dataset_info(&all);
        let half = dataset_info(&all[..2500]);
        assert_eq!(info.total_records, 5000);
        assert!(info.memory_mb > 0.0);
        assert!(half.memory_mb < info.memory_mb);
    }

    #[test]
    fn test_headline_separators() {
        assert_eq!(
            headline(1234, 10000),
            "Showing 1,234 orders out of 10,000 total orders"
        );
    }
}
