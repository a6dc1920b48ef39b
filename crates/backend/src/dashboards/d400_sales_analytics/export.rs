//! CSV export of order views

use chrono::{DateTime, TimeZone};
use contracts::domain::a001_sales_order::aggregate::SalesOrder;
use contracts::enums::Dimension;
use std::io::Write;
use thiserror::Error;

pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Types that can be written as CSV rows
pub trait CsvExportable {
    /// Column headers, in row order
    fn headers() -> Vec<&'static str>;

    fn to_csv_row(&self) -> Vec<String>;
}

impl CsvExportable for SalesOrder {
    fn headers() -> Vec<&'static str> {
        SalesOrder::COLUMNS.to_vec()
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.order_id.to_string(),
            self.order_date.format("%Y-%m-%d").to_string(),
            self.customer_id.to_string(),
            self.customer_name.clone(),
            self.region.label().to_string(),
            self.category.label().to_string(),
            self.sub_category.clone(),
            self.sales.to_string(),
            self.quantity.to_string(),
            format!("{:.1}", self.discount),
            self.profit.to_string(),
            self.payment_method.label().to_string(),
            self.customer_segment.label().to_string(),
            self.shipping_type.label().to_string(),
            self.product_id.to_string(),
            self.product_name.clone(),
            self.year_month.to_string(),
        ]
    }
}

/// Which dataset an export contains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Filtered,
    Full,
}

impl ExportKind {
    fn file_prefix(&self) -> &'static str {
        match self {
            ExportKind::Filtered => "sales_data_filtered",
            ExportKind::Full => "sales_data_full",
        }
    }
}

/// `sales_data_<kind>_YYYYMMDD_HHMMSS.csv`
pub fn export_filename<Tz: TimeZone>(kind: ExportKind, at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{}_{}.csv", kind.file_prefix(), at.format("%Y%m%d_%H%M%S"))
}

/// Writes a header row followed by one row per record. Returns the number of
/// data rows written.
pub fn write_csv<'a, T, I, W>(records: I, writer: W) -> Result<usize, ExportError>
where
    T: CsvExportable + 'a,
    I: IntoIterator<Item = &'a T>,
    W: Write,
{
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(T::headers())?;

    let mut rows = 0;
    for record in records {
        wtr.write_record(record.to_csv_row())?;
        rows += 1;
    }
    wtr.flush()?;
    Ok(rows)
}

pub fn to_csv_bytes<'a, T, I>(records: I) -> Result<Vec<u8>, ExportError>
where
    T: CsvExportable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut buf = Vec::new();
    write_csv(records, &mut buf)?;
    Ok(buf)
}
