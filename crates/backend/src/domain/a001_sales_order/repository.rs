use chrono::{DateTime, Utc};
use contracts::domain::a001_sales_order::aggregate::SalesOrder;

use super::generator;
use crate::shared::config::DatasetConfig;

/// The full order set, generated once at startup and never modified.
///
/// Shared between requests behind an `Arc`; every consumer only borrows it.
#[derive(Debug)]
pub struct Dataset {
    records: Vec<SalesOrder>,
    generated_at: DateTime<Utc>,
}

impl Dataset {
    /// Generate the synthetic dataset described by `config`
    pub fn generate(config: &DatasetConfig) -> anyhow::Result<Self> {
        let end_date = config.end_date();
        let records = generator::generate(config, end_date)?;
        tracing::info!(
            "Generated {} orders (seed {}, {} days up to {})",
            records.len(),
            config.seed,
            config.window_days,
            end_date
        );
        Ok(Self::from_records(records))
    }

    pub fn from_records(records: Vec<SalesOrder>) -> Self {
        Self {
            records,
            generated_at: Utc::now(),
        }
    }

    pub fn records(&self) -> &[SalesOrder] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_generate_from_config() {
        let config = DatasetConfig {
            seed: 1,
            row_count: 25,
            window_days: 30,
            anchor_date: NaiveDate::from_ymd_opt(2024, 12, 31),
        };
        let dataset = Dataset::generate(&config).unwrap();
        assert_eq!(dataset.len(), 25);
        assert!(!dataset.is_empty());
        assert!(dataset.generated_at() <= Utc::now());
    }
}
