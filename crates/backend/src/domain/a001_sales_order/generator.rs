//! Synthetic order generator.
//!
//! Every field is sampled independently from a seeded [`StdRng`], record by
//! record, so the same seed, row count and end date always produce the same
//! dataset.

use chrono::{Duration, NaiveDate};
use contracts::domain::a001_sales_order::aggregate::{
    SalesOrder, YearMonth, DISCOUNT_LEVELS, QUANTITY_MAX, QUANTITY_MIN,
};
use contracts::enums::{
    Category, CustomerSegment, Dimension, PaymentMethod, Region, ShippingType,
};
use rand::prelude::*;
use rand_distr::{Exp, Normal};
use uuid::Uuid;

use crate::shared::config::DatasetConfig;

/// Mean order amount
const SALES_MEAN: f64 = 100.0;
/// Profit before clamping ~ N(PROFIT_MEAN, PROFIT_STD_DEV)
const PROFIT_MEAN: f64 = 10.0;
const PROFIT_STD_DEV: f64 = 20.0;

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Wilson", "Anderson", "Thomas", "Taylor", "Moore", "Jackson",
    "Martin", "Lee",
];

const PRODUCT_WORDS: &[&str] = &[
    "alpha", "breeze", "cedar", "delta", "ember", "forge", "glide", "harbor", "iris", "jet",
    "kite", "lumen", "maple", "nova", "orbit", "pixel", "quartz", "ridge", "summit", "tide",
    "ultra", "vista", "willow", "zen",
];

pub struct OrderGenerator {
    rng: StdRng,
    sales_dist: Exp<f64>,
    profit_dist: Normal<f64>,
    start_date: NaiveDate,
    window_days: i64,
}

impl OrderGenerator {
    pub fn new(config: &DatasetConfig, end_date: NaiveDate) -> anyhow::Result<Self> {
        config.validate()?;

        let sales_dist = Exp::new(1.0 / SALES_MEAN)
            .map_err(|e| anyhow::anyhow!("invalid sales distribution: {e}"))?;
        let profit_dist = Normal::new(PROFIT_MEAN, PROFIT_STD_DEV)
            .map_err(|e| anyhow::anyhow!("invalid profit distribution: {e}"))?;
        let start_date = end_date
            .checked_sub_signed(Duration::days(config.window_days))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "window of {} days before {} is out of range",
                    config.window_days,
                    end_date
                )
            })?;

        Ok(Self {
            rng: StdRng::seed_from_u64(config.seed),
            sales_dist,
            profit_dist,
            start_date,
            window_days: config.window_days,
        })
    }

    pub fn generate_batch(&mut self, count: usize) -> Vec<SalesOrder> {
        (0..count).map(|_| self.next_order()).collect()
    }

    pub fn next_order(&mut self) -> SalesOrder {
        let order_id = self.next_uuid();
        let order_date = self.next_date();
        let customer_id = self.next_uuid();
        let customer_name = format!(
            "{} {}",
            pick(&mut self.rng, FIRST_NAMES),
            pick(&mut self.rng, LAST_NAMES)
        );
        let region = pick(&mut self.rng, Region::VALUES);
        let category = pick(&mut self.rng, Category::VALUES);
        let sub_category = pick(&mut self.rng, category.sub_categories()).to_string();
        let sales = round2(self.sales_dist.sample(&mut self.rng));
        let quantity = self.rng.gen_range(QUANTITY_MIN..=QUANTITY_MAX);
        let discount = pick(&mut self.rng, &DISCOUNT_LEVELS[..]);
        let profit = clamp_profit(round2(self.profit_dist.sample(&mut self.rng)));
        let payment_method = pick(&mut self.rng, PaymentMethod::VALUES);
        let customer_segment = pick(&mut self.rng, CustomerSegment::VALUES);
        let shipping_type = pick(&mut self.rng, ShippingType::VALUES);
        let product_id = self.next_uuid();
        let product_name = format!(
            "{} {}",
            capitalize(pick(&mut self.rng, PRODUCT_WORDS)),
            capitalize(pick(&mut self.rng, PRODUCT_WORDS))
        );

        SalesOrder {
            order_id,
            order_date,
            customer_id,
            customer_name,
            region,
            category,
            sub_category,
            sales,
            quantity,
            discount,
            profit,
            payment_method,
            customer_segment,
            shipping_type,
            product_id,
            product_name,
            year_month: YearMonth::from_date(order_date),
        }
    }

    /// Random (version 4 layout) UUID drawn from the seeded generator
    fn next_uuid(&mut self) -> Uuid {
        uuid::Builder::from_random_bytes(self.rng.gen()).into_uuid()
    }

    fn next_date(&mut self) -> NaiveDate {
        let offset = self.rng.gen_range(0..=self.window_days);
        self.start_date + Duration::days(offset)
    }
}

/// Generate `config.row_count` orders dated up to `end_date`.
pub fn generate(config: &DatasetConfig, end_date: NaiveDate) -> anyhow::Result<Vec<SalesOrder>> {
    let mut generator = OrderGenerator::new(config, end_date)?;
    Ok(generator.generate_batch(config.row_count))
}

fn pick<T: Copy, R: Rng>(rng: &mut R, items: &[T]) -> T {
    items[rng.gen_range(0..items.len())]
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Negative draws (and a negative zero after rounding) become 0
fn clamp_profit(value: f64) -> f64 {
    if value <= 0.0 {
        0.0
    } else {
        value
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
