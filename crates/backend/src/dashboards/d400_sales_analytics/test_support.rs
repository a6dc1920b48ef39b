use chrono::NaiveDate;
use contracts::domain::a001_sales_order::aggregate::{SalesOrder, YearMonth};
use contracts::enums::{Category, CustomerSegment, PaymentMethod, Region, ShippingType};
use uuid::Uuid;

/// Order with neutral defaults; tests override the fields they care about.
pub fn order(region: Region, sales: f64) -> SalesOrder {
    let order_date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    SalesOrder {
        order_id: Uuid::new_v4(),
        order_date,
        customer_id: Uuid::new_v4(),
        customer_name: "Mary Smith".into(),
        region,
        category: Category::Books,
        sub_category: "Fiction".into(),
        sales,
        quantity: 1,
        discount: 0.0,
        profit: 0.0,
        payment_method: PaymentMethod::CreditCard,
        customer_segment: CustomerSegment::Consumer,
        shipping_type: ShippingType::StandardClass,
        product_id: Uuid::new_v4(),
        product_name: "Nova Ridge".into(),
        year_month: YearMonth::from_date(order_date),
    }
}

pub fn dated(mut order: SalesOrder, year: i32, month: u32, day: u32) -> SalesOrder {
    order.order_date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
    order.year_month = YearMonth::from_date(order.order_date);
    order
}

/// The three-order example: regions North, North, South with sales 10, 20, 5
pub fn north_north_south() -> Vec<SalesOrder> {
    vec![
        order(Region::North, 10.0),
        order(Region::North, 20.0),
        order(Region::South, 5.0),
    ]
}

/// A varied, reproducible dataset for property checks
pub fn sample_dataset(rows: usize) -> Vec<SalesOrder> {
    let config = crate::shared::config::DatasetConfig {
        seed: 42,
        row_count: rows,
        window_days: 365,
        anchor_date: None,
    };
    let end = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
    crate::domain::a001_sales_order::generator::generate(&config, end).unwrap()
}
