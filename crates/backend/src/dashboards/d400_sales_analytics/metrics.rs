use contracts::dashboards::d400_sales_analytics::SalesKpis;
use contracts::domain::a001_sales_order::aggregate::SalesOrder;

/// Total sales, average profit, average quantity and order count.
///
/// An empty view yields all zeros instead of undefined averages.
pub fn calculate(records: &[&SalesOrder]) -> SalesKpis {
    if records.is_empty() {
        return SalesKpis::default();
    }

    let count = records.len();
    let (total_sales, total_profit, total_quantity) =
        records
            .iter()
            .fold((0.0, 0.0, 0u64), |(sales, profit, quantity), order| {
                (
                    sales + order.sales,
                    profit + order.profit,
                    quantity + u64::from(order.quantity),
                )
            });

    SalesKpis {
        total_sales,
        average_profit: total_profit / count as f64,
        average_quantity: total_quantity as f64 / count as f64,
        total_orders: count,
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{north_north_south, order, sample_dataset};
    use super::*;
    use contracts::enums::Region;

    #[test]
    fn test_empty_is_all_zero() {
        let kpis = calculate(&[]);
        assert_eq!(kpis, SalesKpis::default());
        assert_eq!(kpis.total_sales, 0.0);
        assert_eq!(kpis.average_profit, 0.0);
        assert_eq!(kpis.average_quantity, 0.0);
        assert_eq!(kpis.total_orders, 0);
    }

    #[test]
    fn test_example_totals() {
        let orders = north_north_south();
        let view: Vec<&SalesOrder> = orders.iter().collect();
        let kpis = calculate(&view);
        assert_eq!(kpis.total_sales, 35.0);
        assert_eq!(kpis.total_orders, 3);
    }

    #[test]
    fn test_averages() {
        let mut a = order(Region::East, 10.0);
        a.profit = 4.0;
        a.quantity = 2;
        let mut b = order(Region::West, 30.0);
        b.profit = 8.0;
        b.quantity = 5;
        let kpis = calculate(&[&a, &b]);
        assert_eq!(kpis.total_sales, 40.0);
        assert_eq!(kpis.average_profit, 6.0);
        assert_eq!(kpis.average_quantity, 3.5);
        assert_eq!(kpis.total_orders, 2);
    }

    #[test]
    fn test_order_count_matches_cardinality() {
        let orders = sample_dataset(777);
        let view: Vec<&SalesOrder> = orders.iter().collect();
        let kpis = calculate(&view);
        assert_eq!(kpis.total_orders, 777);
        assert!(kpis.average_quantity >= 1.0 && kpis.average_quantity <= 10.0);
        assert!(kpis.average_profit >= 0.0);
    }
}
