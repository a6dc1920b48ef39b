use contracts::dashboards::d400_sales_analytics::SalesKpis;

// ---------------------------------------------------------------------------
// Public compute functions
// ---------------------------------------------------------------------------

pub fn compute_total_sales(kpis: &SalesKpis) -> f64 {
    kpis.total_sales
}

pub fn compute_average_profit(kpis: &SalesKpis) -> f64 {
    kpis.average_profit
}

pub fn compute_average_quantity(kpis: &SalesKpis) -> f64 {
    kpis.average_quantity
}

pub fn compute_total_orders(kpis: &SalesKpis) -> f64 {
    kpis.total_orders as f64
}
