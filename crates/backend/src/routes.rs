use axum::{
    routing::{get, post},
    Router,
};

use crate::api::handlers;
use crate::state::AppState;

/// All application routes
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // D400 SALES ANALYTICS
        // ========================================
        .route(
            "/api/d400/filters",
            get(handlers::d400_sales_analytics::get_filter_options),
        )
        .route(
            "/api/d400/dashboard",
            post(handlers::d400_sales_analytics::get_dashboard),
        )
        .route(
            "/api/d400/records",
            post(handlers::d400_sales_analytics::get_records),
        )
        .route(
            "/api/d400/export/filtered",
            post(handlers::d400_sales_analytics::export_filtered),
        )
        .route(
            "/api/d400/export/full",
            get(handlers::d400_sales_analytics::export_full),
        )
        // ========================================
        // INDICATORS
        // ========================================
        .route(
            "/api/indicators/meta",
            get(handlers::indicators::get_indicator_catalog),
        )
        .route(
            "/api/indicators/compute",
            post(handlers::indicators::compute_indicators),
        )
        .with_state(state)
}
