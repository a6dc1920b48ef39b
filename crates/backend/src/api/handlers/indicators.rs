use axum::{extract::State, Json};
use contracts::shared::indicators::*;

use crate::dashboards::d400_sales_analytics::service;
use crate::shared::indicators::metadata;
use crate::state::AppState;

/// POST /api/indicators/compute
///
/// Batch-computes a set of indicators over the filtered orders.
pub async fn compute_indicators(
    State(state): State<AppState>,
    Json(req): Json<ComputeIndicatorsRequest>,
) -> Json<ComputeIndicatorsResponse> {
    tracing::info!("Indicators: computing {} indicators", req.indicator_ids.len());

    let response = service::compute_indicators(&state.dataset, &req);

    tracing::info!("Indicators: returning {} values", response.values.len());
    Json(response)
}

/// GET /api/indicators/meta
///
/// Returns the full catalogue of available indicators and sets.
pub async fn get_indicator_catalog() -> Json<IndicatorCatalogResponse> {
    Json(metadata::build_catalog())
}
