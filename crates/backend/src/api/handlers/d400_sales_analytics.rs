use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use contracts::dashboards::d400_sales_analytics::{
    DashboardResponse, FilterOptions, RecordsRequest, RecordsResponse, SalesFilter,
};

use crate::dashboards::d400_sales_analytics::export::CSV_CONTENT_TYPE;
use crate::dashboards::d400_sales_analytics::filter;
use crate::dashboards::d400_sales_analytics::service::{self, CsvFile};
use crate::state::AppState;

/// GET /api/d400/filters
pub async fn get_filter_options() -> Json<FilterOptions> {
    Json(filter::filter_options())
}

/// POST /api/d400/dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
    Json(filter): Json<SalesFilter>,
) -> Json<DashboardResponse> {
    tracing::info!("D400 Dashboard: computing dashboard for {:?}", filter);

    let response = service::get_dashboard(&state.dataset, &filter);

    tracing::info!(
        "D400 Dashboard: {} of {} orders selected",
        response.filtered_orders,
        response.total_orders
    );
    if response.notice.is_some() {
        tracing::warn!("D400 Dashboard: filter matches no orders");
    }
    Json(response)
}

/// POST /api/d400/records
pub async fn get_records(
    State(state): State<AppState>,
    Json(request): Json<RecordsRequest>,
) -> Json<RecordsResponse> {
    let response = service::get_records(&state.dataset, &request);
    tracing::info!(
        "D400 Dashboard: returning {} of {} raw rows",
        response.records.len(),
        response.total
    );
    Json(response)
}

/// POST /api/d400/export/filtered
///
/// 204 when the filter matches nothing.
pub async fn export_filtered(
    State(state): State<AppState>,
    Json(filter): Json<SalesFilter>,
) -> Result<Response, StatusCode> {
    match service::export_filtered(&state.dataset, &filter) {
        Ok(Some(file)) => Ok(csv_response(file)),
        Ok(None) => {
            tracing::info!("D400 Dashboard: nothing to export for {:?}", filter);
            Ok(StatusCode::NO_CONTENT.into_response())
        }
        Err(e) => {
            tracing::error!("D400 Dashboard: Failed to export filtered orders: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/d400/export/full
pub async fn export_full(State(state): State<AppState>) -> Result<Response, StatusCode> {
    match service::export_full(&state.dataset) {
        Ok(file) => Ok(csv_response(file)),
        Err(e) => {
            tracing::error!("D400 Dashboard: Failed to export full dataset: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

fn csv_response(file: CsvFile) -> Response {
    tracing::info!(
        "D400 Dashboard: exporting {} rows as {}",
        file.rows,
        file.filename
    );
    let disposition = format!("attachment; filename=\"{}\"", file.filename);
    (
        [
            (header::CONTENT_TYPE, CSV_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        file.content,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_sales_analytics::test_support::north_north_south;
    use crate::domain::a001_sales_order::repository::Dataset;

    fn state() -> AppState {
        AppState::new(Dataset::from_records(north_north_south()))
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_dashboard_handler() {
        let filter = SalesFilter {
            region: vec!["South".into()],
            ..SalesFilter::default()
        };
        let Json(response) = get_dashboard(State(state()), Json(filter)).await;
        assert_eq!(response.kpis.total_sales, 5.0);
        assert_eq!(response.total_orders, 3);
    }

    #[tokio::test]
    async fn test_filter_options_handler() {
        let Json(options) = get_filter_options().await;
        assert_eq!(options.region[0], "All");
    }

    #[tokio::test]
    async fn test_export_full_headers() {
        let response = export_full(State(state())).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/csv; charset=utf-8"
        );
        let disposition = response.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.starts_with("attachment; filename=\"sales_data_full_"));
        assert_eq!(body_text(response).await.lines().count(), 4);
    }

    #[tokio::test]
    async fn test_export_filtered_without_matches() {
        let filter = SalesFilter {
            payment_method: vec!["PayPal".into()],
            ..SalesFilter::default()
        };
        let response = export_filtered(State(state()), Json(filter)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_records_handler() {
        let Json(response) = get_records(State(state()), Json(RecordsRequest::default())).await;
        assert_eq!(response.total, 3);
        assert_eq!(response.records.len(), 3);
    }
}
