pub mod api;
pub mod dashboards;
pub mod domain;
pub mod routes;
pub mod shared;
pub mod state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::http::{header, Method};
    use axum::middleware;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};

    use crate::domain::a001_sales_order::repository::Dataset;
    use crate::shared::{config, logger};
    use crate::state::AppState;

    let config = config::load_config()?;
    logger::init(&config.logging)?;

    // Generated once, read-only afterwards
    let dataset = Dataset::generate(&config.dataset)?;
    let state = AppState::new(dataset);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = routes::configure_routes(state)
        .layer(middleware::from_fn(logger::request_logger))
        .layer(cors);

    let addr = config.server.socket_addr()?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
