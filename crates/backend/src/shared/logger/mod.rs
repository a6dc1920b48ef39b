use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use super::config::{get_log_path, LoggingConfig};
use super::format::format_number;

const DEFAULT_FILTER: &str = "info,tower_http=warn";

/// Installs the global subscriber: console output plus a plain-text log file.
///
/// `RUST_LOG` overrides the default filter.
pub fn init(config: &LoggingConfig) -> anyhow::Result<()> {
    let log_file_path = get_log_path(config);
    if let Some(dir) = log_file_path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    tracing::info!("Logging to {}", log_file_path.display());
    Ok(())
}

/// One line per request: time, latency, body size, status, method, path
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Body has to be buffered to know its real size
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                "{} {} {} | {}ms | body error: {}",
                parts.status.as_u16(),
                method,
                uri.path(),
                start.elapsed().as_millis(),
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let timestamp = chrono::Local::now();
    // cyan for 200, yellow for everything else
    let color_code = if parts.status.as_u16() == 200 { "36" } else { "33" };

    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color_code,
        timestamp.format("%H:%M:%S"),
        start.elapsed().as_millis(),
        format_number(bytes.len()),
        parts.status.as_u16(),
        method,
        uri.path()
    );

    Response::from_parts(parts, Body::from(bytes))
}
