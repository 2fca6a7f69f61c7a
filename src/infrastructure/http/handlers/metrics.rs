//! Metrics handler module

use crate::application::services::metrics_service::MetricsService;
use std::sync::Arc;
use tracing::error;
use warp::Reply;

/// Handle Prometheus metrics requests
pub async fn handle_metrics_request(
    metrics: Arc<MetricsService>,
) -> Result<impl Reply, warp::reject::Rejection> {
    let body = match metrics.gather() {
        Ok(body) => body,
        Err(e) => {
            error!(error = %e, "Failed to gather metrics");
            String::new()
        }
    };
    Ok(warp::reply::with_header(
        warp::reply::with_status(body, warp::http::StatusCode::OK),
        "Content-Type",
        "text/plain; version=0.0.4",
    ))
}
