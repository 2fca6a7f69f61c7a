//! Health check handler module

use crate::config::AppConfig;
use crate::middleware::security_headers::{
    create_json_response_with_security_headers, SecurityHeadersMiddleware,
};
use warp::Reply;

/// Handle health check requests
pub async fn handle_health_request(
    config: AppConfig,
) -> Result<impl Reply, warp::reject::Rejection> {
    let headers = SecurityHeadersMiddleware::new(&config);
    let body = serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });
    Ok(create_json_response_with_security_headers(&body, &headers))
}
