//! Payment initiation HTTP handler

use std::sync::Arc;

use warp::Reply;

use crate::application::services::gateway_service::{GatewayService, InitiateGateway};
use crate::application::services::metrics_service::MetricsService;
use crate::config::AppConfig;
use crate::domain::checkout::HandoffPayload;
use crate::infrastructure::http::models::{ErrorBody, InitiatePaymentRequest};
use crate::middleware::rate_limit::RateLimitMiddleware;
use crate::middleware::security_headers::{
    create_json_response_with_security_headers, SecurityHeadersMiddleware,
};

pub async fn handle_initiate_payment(
    body: InitiatePaymentRequest,
    client_ip: Option<String>,
    gateway: Arc<GatewayService>,
    metrics: Arc<MetricsService>,
    rate_limiter: Arc<RateLimitMiddleware>,
    config: AppConfig,
) -> Result<impl Reply, warp::reject::Rejection> {
    let headers = SecurityHeadersMiddleware::new(&config);
    let client_ip = client_ip.unwrap_or_else(|| "unknown".to_string());

    if rate_limiter.check(&client_ip).is_err() {
        metrics.record_rate_limited();
        let response = create_json_response_with_security_headers(
            &ErrorBody { error: "Rate limit exceeded".to_string() },
            &headers,
        );
        return Ok(warp::reply::with_status(
            response,
            warp::http::StatusCode::TOO_MANY_REQUESTS,
        ));
    }

    if let Err(e) = body.validate_request() {
        metrics.record_http_request("initiate-payment", e.http_status_code().as_u16());
        let response = create_json_response_with_security_headers(
            &ErrorBody { error: e.client_message() },
            &headers,
        );
        return Ok(warp::reply::with_status(response, e.http_status_code()));
    }

    let booking = body.into_booking();
    let result = gateway.initiate(&booking).await;
    metrics.record_initiation(gateway.variant().as_str(), result.is_ok());

    let response = match result {
        Ok(HandoffPayload::PushAck { raw }) => {
            // The push variant forwards the provider's acknowledgement as-is
            metrics.record_http_request("initiate-payment", 200);
            warp::reply::with_status(
                create_json_response_with_security_headers(&raw, &headers),
                warp::http::StatusCode::OK,
            )
        }
        Ok(payload) => {
            metrics.record_http_request("initiate-payment", 200);
            warp::reply::with_status(
                create_json_response_with_security_headers(&payload, &headers),
                warp::http::StatusCode::OK,
            )
        }
        Err(e) => {
            let status = e.http_status_code();
            metrics.record_http_request("initiate-payment", status.as_u16());
            warp::reply::with_status(
                create_json_response_with_security_headers(
                    &ErrorBody { error: e.client_message() },
                    &headers,
                ),
                status,
            )
        }
    };
    Ok(response)
}
