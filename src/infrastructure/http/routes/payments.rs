//! Payment routes

use std::sync::Arc;
use warp::Filter;

use crate::application::services::gateway_service::GatewayService;
use crate::application::services::metrics_service::MetricsService;
use crate::config::AppConfig;
use crate::infrastructure::http::handlers::handle_initiate_payment;
use crate::middleware::rate_limit::RateLimitMiddleware;

pub struct PaymentRoutes;

impl PaymentRoutes {
    pub fn create_routes(
        config: AppConfig,
        gateway: Arc<GatewayService>,
        metrics: Arc<MetricsService>,
        rate_limiter: Arc<RateLimitMiddleware>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path("api")
            .and(warp::path("initiate-payment"))
            .and(warp::path::end())
            .and(warp::post())
            .and(warp::body::content_length_limit(config.server.max_request_size as u64))
            .and(warp::body::json())
            .and(warp::header::optional::<String>("x-forwarded-for"))
            .and(Self::with_gateway(gateway))
            .and(Self::with_metrics(metrics))
            .and(Self::with_rate_limiter(rate_limiter))
            .and(Self::with_config(config))
            .and_then(handle_initiate_payment)
    }

    fn with_gateway(
        gateway: Arc<GatewayService>,
    ) -> impl Filter<Extract = (Arc<GatewayService>,), Error = std::convert::Infallible> + Clone
    {
        warp::any().map(move || gateway.clone())
    }

    fn with_metrics(
        metrics: Arc<MetricsService>,
    ) -> impl Filter<Extract = (Arc<MetricsService>,), Error = std::convert::Infallible> + Clone
    {
        warp::any().map(move || metrics.clone())
    }

    fn with_rate_limiter(
        rate_limiter: Arc<RateLimitMiddleware>,
    ) -> impl Filter<Extract = (Arc<RateLimitMiddleware>,), Error = std::convert::Infallible> + Clone
    {
        warp::any().map(move || rate_limiter.clone())
    }

    fn with_config(
        config: AppConfig,
    ) -> impl Filter<Extract = (AppConfig,), Error = std::convert::Infallible> + Clone {
        warp::any().map(move || config.clone())
    }
}
