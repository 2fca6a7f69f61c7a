//! Route builder module
//!
//! Orchestrates the creation of all application routes.

use std::sync::Arc;
use warp::Filter;

use crate::{
    application::services::{GatewayService, MetricsService},
    config::AppConfig,
    domain::content::ArticleStore,
    infrastructure::http::routes::{ContentRoutes, HealthRoutes, MetricsRoutes, PaymentRoutes},
    middleware::rate_limit::RateLimitMiddleware,
};

/// Route builder that combines all route groups into the application filter
pub struct RouteBuilder;

impl RouteBuilder {
    pub fn build_routes(
        config: AppConfig,
        gateway: Arc<GatewayService>,
        metrics: Arc<MetricsService>,
        rate_limiter: Arc<RateLimitMiddleware>,
        store: Arc<dyn ArticleStore>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let payment_route = PaymentRoutes::create_routes(
            config.clone(),
            gateway,
            metrics.clone(),
            rate_limiter,
        );

        let content_route = ContentRoutes::create_routes(config.clone(), store);

        let health_route = HealthRoutes::create_health_route(config);

        let metrics_route = MetricsRoutes::create_metrics_route(metrics);

        payment_route
            .or(content_route)
            .or(health_route)
            .or(metrics_route)
    }
}
