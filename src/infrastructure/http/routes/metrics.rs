//! Prometheus metrics route

use std::sync::Arc;
use warp::Filter;

use crate::application::services::metrics_service::MetricsService;
use crate::infrastructure::http::handlers::handle_metrics_request;

pub struct MetricsRoutes;

impl MetricsRoutes {
    pub fn create_metrics_route(
        metrics: Arc<MetricsService>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path("metrics")
            .and(warp::path::end())
            .and(warp::get())
            .and(Self::with_metrics(metrics))
            .and_then(handle_metrics_request)
    }

    fn with_metrics(
        metrics: Arc<MetricsService>,
    ) -> impl Filter<Extract = (Arc<MetricsService>,), Error = std::convert::Infallible> + Clone
    {
        warp::any().map(move || metrics.clone())
    }
}
