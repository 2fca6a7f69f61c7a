//! Health check route

use warp::Filter;

use crate::config::AppConfig;
use crate::infrastructure::http::handlers::handle_health_request;

pub struct HealthRoutes;

impl HealthRoutes {
    pub fn create_health_route(
        config: AppConfig,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path("health")
            .and(warp::path::end())
            .and(warp::get())
            .and(Self::with_config(config))
            .and_then(handle_health_request)
    }

    fn with_config(
        config: AppConfig,
    ) -> impl Filter<Extract = (AppConfig,), Error = std::convert::Infallible> + Clone {
        warp::any().map(move || config.clone())
    }
}
