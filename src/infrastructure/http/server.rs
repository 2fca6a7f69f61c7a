//! HTTP server implementation for reverse proxy deployment
//!
//! The server binds a plain HTTP listener; SSL, compression, and CORS are
//! expected to be handled by the reverse proxy in front of it.

use crate::{
    application::services::{GatewayService, MetricsService},
    config::AppConfig,
    domain::content::ArticleStore,
    infrastructure::adapters::{IntaSendClient, StaticArticleStore},
    infrastructure::http::routes::RouteBuilder,
    middleware::rate_limit::RateLimitMiddleware,
    shared::error::{AppError, AppResult},
};
use std::sync::Arc;
use tracing::{info, instrument};
use warp::{Filter, Reply};

/// HTTP server wiring the gateway, content, and observability routes
pub struct CheckoutServer {
    config: AppConfig,
    gateway: Arc<GatewayService>,
    metrics: Arc<MetricsService>,
    rate_limiter: Arc<RateLimitMiddleware>,
    store: Arc<dyn ArticleStore>,
}

impl CheckoutServer {
    /// Create a new server instance from validated configuration
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let config_arc = Arc::new(config.clone());

        let provider = Arc::new(IntaSendClient::new(config_arc.clone())?);
        let gateway = Arc::new(GatewayService::new(config_arc, provider)?);
        let metrics = Arc::new(MetricsService::new()?);
        let rate_limiter = Arc::new(RateLimitMiddleware::new(&config));
        let store: Arc<dyn ArticleStore> = Arc::new(StaticArticleStore::new());

        Ok(Self {
            config,
            gateway,
            metrics,
            rate_limiter,
            store,
        })
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run the HTTP server until the process is stopped
    #[instrument(skip(self))]
    pub async fn run(self) -> AppResult<()> {
        let addr = self.config.server_address();
        info!("Starting HTTP server on {}", addr);

        let addr: std::net::SocketAddr = addr
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid server address: {}", e)))?;

        let routes = self.create_routes();

        warp::serve(routes).run(addr).await;

        Ok(())
    }

    fn create_routes(self) -> impl Filter<Extract = impl Reply, Error = warp::Rejection> + Clone {
        RouteBuilder::build_routes(
            self.config,
            self.gateway,
            self.metrics,
            self.rate_limiter,
            self.store,
        )
    }
}

#[cfg(test)]
/// Build the full route filter around an injected provider, for endpoint tests
pub fn create_test_routes(
    config: AppConfig,
    provider: Arc<dyn crate::infrastructure::adapters::ProviderApi>,
) -> AppResult<impl Filter<Extract = impl Reply, Error = warp::Rejection> + Clone> {
    let config_arc = Arc::new(config.clone());
    let gateway = Arc::new(GatewayService::new(config_arc, provider)?);
    let metrics = Arc::new(MetricsService::new()?);
    let rate_limiter = Arc::new(RateLimitMiddleware::new(&config));
    let store: Arc<dyn ArticleStore> = Arc::new(StaticArticleStore::new());

    Ok(RouteBuilder::build_routes(
        config,
        gateway,
        metrics,
        rate_limiter,
        store,
    ))
}
