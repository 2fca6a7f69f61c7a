//! Security headers for JSON responses

use crate::config::AppConfig;
use serde::Serialize;
use warp::http::header::{HeaderValue, CACHE_CONTROL};
use warp::reply::Response;
use warp::Reply;

/// Adds conservative security headers to JSON replies
pub struct SecurityHeadersMiddleware {
    enabled: bool,
}

impl SecurityHeadersMiddleware {
    pub fn new(config: &AppConfig) -> Self {
        Self { enabled: config.security.enable_security_headers }
    }

    fn apply(&self, mut response: Response) -> Response {
        if !self.enabled {
            return response;
        }
        let headers = response.headers_mut();
        headers.insert("x-content-type-options", HeaderValue::from_static("nosniff"));
        headers.insert("x-frame-options", HeaderValue::from_static("DENY"));
        headers.insert("referrer-policy", HeaderValue::from_static("no-referrer"));
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
        response
    }
}

/// Serialize a JSON body and apply security headers
pub fn create_json_response_with_security_headers<T: Serialize>(
    body: &T,
    middleware: &SecurityHeadersMiddleware,
) -> Response {
    middleware.apply(warp::reply::json(body).into_response())
}
