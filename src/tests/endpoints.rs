//! HTTP endpoint tests
//!
//! Exercise the full route filter with a stubbed provider, covering the
//! payment-initiation contract and the read-only content endpoints.

#![cfg(test)]

use crate::infrastructure::adapters::ProviderApi;
use crate::infrastructure::http::server::create_test_routes;
use crate::tests::common::StubProvider;
use crate::tests::config::test_config;
use serde_json::{json, Value};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use warp::test::request;

fn initiate_body(amount: f64) -> Value {
    json!({
        "amount": amount,
        "email": "a@b.com",
        "api_ref": "service-123",
    })
}

#[tokio::test]
async fn test_initiate_payment_hosted_redirect_returns_url() {
    let provider = Arc::new(StubProvider::new());
    let routes = create_test_routes(test_config(), provider.clone()).unwrap();

    let response = request()
        .method("POST")
        .path("/api/initiate-payment")
        .json(&initiate_body(3000.0))
        .reply(&routes)
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = serde_json::from_slice(response.body()).unwrap();
    let url = body["url"].as_str().unwrap();
    assert!(url.starts_with("https://sandbox.intasend.com/"));
    assert_eq!(provider.charge_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_initiate_payment_missing_secret_is_generic_500() {
    let mut config = test_config();
    config.provider.secret_key = None;
    let provider = Arc::new(StubProvider::new());
    let routes = create_test_routes(config, provider.clone()).unwrap();

    let response = request()
        .method("POST")
        .path("/api/initiate-payment")
        .json(&initiate_body(3000.0))
        .reply(&routes)
        .await;

    assert_eq!(response.status(), 500);
    let body: Value = serde_json::from_slice(response.body()).unwrap();
    let error = body["error"].as_str().unwrap();
    // Generic message only; no configuration detail and no provider call
    assert_eq!(error, "Server configuration error: payment processing unavailable");
    assert!(!error.to_lowercase().contains("secret"));
    assert_eq!(provider.total_calls(), 0);
}

#[tokio::test]
async fn test_initiate_payment_rejects_non_positive_amount() {
    let provider = Arc::new(StubProvider::new());
    let routes = create_test_routes(test_config(), provider.clone()).unwrap();

    let response = request()
        .method("POST")
        .path("/api/initiate-payment")
        .json(&initiate_body(0.0))
        .reply(&routes)
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = serde_json::from_slice(response.body()).unwrap();
    assert!(body["error"].as_str().is_some());
    assert_eq!(provider.total_calls(), 0);
}

#[tokio::test]
async fn test_initiate_payment_widget_variant_returns_checkout_triple() {
    let mut config = test_config();
    config.checkout.variant = "widget".to_string();
    let provider = Arc::new(StubProvider::new());
    let routes = create_test_routes(config, provider.clone()).unwrap();

    let response = request()
        .method("POST")
        .path("/api/initiate-payment")
        .json(&initiate_body(2500.0))
        .reply(&routes)
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(body["checkout_id"], "abc");
    assert_eq!(body["signature"], "sig");
    assert_eq!(body["live"], false);
    // Widget creation uses the publishable key, never the secret
    assert_eq!(provider.checkout_calls.load(Ordering::SeqCst), 1);
    assert_eq!(provider.charge_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_initiate_payment_push_variant_forwards_raw_ack() {
    let mut config = test_config();
    config.checkout.variant = "push".to_string();
    let provider = Arc::new(StubProvider::new());
    let routes = create_test_routes(config, provider.clone()).unwrap();

    let response = request()
        .method("POST")
        .path("/api/initiate-payment")
        .json(&json!({
            "amount": 1500.0,
            "email": "a@b.com",
            "phone_number": "254712345678",
            "api_ref": "service-456",
        }))
        .reply(&routes)
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(body["invoice"]["state"], "PENDING");
    assert_eq!(provider.push_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_initiate_payment_push_variant_requires_phone() {
    let mut config = test_config();
    config.checkout.variant = "push".to_string();
    let provider = Arc::new(StubProvider::new());
    let routes = create_test_routes(config, provider.clone()).unwrap();

    let response = request()
        .method("POST")
        .path("/api/initiate-payment")
        .json(&initiate_body(1500.0))
        .reply(&routes)
        .await;

    assert_eq!(response.status(), 400);
    assert_eq!(provider.total_calls(), 0);
}

#[tokio::test]
async fn test_rate_limit_returns_429_when_exhausted() {
    let mut config = test_config();
    config.rate_limit.enabled = true;
    config.rate_limit.requests_per_minute = 60;
    config.rate_limit.burst_size = 2;
    let provider = Arc::new(StubProvider::new());
    let routes = create_test_routes(config, provider).unwrap();

    let mut last_status = 0;
    for _ in 0..3 {
        let response = request()
            .method("POST")
            .path("/api/initiate-payment")
            .header("x-forwarded-for", "203.0.113.7")
            .json(&initiate_body(3000.0))
            .reply(&routes)
            .await;
        last_status = response.status().as_u16();
    }
    assert_eq!(last_status, 429);
}

#[tokio::test]
async fn test_list_posts_returns_seeded_articles() {
    let provider: Arc<dyn ProviderApi> = Arc::new(StubProvider::new());
    let routes = create_test_routes(test_config(), provider).unwrap();

    let response = request().method("GET").path("/api/posts").reply(&routes).await;

    assert_eq!(response.status(), 200);
    let body: Value = serde_json::from_slice(response.body()).unwrap();
    let posts = body.as_array().unwrap();
    assert_eq!(posts.len(), 4);
    assert!(posts.iter().all(|p| p["slug"].as_str().is_some()));
}

#[tokio::test]
async fn test_get_post_unknown_slug_returns_404() {
    let provider: Arc<dyn ProviderApi> = Arc::new(StubProvider::new());
    let routes = create_test_routes(test_config(), provider).unwrap();

    let response = request()
        .method("GET")
        .path("/api/posts/no-such-post")
        .reply(&routes)
        .await;

    assert_eq!(response.status(), 404);
    let body: Value = serde_json::from_slice(response.body()).unwrap();
    assert!(body["error"].as_str().unwrap().contains("no-such-post"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let provider: Arc<dyn ProviderApi> = Arc::new(StubProvider::new());
    let routes = create_test_routes(test_config(), provider).unwrap();

    let response = request().method("GET").path("/health").reply(&routes).await;

    assert_eq!(response.status(), 200);
    let body: Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_metrics_endpoint_exposes_counters() {
    let provider: Arc<dyn ProviderApi> = Arc::new(StubProvider::new());
    let routes = create_test_routes(test_config(), provider).unwrap();

    request()
        .method("POST")
        .path("/api/initiate-payment")
        .json(&initiate_body(3000.0))
        .reply(&routes)
        .await;

    let response = request().method("GET").path("/metrics").reply(&routes).await;

    assert_eq!(response.status(), 200);
    let text = String::from_utf8_lossy(response.body()).to_string();
    assert!(text.contains("checkout_initiations_total"));
}
