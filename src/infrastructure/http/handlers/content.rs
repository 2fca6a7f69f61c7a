//! Content HTTP handlers
//!
//! Read-only article endpoints; the content store is a black-box
//! collaborator as far as the payment core is concerned.

use std::sync::Arc;

use warp::Reply;

use crate::config::AppConfig;
use crate::domain::content::ArticleStore;
use crate::infrastructure::http::models::ErrorBody;
use crate::middleware::security_headers::{
    create_json_response_with_security_headers, SecurityHeadersMiddleware,
};

pub async fn handle_list_posts(
    store: Arc<dyn ArticleStore>,
    config: AppConfig,
) -> Result<impl Reply, warp::reject::Rejection> {
    let headers = SecurityHeadersMiddleware::new(&config);
    let posts = store.list_posts();
    Ok(warp::reply::with_status(
        create_json_response_with_security_headers(&posts, &headers),
        warp::http::StatusCode::OK,
    ))
}

pub async fn handle_get_post(
    slug: String,
    store: Arc<dyn ArticleStore>,
    config: AppConfig,
) -> Result<impl Reply, warp::reject::Rejection> {
    let headers = SecurityHeadersMiddleware::new(&config);
    let response = match store.get_post_by_slug(&slug) {
        Some(post) => warp::reply::with_status(
            create_json_response_with_security_headers(&post, &headers),
            warp::http::StatusCode::OK,
        ),
        None => warp::reply::with_status(
            create_json_response_with_security_headers(
                &ErrorBody { error: format!("Not found: {}", slug) },
                &headers,
            ),
            warp::http::StatusCode::NOT_FOUND,
        ),
    };
    Ok(response)
}
