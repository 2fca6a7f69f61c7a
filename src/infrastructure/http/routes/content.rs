//! Content routes

use std::sync::Arc;
use warp::Filter;

use crate::config::AppConfig;
use crate::domain::content::ArticleStore;
use crate::infrastructure::http::handlers::{handle_get_post, handle_list_posts};

pub struct ContentRoutes;

impl ContentRoutes {
    pub fn create_routes(
        config: AppConfig,
        store: Arc<dyn ArticleStore>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let list = warp::path("api")
            .and(warp::path("posts"))
            .and(warp::path::end())
            .and(warp::get())
            .and(Self::with_store(store.clone()))
            .and(Self::with_config(config.clone()))
            .and_then(handle_list_posts);

        let single = warp::path("api")
            .and(warp::path("posts"))
            .and(warp::path::param::<String>())
            .and(warp::path::end())
            .and(warp::get())
            .and(Self::with_store(store))
            .and(Self::with_config(config))
            .and_then(handle_get_post);

        list.or(single)
    }

    fn with_store(
        store: Arc<dyn ArticleStore>,
    ) -> impl Filter<Extract = (Arc<dyn ArticleStore>,), Error = std::convert::Infallible> + Clone
    {
        warp::any().map(move || store.clone())
    }

    fn with_config(
        config: AppConfig,
    ) -> impl Filter<Extract = (AppConfig,), Error = std::convert::Infallible> + Clone {
        warp::any().map(move || config.clone())
    }
}
