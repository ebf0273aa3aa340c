use crate::AppState;
use axum::Router;
use serde::Deserialize;

pub mod category;
pub mod news;
pub mod state;

/// Raw paging parameters. Kept as strings so bad input reaches our own validation.
#[derive(Debug, Deserialize)]
struct PageQuery {
    page: Option<String>,
    limit: Option<String>,
}

pub fn create_api_router<S: AppState>() -> Router<S> {
    Router::new()
        .merge(news::create_news_router())
        .merge(category::create_category_router())
        .merge(state::create_state_router())
}
