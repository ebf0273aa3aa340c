use axum::{
    Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    response::Json as ResponseJson,
    routing::get,
};
use tracing::{debug, info, instrument};

use super::PageQuery;
use crate::errors::ApiError;
use crate::filters::ArticleFilter;
use crate::models::ArticleResponse;
use crate::pagination::{Page, PageRequest};
use crate::queries;
use crate::{AppState, repositories::ArticleRepository};

#[instrument(skip_all)]
async fn list_states<S: AppState>(
    State(state): State<S>,
) -> Result<ResponseJson<Vec<String>>, ApiError> {
    let states = state.article_repo().distinct_states().await?;
    info!(count = states.len(), "Successfully retrieved states");
    Ok(ResponseJson(states))
}

#[instrument(skip_all, fields(state = %region))]
async fn news_by_state<S: AppState>(
    State(state): State<S>,
    Path(region): Path<String>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<ResponseJson<Page<ArticleResponse>>, ApiError> {
    let Query(query) = query?;
    debug!(page = ?query.page, limit = ?query.limit, "Processing news by state request");

    let request = PageRequest::parse(
        query.page.as_deref(),
        query.limit.as_deref(),
        state.max_page_size(),
    )?;
    let page =
        queries::fetch_page(state.article_repo(), &ArticleFilter::state(&region), &request).await?;

    info!(
        returned_count = page.items.len(),
        total_pages = page.total_pages,
        "Successfully retrieved state news"
    );

    Ok(ResponseJson(page.map(ArticleResponse::from)))
}

pub fn create_state_router<S: AppState>() -> Router<S> {
    Router::new()
        .route("/state", get(list_states::<S>))
        .route("/state/{state}", get(news_by_state::<S>))
}
