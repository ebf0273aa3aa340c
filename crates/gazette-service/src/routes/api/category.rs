use axum::{
    Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    response::Json as ResponseJson,
    routing::get,
};
use serde::Deserialize;
use tracing::{debug, info, instrument};

use crate::errors::ApiError;
use crate::filters::ArticleFilter;
use crate::models::ArticleResponse;
use crate::pagination::{Page, PageRequest};
use crate::queries;
use crate::{AppState, repositories::ArticleRepository};

#[derive(Debug, Deserialize)]
struct CategoryQuery {
    page: Option<String>,
    limit: Option<String>,
    state: Option<String>,
}

#[instrument(skip_all)]
async fn list_categories<S: AppState>(
    State(state): State<S>,
) -> Result<ResponseJson<Vec<String>>, ApiError> {
    let categories = state.article_repo().distinct_categories().await?;
    info!(count = categories.len(), "Successfully retrieved categories");
    Ok(ResponseJson(categories))
}

#[instrument(skip_all, fields(category = %category))]
async fn news_by_category<S: AppState>(
    State(state): State<S>,
    Path(category): Path<String>,
    query: Result<Query<CategoryQuery>, QueryRejection>,
) -> Result<ResponseJson<Page<ArticleResponse>>, ApiError> {
    let Query(query) = query?;
    debug!(
        state = ?query.state,
        page = ?query.page,
        limit = ?query.limit,
        "Processing news by category request"
    );

    let request = PageRequest::parse(
        query.page.as_deref(),
        query.limit.as_deref(),
        state.max_page_size(),
    )?;
    let filter = ArticleFilter::category(category).with_state(query.state.as_deref());
    let page = queries::fetch_page(state.article_repo(), &filter, &request).await?;

    info!(
        returned_count = page.items.len(),
        total_pages = page.total_pages,
        "Successfully retrieved category news"
    );

    Ok(ResponseJson(page.map(ArticleResponse::from)))
}

pub fn create_category_router<S: AppState>() -> Router<S> {
    Router::new()
        .route("/category", get(list_categories::<S>))
        .route("/category/{category}", get(news_by_category::<S>))
}
