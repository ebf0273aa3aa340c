use axum::{
    Router,
    extract::{
        Json, Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::Json as ResponseJson,
    routing::get,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info, instrument};

use super::PageQuery;
use crate::errors::ApiError;
use crate::filters::ArticleFilter;
use crate::models::{ArticleChanges, ArticleDetailResponse, ArticleDraft, ArticleResponse, NewArticle};
use crate::pagination::{Page, PageRequest};
use crate::queries;
use crate::{AppState, repositories::ArticleRepository};

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: &'static str,
}

/// Ids are opaque to clients; anything that is not one of ours is simply not found.
fn parse_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse::<i32>().map_err(|_| ApiError::NotFound)
}

#[instrument(skip_all)]
async fn list_news<S: AppState>(
    State(state): State<S>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<ResponseJson<Page<ArticleResponse>>, ApiError> {
    let Query(query) = query?;
    debug!(page = ?query.page, limit = ?query.limit, "Processing list news request");

    let request = PageRequest::parse(
        query.page.as_deref(),
        query.limit.as_deref(),
        state.max_page_size(),
    )?;
    let page = queries::fetch_page(state.article_repo(), &ArticleFilter::all(), &request).await?;

    info!(
        returned_count = page.items.len(),
        total_pages = page.total_pages,
        "Successfully retrieved news page"
    );

    Ok(ResponseJson(page.map(ArticleResponse::from)))
}

#[instrument(skip_all)]
async fn featured_news<S: AppState>(
    State(state): State<S>,
) -> Result<ResponseJson<Vec<ArticleResponse>>, ApiError> {
    let featured = queries::fetch_featured(state.article_repo()).await?;
    info!(returned_count = featured.len(), "Successfully retrieved featured news");
    Ok(ResponseJson(
        featured.into_iter().map(ArticleResponse::from).collect(),
    ))
}

#[instrument(skip_all, fields(id = %id))]
async fn get_news<S: AppState>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<ResponseJson<ArticleDetailResponse>, ApiError> {
    debug!("Processing get news by ID request");

    let id = parse_id(&id)?;
    let (article, related_news) = queries::fetch_detail(state.article_repo(), id).await?;

    info!(
        id = article.id,
        related_count = related_news.len(),
        "Successfully retrieved news item"
    );

    Ok(ResponseJson(ArticleDetailResponse {
        article: article.into(),
        related_news,
    }))
}

#[instrument(skip_all)]
async fn create_news<S: AppState>(
    State(state): State<S>,
    payload: Result<Json<ArticleDraft>, JsonRejection>,
) -> Result<(StatusCode, ResponseJson<ArticleResponse>), ApiError> {
    let Json(draft) = payload?;
    debug!(category = ?draft.category, state = ?draft.state, "Processing create news request");

    let new_article = NewArticle::new(draft, Utc::now().naive_utc())?;
    let created = state.article_repo().create(&new_article).await?;

    info!(id = created.id, "Successfully created news item");

    Ok((StatusCode::CREATED, ResponseJson(created.into())))
}

#[instrument(skip_all, fields(id = %id))]
async fn update_news<S: AppState>(
    State(state): State<S>,
    Path(id): Path<String>,
    payload: Result<Json<ArticleDraft>, JsonRejection>,
) -> Result<ResponseJson<ArticleResponse>, ApiError> {
    let id = parse_id(&id)?;
    let Json(draft) = payload?;

    let changes = ArticleChanges::new(draft, Utc::now().naive_utc())?;
    let updated = state
        .article_repo()
        .update(id, &changes)
        .await?
        .ok_or(ApiError::NotFound)?;

    info!(id = updated.id, "Successfully updated news item");

    Ok(ResponseJson(updated.into()))
}

#[instrument(skip_all, fields(id = %id))]
async fn delete_news<S: AppState>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<ResponseJson<MessageResponse>, ApiError> {
    let id = parse_id(&id)?;

    if !state.article_repo().delete(id).await? {
        debug!("News item not found");
        return Err(ApiError::NotFound);
    }

    info!(id, "Successfully deleted news item");

    Ok(ResponseJson(MessageResponse {
        message: "News deleted",
    }))
}

pub fn create_news_router<S: AppState>() -> Router<S> {
    Router::new()
        .route("/news", get(list_news::<S>).post(create_news::<S>))
        .route("/news/featured", get(featured_news::<S>))
        .route(
            "/news/{id}",
            get(get_news::<S>)
                .patch(update_news::<S>)
                .delete(delete_news::<S>),
        )
}
