//! Listing and lookup operations shared by the news, category and state routes.

use crate::errors::ApiError;
use crate::filters::ArticleFilter;
use crate::models::{Article, RelatedArticle};
use crate::pagination::{Page, PageRequest};
use crate::repositories::ArticleRepository;
use tracing::debug;

pub const FEATURED_LIMIT: i64 = 5;
pub const RELATED_LIMIT: i64 = 3;

pub async fn fetch_page<R: ArticleRepository>(
    repo: &R,
    filter: &ArticleFilter,
    request: &PageRequest,
) -> Result<Page<Article>, ApiError> {
    let result = repo.list(filter, request).await?;
    debug!(
        total = result.total,
        returned = result.items.len(),
        page = request.page,
        limit = request.limit,
        "Fetched article page"
    );
    Ok(Page::new(result.items, result.total, request))
}

pub async fn fetch_featured<R: ArticleRepository>(repo: &R) -> Result<Vec<Article>, ApiError> {
    let result = repo
        .list(&ArticleFilter::featured(), &PageRequest::first(FEATURED_LIMIT))
        .await?;
    Ok(result.items)
}

/// Article by id together with a few others from the same category.
pub async fn fetch_detail<R: ArticleRepository>(
    repo: &R,
    id: i32,
) -> Result<(Article, Vec<RelatedArticle>), ApiError> {
    let article = repo.find_by_id(id).await?.ok_or(ApiError::NotFound)?;
    let related = repo.related(&article, RELATED_LIMIT).await?;
    Ok((article, related))
}
