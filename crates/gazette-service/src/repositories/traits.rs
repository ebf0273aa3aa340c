use crate::errors::ApiError;
use crate::filters::ArticleFilter;
use crate::models::{Article, ArticleChanges, NewArticle, RelatedArticle};
use crate::pagination::PageRequest;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct ListArticlesResult {
    pub items: Vec<Article>,
    /// Number of articles matching the filter, ignoring the page window.
    pub total: u64,
}

#[async_trait]
pub trait ArticleRepository: Clone + Send + Sync + 'static {
    async fn create(&self, article: &NewArticle) -> Result<Article, ApiError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Article>, ApiError>;
    /// Newest first by `date`, ties in insertion order.
    async fn list(
        &self,
        filter: &ArticleFilter,
        page: &PageRequest,
    ) -> Result<ListArticlesResult, ApiError>;
    /// Other articles sharing `article`'s category, newest first.
    async fn related(
        &self,
        article: &Article,
        limit: i64,
    ) -> Result<Vec<RelatedArticle>, ApiError>;
    async fn update(
        &self,
        id: i32,
        changes: &ArticleChanges,
    ) -> Result<Option<Article>, ApiError>;
    /// Returns `false` when nothing was deleted.
    async fn delete(&self, id: i32) -> Result<bool, ApiError>;
    async fn distinct_categories(&self) -> Result<Vec<String>, ApiError>;
    async fn distinct_states(&self) -> Result<Vec<String>, ApiError>;
}
