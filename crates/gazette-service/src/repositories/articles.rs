use super::traits::{ArticleRepository, ListArticlesResult};
use crate::errors::ApiError;
use crate::filters::{ArticleFilter, LIKE_ESCAPE, contains_pattern};
use crate::models::{Article, ArticleChanges, NewArticle, RelatedArticle, fold_category};
use crate::pagination::PageRequest;
use crate::schema::articles;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sqlite::{Sqlite, SqliteConnection};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::error;

#[derive(Clone)]
pub struct SqliteArticleRepository {
    db: Arc<Mutex<SqliteConnection>>,
}

impl SqliteArticleRepository {
    pub fn new(db: Arc<Mutex<SqliteConnection>>) -> Self {
        Self { db }
    }

    fn conn(&self) -> Result<MutexGuard<'_, SqliteConnection>, ApiError> {
        self.db.lock().map_err(|_| {
            error!("Database connection lock poisoned");
            ApiError::InternalError
        })
    }
}

fn filtered(filter: &ArticleFilter) -> articles::BoxedQuery<'static, Sqlite> {
    let mut query = articles::table.into_boxed();

    if let Some(category) = &filter.category {
        query = query.filter(
            articles::category_folded
                .like(contains_pattern(&fold_category(category)))
                .escape(LIKE_ESCAPE),
        );
    }
    if let Some(state) = &filter.state {
        query = query.filter(articles::state.eq(state.clone()));
    }
    if let Some(featured) = filter.featured {
        query = query.filter(articles::featured.eq(featured));
    }

    query
}

#[async_trait]
impl ArticleRepository for SqliteArticleRepository {
    async fn create(&self, article: &NewArticle) -> Result<Article, ApiError> {
        let mut conn = self.conn()?;
        let result = diesel::insert_into(articles::table)
            .values(article)
            .returning(articles::all_columns)
            .get_result::<Article>(&mut *conn)?;
        Ok(result)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Article>, ApiError> {
        let mut conn = self.conn()?;
        let result = articles::table
            .find(id)
            .first::<Article>(&mut *conn)
            .optional()?;
        Ok(result)
    }

    async fn list(
        &self,
        filter: &ArticleFilter,
        page: &PageRequest,
    ) -> Result<ListArticlesResult, ApiError> {
        let mut conn = self.conn()?;

        let total = filtered(filter).count().get_result::<i64>(&mut *conn)?;

        let items = filtered(filter)
            .order((articles::date.desc(), articles::id.asc()))
            .limit(page.limit)
            .offset(page.offset())
            .load::<Article>(&mut *conn)?;

        Ok(ListArticlesResult {
            items,
            total: total.max(0) as u64,
        })
    }

    async fn related(
        &self,
        article: &Article,
        limit: i64,
    ) -> Result<Vec<RelatedArticle>, ApiError> {
        let mut conn = self.conn()?;
        let result = articles::table
            .filter(articles::category.eq(&article.category))
            .filter(articles::id.ne(article.id))
            .order((articles::date.desc(), articles::id.asc()))
            .limit(limit)
            .select(RelatedArticle::as_select())
            .load(&mut *conn)?;
        Ok(result)
    }

    async fn update(
        &self,
        id: i32,
        changes: &ArticleChanges,
    ) -> Result<Option<Article>, ApiError> {
        let mut conn = self.conn()?;
        let result = diesel::update(articles::table.find(id))
            .set(changes)
            .returning(articles::all_columns)
            .get_result::<Article>(&mut *conn)
            .optional()?;
        Ok(result)
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiError> {
        let mut conn = self.conn()?;
        let deleted = diesel::delete(articles::table.find(id)).execute(&mut *conn)?;
        Ok(deleted > 0)
    }

    async fn distinct_categories(&self) -> Result<Vec<String>, ApiError> {
        let mut conn = self.conn()?;
        let result = articles::table
            .select(articles::category)
            .distinct()
            .order(articles::category.asc())
            .load::<String>(&mut *conn)?;
        Ok(result)
    }

    async fn distinct_states(&self) -> Result<Vec<String>, ApiError> {
        let mut conn = self.conn()?;
        let result = articles::table
            .select(articles::state)
            .distinct()
            .order(articles::state.asc())
            .load::<String>(&mut *conn)?;
        Ok(result)
    }
}
