use axum::Router;
use diesel::sqlite::SqliteConnection;
use std::sync::{Arc, Mutex};

pub mod config;
pub mod db;
pub mod errors;
pub mod filters;
pub mod models;
pub mod pagination;
pub mod queries;
pub mod repositories;
pub mod routes;
pub mod schema;
pub mod validation;

use pagination::DEFAULT_MAX_LIMIT;
use repositories::{ArticleRepository, SqliteArticleRepository};

pub trait AppState: Clone + Send + Sync + 'static {
    type ArticleRepo: ArticleRepository;

    fn article_repo(&self) -> &Self::ArticleRepo;

    /// Upper bound applied to the `limit` query parameter.
    fn max_page_size(&self) -> i64 {
        DEFAULT_MAX_LIMIT
    }
}

#[derive(Clone)]
pub struct DefaultAppState {
    article_repo: SqliteArticleRepository,
    max_page_size: i64,
}

impl DefaultAppState {
    pub fn new(db: Arc<Mutex<SqliteConnection>>) -> Self {
        Self {
            article_repo: SqliteArticleRepository::new(db),
            max_page_size: DEFAULT_MAX_LIMIT,
        }
    }

    pub fn with_max_page_size(mut self, max_page_size: i64) -> Self {
        self.max_page_size = max_page_size.max(1);
        self
    }
}

impl AppState for DefaultAppState {
    type ArticleRepo = SqliteArticleRepository;

    fn article_repo(&self) -> &Self::ArticleRepo {
        &self.article_repo
    }

    fn max_page_size(&self) -> i64 {
        self.max_page_size
    }
}

pub fn create_app(state: DefaultAppState) -> Router {
    routes::create_router().with_state(state)
}
