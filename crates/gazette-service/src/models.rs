use crate::validation::{ValidationError, reject_blank, require_fields};
use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

pub const DEFAULT_IMAGE_URL: &str = "/placeholder-news.jpg";
pub const DEFAULT_STATE: &str = "National";

/// A stored article row. Never serialized directly; see [`ArticleResponse`].
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = crate::schema::articles)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Article {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub image_url: String,
    pub category: String,
    pub state: String,
    pub author: String,
    pub source: String,
    pub featured: bool,
    pub date: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub category_folded: String,
}

/// Caller-supplied article fields, shared by create and partial update.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDraft {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub state: Option<String>,
    pub author: Option<String>,
    pub source: Option<String>,
    pub featured: Option<bool>,
    pub date: Option<DateTime<Utc>>,
}

impl ArticleDraft {
    fn required_fields(&self) -> [(&'static str, Option<&str>); 6] {
        [
            ("title", self.title.as_deref()),
            ("content", self.content.as_deref()),
            ("excerpt", self.excerpt.as_deref()),
            ("category", self.category.as_deref()),
            ("author", self.author.as_deref()),
            ("source", self.source.as_deref()),
        ]
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::articles)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub image_url: String,
    pub category: String,
    pub state: String,
    pub author: String,
    pub source: String,
    pub featured: bool,
    pub date: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub category_folded: String,
}

/// Lowercased category used for case-insensitive matching. SQLite's `lower()`
/// and `LIKE` only fold ASCII, so the fold happens here.
pub fn fold_category(category: &str) -> String {
    category.to_lowercase()
}

fn or_default(value: String, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value
    }
}

impl NewArticle {
    pub fn new(draft: ArticleDraft, now: NaiveDateTime) -> Result<Self, ValidationError> {
        require_fields(&draft.required_fields())?;

        let ArticleDraft {
            title,
            content,
            excerpt,
            image_url,
            category,
            state,
            author,
            source,
            featured,
            date,
        } = draft;

        let category = category.unwrap_or_default();

        Ok(NewArticle {
            title: title.unwrap_or_default().trim().to_string(),
            content: content.unwrap_or_default(),
            excerpt: excerpt.unwrap_or_default(),
            image_url: or_default(image_url.unwrap_or_default(), DEFAULT_IMAGE_URL),
            category_folded: fold_category(&category),
            category,
            state: or_default(state.unwrap_or_default(), DEFAULT_STATE),
            author: author.unwrap_or_default(),
            source: source.unwrap_or_default(),
            featured: featured.unwrap_or(false),
            date: date.map(|d| d.naive_utc()).unwrap_or(now),
            created_at: now,
            updated_at: now,
        })
    }
}

/// Partial update. `None` columns are left untouched by diesel.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::articles)]
pub struct ArticleChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub state: Option<String>,
    pub author: Option<String>,
    pub source: Option<String>,
    pub featured: Option<bool>,
    pub date: Option<NaiveDateTime>,
    pub updated_at: NaiveDateTime,
    pub category_folded: Option<String>,
}

impl ArticleChanges {
    /// Blank `imageUrl` and `state` reset to their defaults, as on create.
    pub fn new(draft: ArticleDraft, now: NaiveDateTime) -> Result<Self, ValidationError> {
        reject_blank(&draft.required_fields())?;

        Ok(ArticleChanges {
            title: draft.title.map(|t| t.trim().to_string()),
            content: draft.content,
            excerpt: draft.excerpt,
            image_url: draft.image_url.map(|url| or_default(url, DEFAULT_IMAGE_URL)),
            category_folded: draft.category.as_deref().map(fold_category),
            category: draft.category,
            state: draft.state.map(|state| or_default(state, DEFAULT_STATE)),
            author: draft.author,
            source: draft.source,
            featured: draft.featured,
            date: draft.date.map(|d| d.naive_utc()),
            updated_at: now,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Serialize)]
#[diesel(table_name = crate::schema::articles)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RelatedArticle {
    pub id: i32,
    pub title: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleResponse {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub image_url: String,
    pub category: String,
    pub state: String,
    pub author: String,
    pub source: String,
    pub featured: bool,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleResponse {
    fn from(article: Article) -> Self {
        ArticleResponse {
            id: article.id,
            title: article.title,
            content: article.content,
            excerpt: article.excerpt,
            image_url: article.image_url,
            category: article.category,
            state: article.state,
            author: article.author,
            source: article.source,
            featured: article.featured,
            date: article.date.and_utc(),
            created_at: article.created_at.and_utc(),
            updated_at: article.updated_at.and_utc(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDetailResponse {
    #[serde(flatten)]
    pub article: ArticleResponse,
    pub related_news: Vec<RelatedArticle>,
}
