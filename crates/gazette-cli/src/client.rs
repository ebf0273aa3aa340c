use chrono::{DateTime, Utc};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::error::Error;
use url::Url;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
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
}

#[derive(Debug, Deserialize)]
pub struct RelatedArticle {
    pub id: i64,
    pub title: String,
    pub category: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDetail {
    #[serde(flatten)]
    pub article: Article,
    pub related_news: Vec<RelatedArticle>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsPage {
    pub news: Vec<Article>,
    pub total_pages: u64,
    pub current_page: i64,
}

/// Body for create and update. Unset fields are left out of the JSON.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    message: String,
}

#[derive(Debug, Clone, Copy)]
pub struct Paging {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

pub struct NewsClient {
    client: Client,
    base: Url,
}

impl NewsClient {
    pub fn new(service_url: &str) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            client: Client::new(),
            base: Url::parse(service_url)?,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, Box<dyn Error>> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| "service URL cannot be used as a base")?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn paged(mut url: Url, paging: Paging, state: Option<&str>) -> Url {
        {
            let mut query = url.query_pairs_mut();
            if let Some(page) = paging.page {
                query.append_pair("page", &page.to_string());
            }
            if let Some(limit) = paging.limit {
                query.append_pair("limit", &limit.to_string());
            }
            if let Some(state) = state {
                query.append_pair("state", state);
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }
        url
    }

    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, Box<dyn Error>> {
        let response = request.send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn check(response: Response) -> Result<Response, Box<dyn Error>> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await?;
        let message = serde_json::from_str::<MessageResponse>(&text)
            .map(|body| body.message)
            .unwrap_or(text);
        Err(format!("{status}: {message}").into())
    }

    pub async fn list(&self, paging: Paging) -> Result<NewsPage, Box<dyn Error>> {
        let url = Self::paged(self.endpoint(&["api", "news"])?, paging, None);
        Self::send(self.client.get(url)).await
    }

    pub async fn featured(&self) -> Result<Vec<Article>, Box<dyn Error>> {
        let url = self.endpoint(&["api", "news", "featured"])?;
        Self::send(self.client.get(url)).await
    }

    pub async fn show(&self, id: &str) -> Result<ArticleDetail, Box<dyn Error>> {
        let url = self.endpoint(&["api", "news", id])?;
        Self::send(self.client.get(url)).await
    }

    pub async fn by_category(
        &self,
        category: &str,
        state: Option<&str>,
        paging: Paging,
    ) -> Result<NewsPage, Box<dyn Error>> {
        let url = Self::paged(self.endpoint(&["api", "category", category])?, paging, state);
        Self::send(self.client.get(url)).await
    }

    pub async fn by_state(&self, state: &str, paging: Paging) -> Result<NewsPage, Box<dyn Error>> {
        let url = Self::paged(self.endpoint(&["api", "state", state])?, paging, None);
        Self::send(self.client.get(url)).await
    }

    pub async fn categories(&self) -> Result<Vec<String>, Box<dyn Error>> {
        let url = self.endpoint(&["api", "category"])?;
        Self::send(self.client.get(url)).await
    }

    pub async fn states(&self) -> Result<Vec<String>, Box<dyn Error>> {
        let url = self.endpoint(&["api", "state"])?;
        Self::send(self.client.get(url)).await
    }

    pub async fn create(&self, fields: &ArticleFields) -> Result<Article, Box<dyn Error>> {
        let url = self.endpoint(&["api", "news"])?;
        Self::send(self.client.post(url).json(fields)).await
    }

    pub async fn update(&self, id: &str, fields: &ArticleFields) -> Result<Article, Box<dyn Error>> {
        let url = self.endpoint(&["api", "news", id])?;
        Self::send(self.client.patch(url).json(fields)).await
    }

    pub async fn delete(&self, id: &str) -> Result<String, Box<dyn Error>> {
        let url = self.endpoint(&["api", "news", id])?;
        let response: MessageResponse = Self::send(self.client.delete(url)).await?;
        Ok(response.message)
    }
}
