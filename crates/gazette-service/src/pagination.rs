//! Page arithmetic shared by every article listing.
//!
//! A listing is described by a [`PageRequest`] (1-based page number plus page
//! size) and answered with a [`Page`]: the items in the window, the total
//! number of pages for the whole result set and the page that was served.

use serde::Serialize;

use crate::validation::{ValidationError, parse_integer};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;
pub const DEFAULT_MAX_LIMIT: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Values below 1 are clamped to 1.
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    pub fn first(limit: i64) -> Self {
        Self::new(1, limit)
    }

    /// Build a request from raw query-string values.
    ///
    /// Missing values take the defaults, non-numeric values are rejected,
    /// numbers below 1 are clamped to 1 and `limit` is capped at `max_limit`.
    pub fn parse(
        page: Option<&str>,
        limit: Option<&str>,
        max_limit: i64,
    ) -> Result<Self, ValidationError> {
        let page = parse_integer("page", page, DEFAULT_PAGE)?;
        let limit = parse_integer("limit", limit, DEFAULT_LIMIT)?;

        let request = Self::new(page, limit);
        Ok(Self {
            limit: request.limit.min(max_limit.max(1)),
            ..request
        })
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.limit as u64)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(rename = "news")]
    pub items: Vec<T>,
    pub total_pages: u64,
    pub current_page: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, request: &PageRequest) -> Self {
        Self {
            items,
            total_pages: request.total_pages(total),
            current_page: request.page,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_pages: self.total_pages,
            current_page: self.current_page,
        }
    }
}
