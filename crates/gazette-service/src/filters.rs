use crate::models::DEFAULT_STATE;

/// Escape character used in `LIKE` patterns built by [`contains_pattern`].
pub const LIKE_ESCAPE: char = '\\';

/// Optional restrictions applied to an article listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    /// Case-insensitive substring of the category.
    pub category: Option<String>,
    /// Exact state.
    pub state: Option<String>,
    pub featured: Option<bool>,
}

impl ArticleFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn featured() -> Self {
        Self {
            featured: Some(true),
            ..Self::default()
        }
    }

    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }

    pub fn state(state: &str) -> Self {
        Self::all().with_state(Some(state))
    }

    /// "National" means no state restriction.
    pub fn with_state(mut self, state: Option<&str>) -> Self {
        self.state = state
            .filter(|state| *state != DEFAULT_STATE)
            .map(str::to_string);
        self
    }
}

/// `LIKE` pattern matching `needle` anywhere, with wildcards in the input escaped.
pub fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
