//! Label-based search request
//!
//! The older shape of a search request: categories are carried by display
//! name and the keyword is called `search_text`. It means the same thing as
//! [`SearchRequest`](super::SearchRequest); use
//! [`FilterCriteria::resolve`](super::FilterCriteria::resolve) to turn the
//! labels back into entities.

use serde::{Deserialize, Serialize};

/// Search request carrying category labels instead of entities
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LabelSearchRequest {
    #[serde(default)]
    categories: Option<Vec<String>>,
    #[serde(default)]
    search_text: Option<String>,
}

impl LabelSearchRequest {
    /// Create a request from optional labels and optional search text, stored as given
    #[must_use]
    pub const fn new(categories: Option<Vec<String>>, search_text: Option<String>) -> Self {
        Self {
            categories,
            search_text,
        }
    }

    #[must_use]
    pub fn categories(&self) -> Option<&[String]> {
        self.categories.as_deref()
    }

    #[must_use]
    pub fn search_text(&self) -> Option<&str> {
        self.search_text.as_deref()
    }

    #[must_use]
    pub fn has_category_filter(&self) -> bool {
        self.categories.as_ref().is_some_and(|c| !c.is_empty())
    }

    #[must_use]
    pub fn has_search_text(&self) -> bool {
        self.search_text.as_ref().is_some_and(|t| !t.is_empty())
    }

    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        !self.has_category_filter() && !self.has_search_text()
    }

    #[must_use]
    pub fn into_parts(self) -> (Option<Vec<String>>, Option<String>) {
        (self.categories, self.search_text)
    }
}
