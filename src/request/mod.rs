//! Search requests handed from the selection screen to the results screen
//!
//! A search request is a set of category filters plus an optional free-text
//! keyword. It exists in two shapes:
//!
//! - **`SearchRequest`**: categories carried as [`Category`] entities
//! - **`LabelSearchRequest`**: categories carried as display names, keyword
//!   stored as `search_text`
//!
//! [`FilterCriteria`] wraps either shape and converts labels to entities when
//! identity is needed.
//!
//! Nothing here normalizes input. Keywords are not trimmed or case-folded and
//! duplicate categories are kept; interpreting them is up to the consumer that
//! filters the drink collection.
//!
//! # Examples
//!
//! ```
//! use catalog_search::category::Category;
//! use catalog_search::request::SearchRequest;
//!
//! let request = SearchRequest::builder()
//!     .category(Category::new(1, "Beer").unwrap())
//!     .keyword("ipa")
//!     .build();
//!
//! assert_eq!(request.category_ids(), vec![1]);
//! assert_eq!(request.keyword(), Some("ipa"));
//! ```

pub mod criteria;
pub mod error;
pub mod labels;

pub use criteria::{FilterCriteria, LabelMatching};
pub use error::RequestError;
pub use labels::LabelSearchRequest;

use crate::category::{Category, CategoryId};
use serde::{Deserialize, Serialize};

/// A pending search over the drink catalog
///
/// Read-only once built. Cloning hands the consumer its own copy, so the
/// originating screen never observes later changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SearchRequest {
    #[serde(default)]
    selected_category_filters: Option<Vec<Category>>,
    #[serde(default)]
    keyword: Option<String>,
}

impl SearchRequest {
    /// Create a request from optional filters and an optional keyword
    ///
    /// Both inputs are stored as given; `None` and empty both mean "no restriction".
    #[must_use]
    pub const fn new(category_filters: Option<Vec<Category>>, keyword: Option<String>) -> Self {
        Self {
            selected_category_filters: category_filters,
            keyword,
        }
    }

    #[must_use]
    pub fn builder() -> SearchRequestBuilder {
        SearchRequestBuilder::default()
    }

    #[must_use]
    pub fn selected_category_filters(&self) -> Option<&[Category]> {
        self.selected_category_filters.as_deref()
    }

    #[must_use]
    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    /// Identifiers of the selected categories, in selection order
    #[must_use]
    pub fn category_ids(&self) -> Vec<CategoryId> {
        self.selected_category_filters()
            .unwrap_or_default()
            .iter()
            .map(Category::id)
            .collect()
    }

    /// True when at least one category filter is selected
    #[must_use]
    pub fn has_category_filter(&self) -> bool {
        self.selected_category_filters
            .as_ref()
            .is_some_and(|c| !c.is_empty())
    }

    /// True when the keyword is present and non-empty
    #[must_use]
    pub fn has_keyword(&self) -> bool {
        self.keyword.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// True when the request restricts nothing
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        !self.has_category_filter() && !self.has_keyword()
    }

    /// Split the request into its filters and keyword
    #[must_use]
    pub fn into_parts(self) -> (Option<Vec<Category>>, Option<String>) {
        (self.selected_category_filters, self.keyword)
    }
}

/// Builder for `SearchRequest`
///
/// Filters stay absent unless `category` or `categories` is called.
#[derive(Debug, Clone, Default)]
pub struct SearchRequestBuilder {
    categories: Option<Vec<Category>>,
    keyword: Option<String>,
}

impl SearchRequestBuilder {
    /// Add a single category filter
    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.categories.get_or_insert_with(Vec::new).push(category);
        self
    }

    /// Replace the category filters
    #[must_use]
    pub fn categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = Some(categories);
        self
    }

    /// Set the free-text keyword
    #[must_use]
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    #[must_use]
    pub fn build(self) -> SearchRequest {
        SearchRequest::new(self.categories, self.keyword)
    }
}
