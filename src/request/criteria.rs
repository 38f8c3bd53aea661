//! Shape-agnostic filter criteria
//!
//! [`FilterCriteria`] holds a search request in either of its two shapes and
//! is what travels over the navigation hand-off. The consuming screen calls
//! [`FilterCriteria::resolve`] when it needs category identity.
//!
//! # Payload Format
//!
//! The hand-off payload is JSON, tagged by `shape`:
//!
//! ```json
//! {"shape":"entities","selectedCategoryFilters":[{"id":1,"name":"Beer"}],"keyword":"ipa"}
//! {"shape":"labels","categories":["Beer"],"searchText":"ipa"}
//! ```

use super::{LabelSearchRequest, RequestError, SearchRequest};
use crate::category::Category;
use serde::{Deserialize, Serialize};

/// How category labels are compared with category names during resolution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelMatching {
    /// Label must equal the name exactly
    #[default]
    Exact,
    /// Label and name are compared after lowercasing
    IgnoreCase,
}

impl LabelMatching {
    /// Check whether `label` refers to a category named `name`
    #[must_use]
    pub fn matches(self, label: &str, name: &str) -> bool {
        match self {
            Self::Exact => label == name,
            Self::IgnoreCase => label.to_lowercase() == name.to_lowercase(),
        }
    }
}

/// A category filter set plus an optional keyword, in either shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum FilterCriteria {
    /// Categories carried as entities
    Entities(SearchRequest),
    /// Categories carried as display names
    Labels(LabelSearchRequest),
}

impl FilterCriteria {
    /// Criteria from category entities
    #[must_use]
    pub const fn by_category_entities(categories: Option<Vec<Category>>, keyword: Option<String>) -> Self {
        Self::Entities(SearchRequest::new(categories, keyword))
    }

    /// Criteria from category display names
    #[must_use]
    pub const fn by_category_labels(labels: Option<Vec<String>>, keyword: Option<String>) -> Self {
        Self::Labels(LabelSearchRequest::new(labels, keyword))
    }

    /// The free-text keyword, whichever shape carries it
    #[must_use]
    pub fn keyword(&self) -> Option<&str> {
        match self {
            Self::Entities(request) => request.keyword(),
            Self::Labels(request) => request.search_text(),
        }
    }

    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        match self {
            Self::Entities(request) => request.is_unrestricted(),
            Self::Labels(request) => request.is_unrestricted(),
        }
    }

    /// Convert to the entity shape, looking labels up in `catalog`
    ///
    /// Entity criteria are returned as they are. Labels are matched against
    /// category names in label order; the first matching catalog entry wins.
    /// The keyword is carried over unchanged.
    ///
    /// # Errors
    ///
    /// Returns `RequestError::UnknownCategory` for the first label with no match.
    pub fn resolve(&self, catalog: &[Category], matching: LabelMatching) -> Result<SearchRequest, RequestError> {
        match self {
            Self::Entities(request) => Ok(request.clone()),
            Self::Labels(request) => {
                let categories = request
                    .categories()
                    .map(|labels| {
                        labels
                            .iter()
                            .map(|label| lookup(catalog, label, matching))
                            .collect::<Result<Vec<_>, _>>()
                    })
                    .transpose()?;

                Ok(SearchRequest::new(
                    categories,
                    request.search_text().map(str::to_owned),
                ))
            }
        }
    }

    /// Encode for the navigation hand-off
    ///
    /// # Errors
    ///
    /// Returns `RequestError::Payload` if serialization fails.
    pub fn to_payload(&self) -> Result<String, RequestError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a navigation hand-off payload
    ///
    /// # Errors
    ///
    /// Returns `RequestError::Payload` if the payload is not valid criteria.
    pub fn from_payload(payload: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(payload)?)
    }
}

fn lookup(catalog: &[Category], label: &str, matching: LabelMatching) -> Result<Category, RequestError> {
    catalog
        .iter()
        .find(|category| matching.matches(label, category.name()))
        .cloned()
        .ok_or_else(|| {
            tracing::debug!(label, "category label not found in catalog");
            RequestError::UnknownCategory(label.to_string())
        })
}

impl From<SearchRequest> for FilterCriteria {
    fn from(request: SearchRequest) -> Self {
        Self::Entities(request)
    }
}

impl From<LabelSearchRequest> for FilterCriteria {
    fn from(request: LabelSearchRequest) -> Self {
        Self::Labels(request)
    }
}
