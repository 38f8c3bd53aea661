//! Drink categories and the listing facade
//!
//! A [`Category`] is an identified, named classification tag (e.g. "Beer").
//! Categories are produced by a [`CategoryProvider`] and handed to the UI
//! through a [`CategoryListingSource`], which the selection screen uses to let
//! the user pick filters for a search.
//!
//! # Examples
//!
//! ```
//! use catalog_search::category::{Category, CategoryListingSource, StaticCategoryProvider};
//!
//! let provider = StaticCategoryProvider::new(vec![
//!     Category::new(1, "Beer").unwrap(),
//!     Category::new(2, "Wine").unwrap(),
//! ]);
//! let source = CategoryListingSource::new(provider);
//!
//! let categories = source.list_categories().unwrap();
//! assert_eq!(categories.len(), 2);
//! ```

pub mod error;
pub mod listing;
pub mod provider;

pub use error::CategoryError;
pub use listing::CategoryListingSource;
pub use provider::{CategoryProvider, StaticCategoryProvider, TomlCategoryProvider};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Stable numeric identifier of a category
pub type CategoryId = u32;

/// A named classification tag attached to catalog items
///
/// Two categories are equal when their identifiers are equal; the display
/// name does not take part in comparison or hashing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawCategory")]
pub struct Category {
    id: CategoryId,
    name: String,
}

#[derive(Deserialize)]
struct RawCategory {
    id: CategoryId,
    name: String,
}

impl TryFrom<RawCategory> for Category {
    type Error = CategoryError;

    fn try_from(raw: RawCategory) -> Result<Self, Self::Error> {
        Self::new(raw.id, raw.name)
    }
}

impl Category {
    /// Create a category
    ///
    /// The name is stored as given.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::EmptyName` if `name` is empty.
    pub fn new(id: CategoryId, name: impl Into<String>) -> Result<Self, CategoryError> {
        let name = name.into();
        if name.is_empty() {
            return Err(CategoryError::EmptyName(id));
        }
        Ok(Self { id, name })
    }

    #[must_use]
    pub const fn id(&self) -> CategoryId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Category {}

impl Hash for Category {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
