//! Catalog search - filter coordination for a drink catalog browser
//!
//! This library carries the user's search criteria (category filters plus an
//! optional keyword) from the selection screen to the results screen, supplies
//! the selectable categories, and converts numeric fields to and from text.
//!
//! - [`category`]: `Category` entity, providers and the listing facade
//! - [`request`]: `SearchRequest`, the label-based shape and `FilterCriteria`
//! - [`codec`]: never-failing float/text conversion for editable fields
//! - [`config`]: where categories come from and how labels are matched

use thiserror::Error;

pub mod category;
pub mod codec;
pub mod config;
pub mod request;

#[cfg(test)]
pub mod testing;

pub use category::{Category, CategoryId, CategoryListingSource, CategoryProvider, TomlCategoryProvider};
pub use crate::config::CatalogConfig;
pub use request::{FilterCriteria, LabelMatching, LabelSearchRequest, SearchRequest};

/// Error enum, contains all failure states of the library
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Category error
    #[error("Category error: {0}")]
    CategoryError(#[from] category::CategoryError),
    /// Request error
    #[error("Request error: {0}")]
    RequestError(#[from] request::RequestError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

impl From<std::convert::Infallible> for CatalogError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

/// Load a config file and build a listing source for its category file
///
/// Returns the config together with the source, which is `None` when the
/// config names no category file.
///
/// # Errors
///
/// Returns `CatalogError::ConfigError` if the config file cannot be read or parsed.
pub fn load_listing_source(
    config_path: &std::path::Path,
) -> Result<(CatalogConfig, Option<CategoryListingSource<TomlCategoryProvider>>)> {
    let config = CatalogConfig::load_from(config_path)?;
    let source = config.category_provider().map(CategoryListingSource::new);
    Ok((config, source))
}

/// Resolve criteria against the categories currently listed by `source`
///
/// Entity criteria are returned without consulting the provider.
///
/// # Errors
///
/// Returns the provider's error (converted) if listing fails, or
/// `RequestError::UnknownCategory` if a label has no match.
pub fn resolve_criteria<P>(
    criteria: &FilterCriteria,
    source: &CategoryListingSource<P>,
    matching: LabelMatching,
) -> Result<SearchRequest>
where
    P: CategoryProvider,
    CatalogError: From<P::Error>,
{
    match criteria {
        FilterCriteria::Entities(request) => Ok(request.clone()),
        FilterCriteria::Labels(_) => {
            let catalog = source.list_categories()?;
            Ok(criteria.resolve(&catalog, matching)?)
        }
    }
}
