//! Category listing facade for the selection screen

use super::{Category, CategoryProvider};

/// Supplies the selectable categories to the filter selection UI
///
/// Every call goes straight to the injected provider: no caching, sorting,
/// deduplication or retry. Provider errors are returned unchanged.
#[derive(Debug, Clone)]
pub struct CategoryListingSource<P> {
    provider: P,
}

impl<P: CategoryProvider> CategoryListingSource<P> {
    /// Create a listing source backed by `provider`
    #[must_use]
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }

    /// List all categories, exactly as the provider returns them
    ///
    /// # Errors
    ///
    /// Returns the provider's own error if it fails.
    pub fn list_categories(&self) -> Result<Vec<Category>, P::Error> {
        match self.provider.drink_categories() {
            Ok(categories) => {
                tracing::debug!(count = categories.len(), "listed drink categories");
                Ok(categories)
            }
            Err(e) => {
                tracing::warn!(error = %e, "category provider failed");
                Err(e)
            }
        }
    }

    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    #[must_use]
    pub fn into_inner(self) -> P {
        self.provider
    }
}
