//! Category data providers
//!
//! A provider is the external source of the canonical category list. The
//! listing facade receives one by injection, so tests can swap in a substitute.
//!
//! # Providers
//!
//! - **`StaticCategoryProvider`**: Serves a fixed in-memory list
//! - **`TomlCategoryProvider`**: Reads a TOML file on every call
//!
//! # File Format
//!
//! ```toml
//! [[categories]]
//! id = 1
//! name = "Beer"
//!
//! [[categories]]
//! id = 2
//! name = "Wine"
//! ```

use super::{Category, CategoryError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;

/// Source of the canonical category list
pub trait CategoryProvider {
    /// Error raised by the provider, passed through to callers unchanged
    type Error: std::error::Error;

    /// Fetch every drink category, in the provider's own order
    ///
    /// # Errors
    ///
    /// Returns the provider's error if the categories cannot be fetched.
    fn drink_categories(&self) -> Result<Vec<Category>, Self::Error>;
}

impl<P: CategoryProvider + ?Sized> CategoryProvider for &P {
    type Error = P::Error;

    fn drink_categories(&self) -> Result<Vec<Category>, Self::Error> {
        (**self).drink_categories()
    }
}

impl<P: CategoryProvider + ?Sized> CategoryProvider for Box<P> {
    type Error = P::Error;

    fn drink_categories(&self) -> Result<Vec<Category>, Self::Error> {
        (**self).drink_categories()
    }
}

impl<P: CategoryProvider + ?Sized> CategoryProvider for Rc<P> {
    type Error = P::Error;

    fn drink_categories(&self) -> Result<Vec<Category>, Self::Error> {
        (**self).drink_categories()
    }
}

impl<P: CategoryProvider + ?Sized> CategoryProvider for Arc<P> {
    type Error = P::Error;

    fn drink_categories(&self) -> Result<Vec<Category>, Self::Error> {
        (**self).drink_categories()
    }
}

/// Provider serving a fixed list of categories
#[derive(Debug, Clone, Default)]
pub struct StaticCategoryProvider {
    categories: Vec<Category>,
}

impl StaticCategoryProvider {
    #[must_use]
    pub const fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }
}

impl CategoryProvider for StaticCategoryProvider {
    type Error = std::convert::Infallible;

    fn drink_categories(&self) -> Result<Vec<Category>, Self::Error> {
        Ok(self.categories.clone())
    }
}

#[derive(Deserialize)]
struct CategoryFile {
    #[serde(default)]
    categories: Vec<Category>,
}

/// Provider reading categories from a TOML file
///
/// The file is read on every call; edits show up on the next listing.
#[derive(Debug, Clone)]
pub struct TomlCategoryProvider {
    path: PathBuf,
}

impl TomlCategoryProvider {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CategoryProvider for TomlCategoryProvider {
    type Error = CategoryError;

    fn drink_categories(&self) -> Result<Vec<Category>, Self::Error> {
        if !self.path.exists() {
            return Err(CategoryError::NotFound(self.path.display().to_string()));
        }

        let contents = fs::read_to_string(&self.path)?;
        let file: CategoryFile = toml::from_str(&contents)?;
        Ok(file.categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::CategoryListingSource;
    use crate::testing::{sample_categories, write_category_file};
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("categories.toml");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_static_provider_returns_list_in_order() {
        let provider = StaticCategoryProvider::new(vec![
            Category::new(2, "Wine").unwrap(),
            Category::new(1, "Beer").unwrap(),
        ]);

        let categories = provider.drink_categories().unwrap();
        let ids: Vec<_> = categories.iter().map(Category::id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_static_provider_empty() {
        let provider = StaticCategoryProvider::default();
        assert!(provider.drink_categories().unwrap().is_empty());
    }

    #[test]
    fn test_toml_provider_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = write_category_file(dir.path(), &sample_categories());

        let categories = TomlCategoryProvider::new(&path).drink_categories().unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name(), "Beer");
        assert_eq!(categories[1].id(), 2);
    }

    #[test]
    fn test_toml_provider_keeps_duplicates() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "[[categories]]\nid = 1\nname = \"Beer\"\n\n[[categories]]\nid = 1\nname = \"Ale\"\n",
        );

        let categories = TomlCategoryProvider::new(&path).drink_categories().unwrap();
        assert_eq!(categories.len(), 2);
    }

    #[test]
    fn test_toml_provider_sees_edits() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "[[categories]]\nid = 1\nname = \"Beer\"\n");
        let provider = TomlCategoryProvider::new(&path);
        assert_eq!(provider.drink_categories().unwrap().len(), 1);

        write_file(
            &dir,
            "[[categories]]\nid = 1\nname = \"Beer\"\n\n[[categories]]\nid = 3\nname = \"Cider\"\n",
        );
        assert_eq!(provider.drink_categories().unwrap().len(), 2);
    }

    #[test]
    fn test_toml_provider_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "");

        let categories = TomlCategoryProvider::new(&path).drink_categories().unwrap();
        assert!(categories.is_empty());
    }

    #[test]
    fn test_toml_provider_missing_file() {
        let dir = TempDir::new().unwrap();
        let provider = TomlCategoryProvider::new(dir.path().join("missing.toml"));

        let result = provider.drink_categories();
        assert!(matches!(result, Err(CategoryError::NotFound(_))));
    }

    #[test]
    fn test_toml_provider_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "[[categories]\nid = ");

        let result = TomlCategoryProvider::new(&path).drink_categories();
        assert!(matches!(result, Err(CategoryError::Parse(_))));
    }

    #[test]
    fn test_toml_provider_rejects_empty_name() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "[[categories]]\nid = 4\nname = \"\"\n");

        let result = TomlCategoryProvider::new(&path).drink_categories();
        assert!(matches!(result, Err(CategoryError::Parse(_))));
    }

    #[test]
    fn test_listing_over_boxed_provider() {
        let provider: Box<StaticCategoryProvider> = Box::new(StaticCategoryProvider::new(sample_categories()));
        let source = CategoryListingSource::new(provider);

        let ids: Vec<_> = source.list_categories().unwrap().iter().map(Category::id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_listing_over_rc_provider() {
        let provider = Rc::new(StaticCategoryProvider::new(sample_categories()));
        let source = CategoryListingSource::new(Rc::clone(&provider));

        assert_eq!(source.list_categories().unwrap().len(), 2);
        assert_eq!(Rc::strong_count(&provider), 2);
    }

    #[test]
    fn test_shared_provider_via_arc() {
        let provider = Arc::new(StaticCategoryProvider::new(vec![Category::new(1, "Beer").unwrap()]));
        let shared = Arc::clone(&provider);

        assert_eq!(shared.drink_categories().unwrap().len(), 1);
        assert_eq!((&*provider).drink_categories().unwrap().len(), 1);
    }
}
