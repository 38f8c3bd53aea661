//! Testing utilities for catalog-search
//!
//! Substitute category providers and fixtures shared by unit tests.
//!
//! Only available when compiled with `cfg(test)`.

use crate::category::{Category, CategoryProvider};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;

/// The `[Beer(1), Wine(2)]` fixture used throughout the tests
#[must_use]
pub fn sample_categories() -> Vec<Category> {
    vec![
        Category::new(1, "Beer").expect("valid fixture"),
        Category::new(2, "Wine").expect("valid fixture"),
    ]
}

/// Provider that records how many times it was asked for categories
#[derive(Debug, Default)]
pub struct CountingProvider {
    categories: Vec<Category>,
    calls: AtomicUsize,
}

impl CountingProvider {
    #[must_use]
    pub const fn new(categories: Vec<Category>) -> Self {
        Self {
            categories,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `drink_categories` calls so far
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CategoryProvider for CountingProvider {
    type Error = ProviderFailure;

    fn drink_categories(&self) -> Result<Vec<Category>, Self::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.categories.clone())
    }
}

/// Error raised by [`FailingProvider`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("provider failure: {0}")]
pub struct ProviderFailure(pub String);

/// Provider that fails on every call
#[derive(Debug, Default)]
pub struct FailingProvider {
    message: String,
    calls: AtomicUsize,
}

impl FailingProvider {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            calls: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CategoryProvider for FailingProvider {
    type Error = ProviderFailure;

    fn drink_categories(&self) -> Result<Vec<Category>, Self::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ProviderFailure(self.message.clone()))
    }
}

/// Write a `[[categories]]` TOML file into `dir` and return its path
///
/// # Panics
/// Panics if the file cannot be written.
pub fn write_category_file(dir: &Path, categories: &[Category]) -> PathBuf {
    let mut contents = String::new();
    for category in categories {
        contents.push_str(&format!(
            "[[categories]]\nid = {}\nname = \"{}\"\n\n",
            category.id(),
            category.name()
        ));
    }

    let path = dir.join("categories.toml");
    fs::write(&path, contents).expect("Failed to write category file");
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_counting_provider_counts() {
        let provider = CountingProvider::new(sample_categories());
        assert_eq!(provider.calls(), 0);

        provider.drink_categories().unwrap();
        provider.drink_categories().unwrap();
        assert_eq!(provider.calls(), 2);
    }

    #[test]
    fn test_failing_provider_fails() {
        let provider = FailingProvider::new("down");
        let err = provider.drink_categories().unwrap_err();

        assert_eq!(err.to_string(), "provider failure: down");
        assert_eq!(provider.calls(), 1);
    }

    #[test]
    fn test_write_category_file() {
        let dir = TempDir::new().unwrap();
        let path = write_category_file(dir.path(), &sample_categories());

        let contents = fs::read_to_string(path).unwrap();
        assert!(contents.contains("name = \"Beer\""));
        assert!(contents.contains("id = 2"));
    }
}
