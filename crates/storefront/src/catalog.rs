//! Product catalog.
//!
//! The products offered on the home page, loaded once at startup from a
//! JSON file:
//!
//! ```json
//! [{"id": "espresso", "name": "Espresso Beans", "price": 14.5}]
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

use basket_core::{Product, ProductId};

/// Errors loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate product id in catalog: {0}")]
    DuplicateId(ProductId),
}

/// The list of products offered for sale.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate IDs.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if two products share an ID.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(&product.id) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }
        Ok(Self { products })
    }

    /// Parse a catalog from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed JSON or invalid products
    /// (blank IDs, negative prices), or `CatalogError::DuplicateId`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Self::new(serde_json::from_str(json)?)
    }

    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read, otherwise as
    /// [`Self::from_json`].
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            products = catalog.products.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// All products in file order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(
            r#"[{"id": "a", "name": "Apple", "price": 1.25},
                {"id": "b", "name": "Banana", "price": 0.5}]"#,
        )
        .unwrap();

        assert_eq!(catalog.products().len(), 2);
        let apple = &catalog.products()[0];
        assert_eq!(apple.id.as_str(), "a");
        assert_eq!(apple.price.to_fixed(), "1.25");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::from_json(
            r#"[{"id": "a", "name": "A", "price": 1}, {"id": "a", "name": "B", "price": 2}]"#,
        );
        assert!(matches!(result, Err(CatalogError::DuplicateId(_))));
    }

    #[test]
    fn test_invalid_products_rejected() {
        assert!(Catalog::from_json(r#"[{"id": "", "name": "A", "price": 1}]"#).is_err());
        assert!(Catalog::from_json(r#"[{"id": "a", "name": "A", "price": -1}]"#).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = Catalog::load(Path::new("/nonexistent/products.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
