//! # Catalog Store
//!
//! The catalog is an immutable list of [`Product`]s, loaded once through a
//! [`CatalogSource`] and never written back.
//!
//! ## Implementations
//!
//! - [`bundled::BundledSource`]: the dataset compiled into the binary
//!   (`data/products.json`)
//! - [`fs::JsonFileSource`]: a JSON array of products read from disk
//! - [`memory::InMemorySource`]: a fixed list, for testing
//!
//! Sources only parse. They do not check codes for uniqueness or fill in
//! categories; normalization happens in the derivations that need it.

use crate::error::Result;
use crate::model::Product;

pub mod bundled;
pub mod fs;
pub mod memory;

/// Abstract interface for where the product list comes from.
pub trait CatalogSource {
    /// Read the full product list, in source order.
    fn load(&self) -> Result<Vec<Product>>;

    /// Human readable origin, used in logs and `info` style output.
    fn describe(&self) -> String;
}

/// The loaded, read-only product list.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn from_source<S: CatalogSource>(source: &S) -> Result<Self> {
        let products = source.load()?;
        tracing::debug!(
            source = %source.describe(),
            count = products.len(),
            "catalog loaded"
        );
        Ok(Self::new(products))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// First product with exactly this code. Duplicate codes resolve to the earliest entry.
    pub fn find(&self, code: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.code == code)
    }
}

/// Parses a JSON array of products.
pub(crate) fn parse_products(json: &str) -> Result<Vec<Product>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::memory::InMemorySource;
    use super::*;

    #[test]
    fn find_returns_first_duplicate() {
        let catalog = Catalog::new(vec![
            Product::new("A1", "First", 1.0, ""),
            Product::new("A1", "Second", 2.0, ""),
        ]);
        assert_eq!(catalog.find("A1").unwrap().name, "First");
        assert!(catalog.find("a1").is_none());
    }

    #[test]
    fn from_source_keeps_source_order() {
        let source = InMemorySource::new(vec![
            Product::new("B2", "Cadena", 3000.0, "Cadenas"),
            Product::new("A1", "Soga", 1500.0, "Sogas"),
        ]);
        let catalog = Catalog::from_source(&source).unwrap();
        let codes: Vec<_> = catalog.products().iter().map(|p| p.code.as_str()).collect();
        assert_eq!(codes, vec!["B2", "A1"]);
    }

    #[test]
    fn parse_rejects_non_array() {
        assert!(parse_products(r#"{"code":"A1"}"#).is_err());
    }

    #[test]
    fn parse_accepts_empty_array() {
        assert!(parse_products("[]").unwrap().is_empty());
    }
}
