use super::{parse_products, CatalogSource};
use crate::error::Result;
use crate::model::Product;

const BUNDLED_PRODUCTS: &str = include_str!("../../../data/products.json");

/// The product list shipped inside the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSource;

impl CatalogSource for BundledSource {
    fn load(&self) -> Result<Vec<Product>> {
        parse_products(BUNDLED_PRODUCTS)
    }

    fn describe(&self) -> String {
        "bundled dataset".to_string()
    }
}
