use crate::error::{Result, VitrinaError};
use crate::model::Product;
use crate::store::Catalog;

/// Looks up a product by exact code, trimming surrounding whitespace from user input.
pub fn product_by_code<'a>(catalog: &'a Catalog, code: &str) -> Result<&'a Product> {
    let code = code.trim();
    catalog
        .find(code)
        .ok_or_else(|| VitrinaError::ProductNotFound(code.to_string()))
}
