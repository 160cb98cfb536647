use super::{parse_products, CatalogSource};
use crate::error::{Result, VitrinaError};
use crate::model::Product;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads the catalog from a JSON file containing an array of products.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Product>> {
        if !self.path.exists() {
            return Err(VitrinaError::Catalog(format!(
                "Catalog file not found: {}",
                self.path.display()
            )));
        }
        let content = fs::read_to_string(&self.path)?;
        parse_products(&content)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn loads_products_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("products.json");
        fs::write(
            &path,
            r#"[{"code":"A1","name":"Soga 10mm","price_ars":1500,"category":"Sogas"},
                {"code":"B2","name":"Cadena","price_ars":3000,"category":"Cadenas","image":"https://x/y.png"}]"#,
        )
        .unwrap();

        let products = JsonFileSource::new(&path).load().unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].code, "A1");
        assert_eq!(products[1].image.as_deref(), Some("https://x/y.png"));
    }

    #[test]
    fn missing_file_is_a_catalog_error() {
        let temp = TempDir::new().unwrap();
        let err = JsonFileSource::new(temp.path().join("nope.json"))
            .load()
            .unwrap_err();
        assert!(matches!(err, VitrinaError::Catalog(_)));
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.json");
        fs::write(&path, "[{").unwrap();

        let err = JsonFileSource::new(&path).load().unwrap_err();
        assert!(matches!(err, VitrinaError::Serialization(_)));
    }
}
