use super::CatalogSource;
use crate::error::Result;
use crate::model::Product;

/// In-memory catalog source for testing and embedding.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    products: Vec<Product>,
}

impl InMemorySource {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl CatalogSource for InMemorySource {
    fn load(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }

    fn describe(&self) -> String {
        format!("memory ({} products)", self.products.len())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// A small hardware catalog covering every placeholder keyword and an uncategorized item.
    pub fn hardware_products() -> Vec<Product> {
        vec![
            Product::new("SG-10", "Soga de nylon 10mm", 1500.0, "Sogas"),
            Product::new("MQ-8", "Mosquetón acero 8mm", 2300.0, "Mosquetones"),
            Product::new("CD-6", "Cadena galvanizada 6mm", 3000.0, "Cadenas"),
            Product::new("GR-12", "Grillete lira 12mm", 1850.5, "Grilletes")
                .with_image("https://cdn.example.com/gr-12.png"),
            Product::new("AR-30", "Argolla soldada 30mm", 420.0, "Argollas"),
            Product::new("TQ-5", "Torniquete ojo-gancho", 990.0, "Torniquetas"),
            Product::new("XX-1", "Precinto plástico", 75.0, ""),
        ]
    }

    pub fn hardware_source() -> InMemorySource {
        InMemorySource::new(hardware_products())
    }
}
