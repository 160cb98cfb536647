//! Presentation-ready product records.
//!
//! A [`DisplayProduct`] pairs a product with every derived field a display layer
//! needs (formatted price, predicted image, placeholder, contact link), so clients
//! never call the derivations piecemeal.

use crate::contact::whatsapp_link;
use crate::media::{category_placeholder, product_image_url};
use crate::model::Product;
use crate::price::format_ars;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayProduct {
    pub product: Product,
    pub price: String,
    pub image_url: String,
    pub placeholder: String,
    pub contact_link: String,
}

impl DisplayProduct {
    pub fn new(product: &Product, recipient: &str) -> Self {
        Self {
            price: format_ars(product.price_ars),
            image_url: product_image_url(product),
            placeholder: category_placeholder(&product.category).to_string(),
            contact_link: whatsapp_link(product, recipient),
            product: product.clone(),
        }
    }
}

pub fn display_products<'a, I>(products: I, recipient: &str) -> Vec<DisplayProduct>
where
    I: IntoIterator<Item = &'a Product>,
{
    products
        .into_iter()
        .map(|p| DisplayProduct::new(p, recipient))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_all_presentation_fields() {
        let p = Product::new("A1", "Soga 10mm", 1500.0, "Sogas");
        let dp = DisplayProduct::new(&p, "549");

        assert_eq!(dp.price, "$\u{a0}1.500");
        assert_eq!(dp.image_url, "/images/A1.jpg");
        assert_eq!(dp.placeholder, "/placeholders/sogas.svg");
        assert!(dp.contact_link.starts_with("https://wa.me/549?text="));
        assert_eq!(dp.product, p);
    }

    #[test]
    fn keeps_input_order() {
        let products = vec![
            Product::new("B", "b", 1.0, ""),
            Product::new("A", "a", 1.0, ""),
        ];
        let shown = display_products(&products, "1");
        assert_eq!(shown[0].product.code, "B");
        assert_eq!(shown[1].product.code, "A");
    }
}
