//! Image locations for products.
//!
//! [`product_image_url`] only *predicts* where the image lives. Whether it actually
//! loads is up to the display layer, which falls back once to the category
//! placeholder from [`category_placeholder`] (see [`display_image`]).

use crate::model::Product;

pub const IMAGES_DIR: &str = "/images";
pub const IMAGE_EXT: &str = ".jpg";
pub const DEFAULT_PLACEHOLDER: &str = "/placeholders/otros.svg";

/// Keyword → placeholder, checked in order against the lower-cased category.
const PLACEHOLDERS: &[(&str, &str)] = &[
    ("soga", "/placeholders/sogas.svg"),
    ("mosquet", "/placeholders/mosquetones.svg"),
    ("argoll", "/placeholders/argollas.svg"),
    ("cadena", "/placeholders/cadenas.svg"),
    ("torniq", "/placeholders/torniquetas.svg"),
    ("grill", "/placeholders/grilletes.svg"),
];

/// Explicit image when present and non-blank, otherwise `/images/{code}.jpg`.
pub fn product_image_url(product: &Product) -> String {
    match product.image.as_deref().map(str::trim) {
        Some(image) if !image.is_empty() => image.to_string(),
        _ => format!("{}/{}{}", IMAGES_DIR, product.code, IMAGE_EXT),
    }
}

/// Placeholder image for a raw category string. First keyword match wins.
pub fn category_placeholder(category: &str) -> &'static str {
    let key = category.to_lowercase();
    PLACEHOLDERS
        .iter()
        .find(|(keyword, _)| key.contains(keyword))
        .map(|(_, placeholder)| *placeholder)
        .unwrap_or(DEFAULT_PLACEHOLDER)
}

/// Resolves the image to show: the predicted URL if `loads` accepts it, otherwise the
/// category placeholder. `loads` is consulted exactly once.
pub fn display_image<F>(product: &Product, loads: F) -> String
where
    F: FnOnce(&str) -> bool,
{
    let predicted = product_image_url(product);
    if loads(&predicted) {
        predicted
    } else {
        category_placeholder(&product.category).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn derives_url_from_code_when_image_is_empty() {
        let p = Product::new("A1", "Soga", 1.0, "Sogas").with_image("");
        assert_eq!(product_image_url(&p), "/images/A1.jpg");
    }

    #[test]
    fn derives_url_from_code_when_image_is_absent_or_blank() {
        let p = Product::new("A1", "Soga", 1.0, "Sogas");
        assert_eq!(product_image_url(&p), "/images/A1.jpg");
        let blank = p.with_image("   ");
        assert_eq!(product_image_url(&blank), "/images/A1.jpg");
    }

    #[test]
    fn uses_explicit_image_verbatim() {
        let p = Product::new("A1", "Soga", 1.0, "Sogas").with_image("https://x/y.png");
        assert_eq!(product_image_url(&p), "https://x/y.png");
    }

    #[test]
    fn placeholder_matches_keyword_anywhere() {
        assert_eq!(
            category_placeholder("Sogas de nylon"),
            "/placeholders/sogas.svg"
        );
        assert_eq!(
            category_placeholder("MOSQUETONES"),
            "/placeholders/mosquetones.svg"
        );
        assert_eq!(
            category_placeholder("Grilletes y accesorios"),
            "/placeholders/grilletes.svg"
        );
    }

    #[test]
    fn placeholder_first_match_wins() {
        assert_eq!(
            category_placeholder("Cadenas con sogas"),
            "/placeholders/sogas.svg"
        );
    }

    #[test]
    fn placeholder_defaults_for_unknown_or_empty() {
        assert_eq!(category_placeholder("Unknown"), DEFAULT_PLACEHOLDER);
        assert_eq!(category_placeholder(""), DEFAULT_PLACEHOLDER);
    }

    #[test]
    fn display_image_keeps_prediction_when_it_loads() {
        let p = Product::new("A1", "Soga", 1.0, "Sogas");
        assert_eq!(display_image(&p, |_| true), "/images/A1.jpg");
    }

    #[test]
    fn display_image_falls_back_once() {
        let calls = Cell::new(0);
        let p = Product::new("C1", "Cadena", 1.0, "Cadenas");
        let shown = display_image(&p, |url| {
            calls.set(calls.get() + 1);
            assert_eq!(url, "/images/C1.jpg");
            false
        });
        assert_eq!(shown, "/placeholders/cadenas.svg");
        assert_eq!(calls.get(), 1);
    }
}
