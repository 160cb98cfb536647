//! Outbound "ask about this product" links.
//!
//! Only builds strings. Opening the link is the caller's business.

use crate::model::Product;
use crate::price::format_ars;

const WHATSAPP_BASE: &str = "https://wa.me";

/// The message sent with an inquiry.
pub fn inquiry_message(product: &Product) -> String {
    format!(
        "Hola! Consulto por: {} - {} ({})",
        product.code,
        product.name,
        format_ars(product.price_ars)
    )
}

/// `https://wa.me/{recipient}?text={encoded message}`
pub fn whatsapp_link(product: &Product, recipient: &str) -> String {
    format!(
        "{}/{}?text={}",
        WHATSAPP_BASE,
        recipient,
        urlencoding::encode(&inquiry_message(product))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rope() -> Product {
        Product::new("A1", "Rope 10mm", 1500.0, "Ropes")
    }

    #[test]
    fn message_embeds_code_name_and_price() {
        assert_eq!(
            inquiry_message(&rope()),
            "Hola! Consulto por: A1 - Rope 10mm ($\u{a0}1.500)"
        );
    }

    #[test]
    fn link_targets_recipient() {
        let link = whatsapp_link(&rope(), "5491112345678");
        assert!(link.starts_with("https://wa.me/5491112345678?text="));
    }

    #[test]
    fn link_text_is_encoded_and_decodes_back() {
        let link = whatsapp_link(&rope(), "5491112345678");
        let (_, encoded) = link.split_once("?text=").unwrap();
        assert!(!encoded.contains(' '));
        assert!(encoded.contains("%C2%A0"));
        let decoded = urlencoding::decode(encoded).unwrap();
        assert_eq!(decoded, inquiry_message(&rope()));
    }

    #[test]
    fn reserved_characters_in_names_are_escaped() {
        let p = Product::new("Q&A", "Torniqueta 1/2\" #8", 10.0, "");
        let link = whatsapp_link(&p, "1");
        let (_, encoded) = link.split_once("?text=").unwrap();
        assert!(!encoded.contains('&'));
        assert!(!encoded.contains('#'));
        assert!(!encoded.contains('/'));
    }
}
