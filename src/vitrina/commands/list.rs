use crate::commands::categories::unique_categories;
use crate::commands::filter::filter_products;
use crate::commands::{CmdMessage, CmdResult};
use crate::display::display_products;
use crate::model::ALL_CATEGORIES;
use crate::store::Catalog;

pub fn run(catalog: &Catalog, recipient: &str, query: &str, category: &str) -> CmdResult {
    let categories = unique_categories(catalog.products());
    let matched = filter_products(catalog.products(), query, category);
    tracing::debug!(
        query,
        category,
        matched = matched.len(),
        total = catalog.len(),
        "catalog filtered"
    );

    let mut result = CmdResult::default()
        .with_listed_products(display_products(matched, recipient))
        .with_total(catalog.len());

    if category != ALL_CATEGORIES && !categories.iter().any(|c| c == category) {
        result.add_message(CmdMessage::warning(format!(
            "Categoría desconocida: {}",
            category
        )));
    }

    result.with_categories(categories)
}
