use crate::model::{Product, ALL_CATEGORIES};

/// Category gate: passes everything for [`ALL_CATEGORIES`], otherwise an exact,
/// case-sensitive match on the normalized label.
pub fn matches_category(product: &Product, selected: &str) -> bool {
    selected == ALL_CATEGORIES || product.category_label() == selected
}

/// Substring test against code, name and raw category. `needle` must already be
/// trimmed and lower-cased; an empty needle matches everything.
pub fn matches_query(product: &Product, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    product.code.to_lowercase().contains(needle)
        || product.name.to_lowercase().contains(needle)
        || product.category.to_lowercase().contains(needle)
}

/// Normalizes user search text the way [`matches_query`] expects it.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Products passing both the category gate and the search, in catalog order.
pub fn filter_products<'a>(
    products: &'a [Product],
    query: &str,
    category: &str,
) -> Vec<&'a Product> {
    let needle = normalize_query(query);
    products
        .iter()
        .filter(|p| matches_category(p, category) && matches_query(p, &needle))
        .collect()
}
