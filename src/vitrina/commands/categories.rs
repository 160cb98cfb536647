use crate::commands::CmdResult;
use crate::model::{Product, ALL_CATEGORIES};
use crate::store::Catalog;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// The category selector: [`ALL_CATEGORIES`] followed by every distinct category label
/// (empty ones folded into "Otros"), in locale order.
pub fn unique_categories(products: &[Product]) -> Vec<String> {
    // a product literally categorized "Todas" is only reachable through the sentinel
    let distinct: BTreeSet<&str> = products
        .iter()
        .map(Product::category_label)
        .filter(|label| *label != ALL_CATEGORIES)
        .collect();

    let mut labels: Vec<&str> = distinct.into_iter().collect();
    labels.sort_by(|a, b| locale_cmp(a, b));

    std::iter::once(ALL_CATEGORIES)
        .chain(labels)
        .map(str::to_string)
        .collect()
}

/// Accent and case insensitive first; accents, then lower-before-upper break ties.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| secondary_key(a).cmp(&secondary_key(b)))
        // strings now differ only in case; lowercase has the higher code point
        .then_with(|| b.cmp(a))
}

/// Base letters only, except `ñ`, which is its own letter sorted right after `n`.
fn primary_key(s: &str) -> String {
    let mut key = String::with_capacity(s.len());
    for c in s.to_lowercase().nfc() {
        if c == 'ñ' {
            key.push('n');
            key.push(char::MAX);
        } else {
            key.extend(std::iter::once(c).nfd().filter(|c| !is_combining_mark(*c)));
        }
    }
    key
}

fn secondary_key(s: &str) -> String {
    s.to_lowercase().nfd().collect()
}

pub fn run(catalog: &Catalog) -> CmdResult {
    let categories = unique_categories(catalog.products());
    tracing::debug!(count = categories.len() - 1, "categories derived");
    CmdResult::default()
        .with_categories(categories)
        .with_total(catalog.len())
}
