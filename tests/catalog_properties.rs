//! Property-based tests for the catalog derivations.

use proptest::prelude::*;
use std::cmp::Ordering;
use vitrina::commands::categories::{locale_cmp, unique_categories};
use vitrina::commands::filter::{filter_products, matches_category, matches_query, normalize_query};
use vitrina::model::{Product, ALL_CATEGORIES};
use vitrina::price::format_ars;

fn product() -> impl Strategy<Value = Product> {
    (
        "[A-Z]{1,3}-[0-9]{1,2}",
        "[a-zA-Záéñ ]{0,12}",
        0.0f64..100_000.0,
        prop_oneof![
            Just(""),
            Just("Sogas"),
            Just("sogas"),
            Just("Áncoras"),
            Just("Cadenas"),
            Just("Otros"),
            Just("Todas"),
        ],
    )
        .prop_map(|(code, name, price, category)| Product::new(code, name, price, category))
}

fn catalog() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec(product(), 0..24)
}

fn category_choice() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(ALL_CATEGORIES.to_string()),
        Just("Sogas".to_string()),
        Just("Otros".to_string()),
        Just("Poleas".to_string()),
    ]
}

fn positions(products: &[Product], picked: &[&Product]) -> Vec<usize> {
    picked
        .iter()
        .map(|p| {
            products
                .iter()
                .position(|candidate| std::ptr::eq(candidate, *p))
                .unwrap()
        })
        .collect()
}

proptest! {
    #[test]
    fn test_categories_start_with_all_and_are_sorted(products in catalog()) {
        let categories = unique_categories(&products);
        prop_assert_eq!(categories[0].as_str(), ALL_CATEGORIES);

        let rest = &categories[1..];
        for pair in rest.windows(2) {
            prop_assert_eq!(locale_cmp(&pair[0], &pair[1]), Ordering::Less);
        }
        prop_assert!(!rest.iter().any(|c| c == ALL_CATEGORIES));
    }

    #[test]
    fn test_categories_cover_every_label(products in catalog()) {
        let categories = unique_categories(&products);
        for p in products.iter().filter(|p| p.category_label() != ALL_CATEGORIES) {
            prop_assert!(categories.iter().any(|c| c == p.category_label()));
        }
    }

    #[test]
    fn test_filter_without_constraints_is_identity(products in catalog()) {
        let shown = filter_products(&products, "", ALL_CATEGORIES);
        prop_assert_eq!(positions(&products, &shown), (0..products.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_filter_is_an_ordered_subsequence(
        products in catalog(),
        query in "[a-zA-Z ]{0,4}",
        category in category_choice()
    ) {
        let shown = filter_products(&products, &query, &category);
        let idx = positions(&products, &shown);
        prop_assert!(idx.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_filter_keeps_exactly_the_matching_products(
        products in catalog(),
        query in "[a-zA-Z ]{0,4}",
        category in category_choice()
    ) {
        let shown = filter_products(&products, &query, &category);
        let needle = normalize_query(&query);
        let expected = products
            .iter()
            .filter(|p| matches_category(p, &category) && matches_query(p, &needle))
            .count();
        prop_assert_eq!(shown.len(), expected);
        for p in &shown {
            prop_assert!(matches_category(p, &category));
            prop_assert!(matches_query(p, &needle));
        }
    }

    #[test]
    fn test_filter_is_idempotent(
        products in catalog(),
        query in "[a-zA-Z ]{0,4}",
        category in category_choice()
    ) {
        let once: Vec<Product> = filter_products(&products, &query, &category)
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_products(&once, &query, &category);
        prop_assert_eq!(twice.len(), once.len());
    }

    #[test]
    fn test_price_digits_match_rounded_amount(amount in 0.0f64..1.0e12) {
        let formatted = format_ars(amount);
        let digits: String = formatted
            .trim_start_matches("$\u{a0}")
            .chars()
            .filter(|c| *c != '.')
            .collect();
        prop_assert_eq!(digits.parse::<u64>().unwrap(), amount.round() as u64);
        prop_assert!(formatted.starts_with("$\u{a0}"), "formatted price {:?} lacks \"$\\u{{a0}}\" prefix", formatted);
    }
}
