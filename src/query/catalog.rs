// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Aislemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Aislemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use memchr::memmem;

use crate::model::{section_id, Product, Section, Store};

/// Section a category is filed under, or `None` when the layout has no such section.
///
/// A miss means "no route available"; callers reduce rendering instead of failing.
pub fn find_section<'a>(store: &'a Store, category: &str) -> Option<&'a Section> {
    let wanted = section_id(category);
    find_section_by_id(store, wanted.as_str())
}

pub fn find_section_by_id<'a>(store: &'a Store, section_id: &str) -> Option<&'a Section> {
    store
        .sections()
        .iter()
        .find(|section| section.id().as_str() == section_id)
}

/// Case-insensitive exact match on the product id.
pub fn find_product_by_id<'a>(store: &'a Store, id: &str) -> Option<&'a Product> {
    store
        .products()
        .iter()
        .find(|product| product.id().as_str().eq_ignore_ascii_case(id))
}

/// Case-insensitive substring match on the product name, in catalog order.
///
/// The query is trimmed first; an empty query matches nothing.
pub fn find_products_by_name<'a>(store: &'a Store, query: &str) -> Vec<&'a Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let finder = memmem::Finder::new(needle.as_bytes());
    store
        .products()
        .iter()
        .filter(|product| {
            let name = product.name().to_lowercase();
            finder.find(name.as_bytes()).is_some()
        })
        .collect()
}

/// Distinct product categories in catalog order.
pub fn categories(store: &Store) -> Vec<&str> {
    let mut out = Vec::<&str>::new();
    for product in store.products() {
        if !out.contains(&product.category()) {
            out.push(product.category());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{categories, find_product_by_id, find_products_by_name, find_section};
    use crate::model::{section_id, Store};

    #[rstest]
    #[case("P001")]
    #[case("p001")]
    fn find_product_by_id_ignores_case(#[case] id: &str) {
        let product = find_product_by_id(Store::builtin(), id).expect("product");
        assert_eq!(product.id().as_str(), "P001");
        assert_eq!(product.name(), "Organic Apples");
    }

    #[test]
    fn find_product_by_id_misses_unknown_ids() {
        assert!(find_product_by_id(Store::builtin(), "P999").is_none());
        assert!(find_product_by_id(Store::builtin(), "").is_none());
    }

    #[test]
    fn find_products_by_name_matches_substrings_in_catalog_order() {
        let store = Store::builtin();
        let names = find_products_by_name(store, "Milk")
            .into_iter()
            .map(|product| product.name())
            .collect::<Vec<_>>();
        assert_eq!(names, ["Organic Milk"]);

        let expected = store
            .products()
            .iter()
            .filter(|product| product.name().to_lowercase().contains("fresh"))
            .map(|product| product.name())
            .collect::<Vec<_>>();
        let names = find_products_by_name(store, "FRESH")
            .into_iter()
            .map(|product| product.name())
            .collect::<Vec<_>>();
        assert_eq!(names, expected);
        assert_eq!(
            names,
            ["Fresh Bananas", "Fresh Salmon Fillet", "Fresh Avocados"]
        );
    }

    #[test]
    fn find_products_by_name_with_blank_query_matches_nothing() {
        assert!(find_products_by_name(Store::builtin(), "").is_empty());
        assert!(find_products_by_name(Store::builtin(), "   ").is_empty());
    }

    #[test]
    fn find_section_resolves_every_catalog_category() {
        let store = Store::builtin();
        for category in categories(store) {
            let section = find_section(store, category).expect("section for category");
            assert_eq!(section.id(), &section_id(category));
        }
    }

    #[test]
    fn find_section_misses_unknown_category() {
        assert!(find_section(Store::builtin(), "Garden Center").is_none());
    }

    #[test]
    fn categories_are_distinct_and_ordered() {
        assert_eq!(
            categories(Store::builtin()),
            [
                "Produce",
                "Bakery",
                "Meat & Seafood",
                "Dairy",
                "Frozen Foods",
                "Pantry",
                "Beverages"
            ]
        );
    }
}
