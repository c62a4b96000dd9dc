// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Aislemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Aislemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Search box behaviour on top of the catalog lookups.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use super::catalog::{find_product_by_id, find_products_by_name};
use crate::model::{Product, Store};

/// Queries shorter than this produce no live results.
pub const MIN_QUERY_CHARS: usize = 3;

const SUGGESTION_CUTOFF: f64 = 0.5;

static PRODUCT_ID_QUERY: OnceLock<Regex> = OnceLock::new();

fn product_id_query() -> &'static Regex {
    PRODUCT_ID_QUERY.get_or_init(|| Regex::new(r"^[Pp][0-9]+$").expect("static pattern"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Id,
    Name,
}

impl SearchMode {
    pub fn for_query(query: &str) -> Self {
        if product_id_query().is_match(query) {
            Self::Id
        } else {
            Self::Name
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    /// Not enough input to search yet.
    TooShort,
    Results {
        mode: SearchMode,
        products: Vec<&'a Product>,
    },
}

impl<'a> SearchOutcome<'a> {
    pub fn products(&self) -> &[&'a Product] {
        match self {
            Self::TooShort => &[],
            Self::Results { products, .. } => products,
        }
    }
}

/// Live results for a search box value.
///
/// A value shaped like `P<digits>` is looked up as an id, anything else by name.
pub fn search<'a>(store: &'a Store, query: &str) -> SearchOutcome<'a> {
    if query.chars().count() < MIN_QUERY_CHARS {
        return SearchOutcome::TooShort;
    }

    let mode = SearchMode::for_query(query);
    let products = match mode {
        SearchMode::Id => find_product_by_id(store, query).into_iter().collect(),
        SearchMode::Name => find_products_by_name(store, query),
    };
    SearchOutcome::Results { mode, products }
}

/// Resolves a submitted search to a single product.
pub fn submit<'a>(store: &'a Store, query: &str) -> Result<&'a Product, SearchError> {
    if query.trim().is_empty() {
        return Err(SearchError::EmptyQuery);
    }

    match SearchMode::for_query(query) {
        SearchMode::Id => find_product_by_id(store, query).ok_or_else(|| SearchError::UnknownId {
            id: query.to_owned(),
        }),
        SearchMode::Name => search(store, query)
            .products()
            .first()
            .copied()
            .ok_or(SearchError::NoMatch),
    }
}

/// Closest product names for a query, best first.
///
/// Scores use a normalized edit-distance ratio; names scoring under the cutoff are dropped and
/// ties keep catalog order.
pub fn suggest<'a>(store: &'a Store, query: &str, limit: usize) -> Vec<&'a Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut scored = store
        .products()
        .iter()
        .filter_map(|product| {
            let name = product.name().to_lowercase();
            let ratio = best_word_ratio(&needle, &name);
            (ratio >= SUGGESTION_CUTOFF).then_some((ratio, product))
        })
        .collect::<Vec<_>>();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.into_iter().take(limit).map(|(_, product)| product).collect()
}

fn best_word_ratio(needle: &str, name: &str) -> f64 {
    let whole = rapidfuzz::fuzz::ratio(needle.chars(), name.chars());
    name.split_whitespace()
        .map(|word| rapidfuzz::fuzz::ratio(needle.chars(), word.chars()))
        .fold(whole, f64::max)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    EmptyQuery,
    UnknownId { id: String },
    NoMatch,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyQuery => f.write_str("Please enter a product ID or name"),
            Self::UnknownId { id } => write!(f, "Product ID {id} not found"),
            Self::NoMatch => f.write_str("No products match your search"),
        }
    }
}

impl std::error::Error for SearchError {}
