// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Aislemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Aislemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::OnceLock;

use super::builtin;
use super::ids::{ProductId, SectionId};
use super::product::Product;
use super::section::Section;

/// The store floor plus its product catalog.
///
/// A `Store` is immutable once built. [`Store::new`] checks that every catalog category resolves
/// to exactly one section, so route lookups only miss for categories that are not in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Store {
    sections: Vec<Section>,
    products: Vec<Product>,
}

static BUILTIN_STORE: OnceLock<Store> = OnceLock::new();

impl Store {
    pub fn new(sections: Vec<Section>, products: Vec<Product>) -> Result<Self, StoreError> {
        let mut section_ids = BTreeSet::<&SectionId>::new();
        for section in &sections {
            if !section_ids.insert(section.id()) {
                return Err(StoreError::DuplicateSectionId {
                    section_id: section.id().clone(),
                });
            }
        }

        let mut product_ids = BTreeSet::<String>::new();
        for product in &products {
            if !is_product_id(product.id().as_str()) {
                return Err(StoreError::MalformedProductId {
                    product_id: product.id().clone(),
                });
            }
            if !product_ids.insert(product.id().as_str().to_ascii_uppercase()) {
                return Err(StoreError::DuplicateProductId {
                    product_id: product.id().clone(),
                });
            }

            let expected = product.section_id();
            if !section_ids.contains(&expected) {
                return Err(StoreError::UnmappedCategory {
                    product_id: product.id().clone(),
                    category: product.category().to_owned(),
                    section_id: expected,
                });
            }
        }

        Ok(Self { sections, products })
    }

    /// The built-in demo store, shared read-only for the whole process.
    pub fn builtin() -> &'static Store {
        BUILTIN_STORE.get_or_init(|| Self {
            sections: builtin::sections(),
            products: builtin::products(),
        })
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Products in catalog insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

fn is_product_id(value: &str) -> bool {
    let mut chars = value.chars();
    matches!(chars.next(), Some('P' | 'p'))
        && !chars.as_str().is_empty()
        && chars.all(|ch| ch.is_ascii_digit())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    DuplicateSectionId {
        section_id: SectionId,
    },
    DuplicateProductId {
        product_id: ProductId,
    },
    MalformedProductId {
        product_id: ProductId,
    },
    UnmappedCategory {
        product_id: ProductId,
        category: String,
        section_id: SectionId,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateSectionId { section_id } => {
                write!(f, "duplicate section id: {section_id}")
            }
            Self::DuplicateProductId { product_id } => {
                write!(f, "duplicate product id: {product_id}")
            }
            Self::MalformedProductId { product_id } => {
                write!(f, "product id must be 'P' followed by digits: {product_id}")
            }
            Self::UnmappedCategory {
                product_id,
                category,
                section_id,
            } => write!(
                f,
                "product {product_id} has category '{category}' but no section '{section_id}' exists"
            ),
        }
    }
}

impl std::error::Error for StoreError {}
