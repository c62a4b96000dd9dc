// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Aislemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Aislemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::ids::{section_id, ProductId, SectionId};

/// Shelf position printed on the product card and in the final navigation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShelfLocation {
    aisle: u32,
    section: String,
    shelf: String,
}

impl ShelfLocation {
    pub fn new(aisle: u32, section: impl Into<String>, shelf: impl Into<String>) -> Self {
        Self {
            aisle,
            section: section.into(),
            shelf: shelf.into(),
        }
    }

    pub fn aisle(&self) -> u32 {
        self.aisle
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn shelf(&self) -> &str {
        &self.shelf
    }
}

impl fmt::Display for ShelfLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Aisle {}, Rack {}, Shelf {}",
            self.aisle, self.section, self.shelf
        )
    }
}

/// Exact decimal price held in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price {
    cents: u64,
}

impl Price {
    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    pub const fn cents(self) -> u64 {
        self.cents
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.cents / 100, self.cents % 100)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    name: String,
    category: String,
    location: ShelfLocation,
    price: Price,
    in_stock: bool,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: impl Into<String>,
        location: ShelfLocation,
        price: Price,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            location,
            price,
            in_stock: true,
        }
    }

    pub fn with_in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Id of the section this product's category is filed under.
    pub fn section_id(&self) -> SectionId {
        section_id(&self.category)
    }

    pub fn location(&self) -> &ShelfLocation {
        &self.location
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn in_stock(&self) -> bool {
        self.in_stock
    }
}

#[cfg(test)]
mod tests {
    use super::{Price, ShelfLocation};

    #[test]
    fn price_formats_two_decimals() {
        assert_eq!(Price::from_cents(499).to_string(), "$4.99");
        assert_eq!(Price::from_cents(1205).to_string(), "$12.05");
        assert_eq!(Price::from_cents(0).to_string(), "$0.00");
    }

    #[test]
    fn shelf_location_formats_as_rack_label() {
        let location = ShelfLocation::new(4, "A", "Middle");
        assert_eq!(location.to_string(), "Aisle 4, Rack A, Shelf Middle");
    }
}
