// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Aislemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Aislemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout and catalog of the demo store.

use super::geometry::Bounds;
use super::ids::{ProductId, SectionId};
use super::product::{Price, Product, ShelfLocation};
use super::section::{Rgb, Section, SectionKind};

pub const NEON_GREEN: Rgb = Rgb::new(0x39, 0xff, 0x14);
pub const NEON_PINK: Rgb = Rgb::new(0xff, 0x36, 0xf7);
pub const NEON_CYAN: Rgb = Rgb::new(0x0a, 0xff, 0xe9);
pub const NEON_YELLOW: Rgb = Rgb::new(0xf6, 0xfa, 0x70);
pub const NEON_BLUE: Rgb = Rgb::new(0x4c, 0xc9, 0xf0);

pub const ENTRANCE_SECTION_ID: &str = "entrance";

const CHECKOUT_COUNT: u32 = 6;

fn sid(value: &str) -> SectionId {
    SectionId::new(value).expect("builtin section id")
}

fn pid(value: &str) -> ProductId {
    ProductId::new(value).expect("builtin product id")
}

pub(crate) fn sections() -> Vec<Section> {
    let mut sections = vec![
        Section::new(
            sid(ENTRANCE_SECTION_ID),
            "Entrance",
            SectionKind::Entrance,
            Bounds::new(10.0, 490.0, 60.0, 40.0),
        )
        .with_color(NEON_GREEN),
        Section::new(
            sid("exit"),
            "Exit",
            SectionKind::Exit,
            Bounds::new(930.0, 490.0, 60.0, 40.0),
        )
        .with_color(NEON_PINK),
    ];

    for n in 1..=CHECKOUT_COUNT {
        let x = 100.0 + 130.0 * f64::from(n - 1);
        sections.push(Section::new(
            sid(&format!("checkout{n}")),
            format!("Checkout {n}"),
            SectionKind::Checkout,
            Bounds::new(x, 490.0, 100.0, 40.0),
        ));
    }

    let departments = [
        ("section-produce", "Produce", Bounds::new(50.0, 50.0, 200.0, 200.0), NEON_CYAN),
        ("section-bakery", "Bakery", Bounds::new(300.0, 50.0, 150.0, 150.0), NEON_YELLOW),
        (
            "section-meat-seafood",
            "Meat & Seafood",
            Bounds::new(500.0, 50.0, 200.0, 150.0),
            NEON_PINK,
        ),
        ("section-dairy", "Dairy", Bounds::new(750.0, 50.0, 180.0, 150.0), NEON_BLUE),
        (
            "section-frozen-foods",
            "Frozen Foods",
            Bounds::new(750.0, 250.0, 180.0, 180.0),
            NEON_BLUE,
        ),
        ("section-pantry", "Pantry", Bounds::new(300.0, 250.0, 400.0, 180.0), NEON_YELLOW),
        (
            "section-beverages",
            "Beverages",
            Bounds::new(50.0, 300.0, 200.0, 130.0),
            NEON_CYAN,
        ),
    ];
    for (id, name, bounds, color) in departments {
        sections.push(Section::new(sid(id), name, SectionKind::Section, bounds).with_color(color));
    }

    sections
}

pub(crate) fn products() -> Vec<Product> {
    let rows: [(&str, &str, &str, u32, &str, &str, u64); 15] = [
        ("P001", "Organic Apples", "Produce", 1, "A", "Top", 499),
        ("P002", "Whole Wheat Bread", "Bakery", 2, "B", "Middle", 349),
        ("P003", "Grass-Fed Ground Beef", "Meat & Seafood", 3, "C", "Bottom", 899),
        ("P004", "Organic Milk", "Dairy", 4, "A", "Middle", 549),
        ("P005", "Frozen Pizza", "Frozen Foods", 5, "B", "Middle", 699),
        ("P006", "Pasta Sauce", "Pantry", 6, "C", "Bottom", 299),
        ("P007", "Craft Beer 6-Pack", "Beverages", 7, "A", "Bottom", 1299),
        ("P008", "Fresh Bananas", "Produce", 1, "B", "Middle", 199),
        ("P009", "Artisan Sourdough", "Bakery", 2, "A", "Top", 599),
        ("P010", "Fresh Salmon Fillet", "Meat & Seafood", 3, "B", "Top", 1499),
        ("P011", "Greek Yogurt", "Dairy", 4, "C", "Top", 399),
        ("P012", "Ice Cream", "Frozen Foods", 5, "A", "Bottom", 549),
        ("P013", "Quinoa", "Pantry", 6, "B", "Middle", 699),
        ("P014", "Sparkling Water", "Beverages", 7, "C", "Middle", 149),
        ("P015", "Fresh Avocados", "Produce", 1, "C", "Bottom", 249),
    ];

    rows.into_iter()
        .map(|(id, name, category, aisle, rack, shelf, cents)| {
            Product::new(
                pid(id),
                name,
                category,
                ShelfLocation::new(aisle, rack, shelf),
                Price::from_cents(cents),
            )
        })
        .collect()
}
