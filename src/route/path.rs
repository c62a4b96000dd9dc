// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Aislemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Aislemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smallvec::SmallVec;

use crate::model::builtin::ENTRANCE_SECTION_ID;
use crate::model::{Product, Store, Waypoint};
use crate::query::{find_section, find_section_by_id};

/// At most origin, entrance anchor and destination.
pub type Path = SmallVec<[Waypoint; 3]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteOptions {
    /// Route visibly through the entrance before heading to the section.
    pub via_entrance: bool,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self { via_entrance: true }
    }
}

impl RouteOptions {
    pub const DIRECT: Self = Self {
        via_entrance: false,
    };
}

/// Builds an illustrative route from `origin` to the centroid of the product's section.
///
/// This is a fixed-topology stand-in for real wayfinding: the result is
/// `[origin, entrance?, destination]`. An empty path means the category has no section and no
/// route should be drawn. A missing entrance section only drops the anchor.
pub fn build_path(
    store: &Store,
    origin: Waypoint,
    product: &Product,
    options: RouteOptions,
) -> Path {
    let Some(section) = find_section(store, product.category()) else {
        log::warn!(
            "no section for category '{}' (product {})",
            product.category(),
            product.id()
        );
        return Path::new();
    };

    let mut path = Path::new();
    path.push(origin);

    if options.via_entrance {
        match find_section_by_id(store, ENTRANCE_SECTION_ID) {
            Some(entrance) => path.push(entrance.bounds().centroid()),
            None => log::debug!("layout has no entrance; routing directly"),
        }
    }

    path.push(section.bounds().centroid());
    path
}

#[cfg(test)]
mod tests {
    use super::{build_path, RouteOptions};
    use crate::model::{
        Bounds, Price, Product, ProductId, Section, SectionId, SectionKind, ShelfLocation, Store,
        Waypoint,
    };
    use crate::query::find_product_by_id;

    fn produce_product() -> &'static Product {
        find_product_by_id(Store::builtin(), "P001").expect("P001")
    }

    #[test]
    fn direct_path_runs_from_origin_to_section_centroid() {
        let origin = Waypoint::new(100.0, 250.0);
        let path = build_path(Store::builtin(), origin, produce_product(), RouteOptions::DIRECT);
        assert_eq!(path.as_slice(), [origin, Waypoint::new(150.0, 150.0)]);
    }

    #[test]
    fn default_path_passes_through_entrance() {
        let origin = Waypoint::new(100.0, 250.0);
        let path = build_path(
            Store::builtin(),
            origin,
            produce_product(),
            RouteOptions::default(),
        );
        assert_eq!(path.len(), 3);
        assert_eq!(path.first(), Some(&origin));
        assert_eq!(path[1], Waypoint::new(40.0, 510.0));
        assert_eq!(path.last(), Some(&Waypoint::new(150.0, 150.0)));
    }

    #[test]
    fn unknown_category_yields_empty_path() {
        let stray = Product::new(
            ProductId::new("P900").expect("id"),
            "Garden Hose",
            "Garden Center",
            ShelfLocation::new(9, "A", "Top"),
            Price::from_cents(1999),
        );
        let path = build_path(
            Store::builtin(),
            Waypoint::new(100.0, 250.0),
            &stray,
            RouteOptions::default(),
        );
        assert!(path.is_empty());
    }

    #[test]
    fn missing_entrance_falls_back_to_direct_route() {
        let store = Store::new(
            vec![Section::new(
                SectionId::new("section-dairy").expect("id"),
                "Dairy",
                SectionKind::Section,
                Bounds::new(0.0, 0.0, 100.0, 50.0),
            )],
            vec![Product::new(
                ProductId::new("P1").expect("id"),
                "Milk",
                "Dairy",
                ShelfLocation::new(1, "A", "Top"),
                Price::from_cents(100),
            )],
        )
        .expect("store");
        let product = &store.products()[0];
        let path = build_path(&store, Waypoint::new(500.0, 500.0), product, RouteOptions::default());
        assert_eq!(
            path.as_slice(),
            [Waypoint::new(500.0, 500.0), Waypoint::new(50.0, 25.0)]
        );
    }
}
