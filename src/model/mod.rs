// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Aislemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Aislemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Store layout model.
//!
//! A [`Store`] holds the rectangular floor sections and the product catalog. Both are immutable
//! reference data; products are bound to sections through [`section_id`] of their category.

pub mod builtin;
pub mod geometry;
pub mod ids;
pub mod product;
pub mod section;
pub mod store;

pub use geometry::{Bounds, WalkArea, Waypoint, DEFAULT_USER_LOCATION, STORE_HEIGHT, STORE_WIDTH};
pub use ids::{section_id, Id, IdError, ProductId, SectionId};
pub use product::{Price, Product, ShelfLocation};
pub use section::{ParseSectionKindError, Rgb, Section, SectionKind};
pub use store::{Store, StoreError};
