// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Aislemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Aislemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over the store layout and catalog.
//!
//! Lookups never fail loudly: a miss is an `Option::None` or an empty list that callers treat as
//! "nothing to show".

pub mod catalog;
pub mod search;

pub use catalog::{
    categories, find_product_by_id, find_products_by_name, find_section, find_section_by_id,
};
pub use search::{search, submit, suggest, SearchError, SearchMode, SearchOutcome};
