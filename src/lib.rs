// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Aislemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Aislemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Aislemap: an in-store product locator.
//!
//! Search the catalog, highlight the product's section on an animated store map and follow
//! turn-by-turn directions from the shopper's position, in a terminal UI or over MCP.

pub mod map;
pub mod mcp;
pub mod model;
pub mod query;
pub mod render;
pub mod route;
pub mod sim;
pub mod tui;
pub mod ui;
