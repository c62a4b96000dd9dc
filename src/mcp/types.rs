// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Aislemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Aislemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{Bounds, Waypoint};
use crate::route::NavigationStep;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct McpShelfLocation {
    pub aisle: u32,
    pub section: String,
    pub shelf: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct McpProduct {
    pub product_id: String,
    pub name: String,
    pub category: String,
    /// Section the category is filed under (`section-<slug>`).
    pub section_id: String,
    pub price_cents: u64,
    /// Formatted as `$d.cc`.
    pub price: String,
    pub in_stock: bool,
    pub location: McpShelfLocation,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct McpSection {
    pub section_id: String,
    pub name: String,
    pub kind: String,
    pub bounds: Bounds,
    /// `#rrggbb` for departments with their own color.
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CatalogSectionsResponse {
    pub sections: Vec<McpSection>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CatalogSearchParams {
    /// Product id (`P001`) or part of a product name.
    pub query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CatalogSearchResponse {
    /// `id` or `name`; absent when the query is too short.
    pub mode: Option<String>,
    pub too_short: bool,
    pub products: Vec<McpProduct>,
    /// Close names, only filled when nothing matched.
    pub suggestions: Vec<McpProduct>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CatalogSuggestParams {
    pub query: String,
    /// Defaults to 3.
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CatalogSuggestResponse {
    pub products: Vec<McpProduct>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ProductTargetParams {
    pub product_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ProductGetResponse {
    pub product: McpProduct,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RoutePlanParams {
    pub product_id: String,
    /// Start point in store units; defaults to the shopper's current position.
    pub from: Option<Waypoint>,
    /// Route through the entrance first; defaults to the server's map style.
    pub via_entrance: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RoutePlanResponse {
    pub product: McpProduct,
    pub from: Waypoint,
    pub waypoints: Vec<Waypoint>,
    pub steps: Vec<NavigationStep>,
    pub total_distance_meters: u32,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MapRenderTextParams {
    /// Product to route to; defaults to the current selection.
    pub product_id: Option<String>,
    /// Columns; defaults to 100.
    pub width: Option<u64>,
    /// Rows; defaults to 30.
    pub height: Option<u64>,
    /// Animation frame; defaults to the end of the draw-in.
    pub frame: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MapRenderTextResponse {
    pub text: String,
    pub product_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SelectionReadResponse {
    pub product: Option<McpProduct>,
    /// `human` or `agent`.
    pub source: String,
    /// Most recent first.
    pub recently_viewed: Vec<String>,
    pub ui_rev: u64,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SelectionSetParams {
    /// `null` clears the selection.
    pub product_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SelectionSetResponse {
    pub product: Option<McpProduct>,
    pub steps: Vec<NavigationStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LocationReadResponse {
    pub location: Waypoint,
    pub ui_rev: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FollowAgentReadResponse {
    pub enabled: bool,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FollowAgentSetParams {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FollowAgentSetResponse {
    pub enabled: bool,
}
