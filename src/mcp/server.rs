// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Aislemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Aislemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::{Json, Parameters};
use rmcp::model::{ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ErrorData, ServerHandler, ServiceExt};
use tokio::sync::Mutex;

use crate::map::{render_still, DRAW_IN_FRAMES};
use crate::model::{
    Product, ProductId, Section, Store, Waypoint, STORE_HEIGHT, STORE_WIDTH,
};
use crate::query::{find_product_by_id, search, suggest, SearchMode, SearchOutcome};
use crate::render::{MapStyle, TEXT_COLS_RANGE, TEXT_ROWS_RANGE};
use crate::route::{build_path, build_steps, total_distance_meters, RouteOptions};
use crate::ui::{SelectionSource, UiState};

use super::types::*;

const DEFAULT_SUGGESTIONS: usize = 3;
const MAX_SUGGESTIONS: u64 = 15;
const DEFAULT_TEXT_WIDTH: u64 = 100;
const DEFAULT_TEXT_HEIGHT: u64 = 30;
const TEXT_WIDTH_RANGE: std::ops::RangeInclusive<u64> =
    *TEXT_COLS_RANGE.start() as u64..=*TEXT_COLS_RANGE.end() as u64;
const TEXT_HEIGHT_RANGE: std::ops::RangeInclusive<u64> =
    *TEXT_ROWS_RANGE.start() as u64..=*TEXT_ROWS_RANGE.end() as u64;

#[derive(Clone)]
pub struct AislemapMcp {
    store: &'static Store,
    style: MapStyle,
    ui_state: Arc<Mutex<UiState>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl AislemapMcp {
    pub fn new(style: MapStyle) -> Self {
        Self::new_with_ui_state(style, Arc::new(Mutex::new(UiState::default())))
    }

    /// Server sharing selection and shopper position with a running TUI.
    pub fn new_with_ui_state(style: MapStyle, ui_state: Arc<Mutex<UiState>>) -> Self {
        Self {
            store: Store::builtin(),
            style,
            ui_state,
            tool_router: Self::tool_router(),
        }
    }

    pub async fn serve_stdio(self) -> Result<(), rmcp::RmcpError> {
        let service = self.serve((tokio::io::stdin(), tokio::io::stdout())).await?;
        service.waiting().await?;
        Ok(())
    }

    fn lookup_product(&self, product_id: &str) -> Result<&'static Product, ErrorData> {
        let id = parse_product_id(product_id)?;
        find_product_by_id(self.store, id.as_str()).ok_or_else(|| {
            ErrorData::resource_not_found(
                format!("Product ID {product_id} not found"),
                Some(serde_json::json!({ "product_id": product_id })),
            )
        })
    }

    /// List the store's sections with their bounds in store units (1000 x 600, 10 units per
    /// meter); use to orient before `route.plan`.
    #[tool(name = "catalog.sections")]
    async fn catalog_sections(&self) -> Result<Json<CatalogSectionsResponse>, ErrorData> {
        let sections = self.store.sections().iter().map(mcp_section).collect();
        Ok(Json(CatalogSectionsResponse { sections }))
    }

    /// Search products the way the search box does: `P<digits>` looks up an id, anything else
    /// matches names; at least 3 characters.
    #[tool(name = "catalog.search")]
    async fn catalog_search(
        &self,
        params: Parameters<CatalogSearchParams>,
    ) -> Result<Json<CatalogSearchResponse>, ErrorData> {
        let CatalogSearchParams { query } = params.0;

        let response = match search(self.store, &query) {
            SearchOutcome::TooShort => CatalogSearchResponse {
                mode: None,
                too_short: true,
                products: Vec::new(),
                suggestions: Vec::new(),
            },
            SearchOutcome::Results { mode, products } => {
                let suggestions = if products.is_empty() {
                    suggest(self.store, &query, DEFAULT_SUGGESTIONS)
                } else {
                    Vec::new()
                };
                CatalogSearchResponse {
                    mode: Some(search_mode_label(mode).to_owned()),
                    too_short: false,
                    products: products.into_iter().map(mcp_product).collect(),
                    suggestions: suggestions.into_iter().map(mcp_product).collect(),
                }
            }
        };
        Ok(Json(response))
    }

    /// Closest product names for a misspelled query, best first.
    #[tool(name = "catalog.suggest")]
    async fn catalog_suggest(
        &self,
        params: Parameters<CatalogSuggestParams>,
    ) -> Result<Json<CatalogSuggestResponse>, ErrorData> {
        let CatalogSuggestParams { query, limit } = params.0;
        let limit = match limit {
            None => DEFAULT_SUGGESTIONS,
            Some(limit) if (1..=MAX_SUGGESTIONS).contains(&limit) => limit as usize,
            Some(limit) => {
                return Err(ErrorData::invalid_params(
                    format!("limit must be between 1 and {MAX_SUGGESTIONS}"),
                    Some(serde_json::json!({ "limit": limit })),
                ));
            }
        };
        let products = suggest(self.store, &query, limit)
            .into_iter()
            .map(mcp_product)
            .collect();
        Ok(Json(CatalogSuggestResponse { products }))
    }

    /// Read one product: price, stock and shelf location (aisle, section, shelf).
    #[tool(name = "product.get")]
    async fn product_get(
        &self,
        params: Parameters<ProductTargetParams>,
    ) -> Result<Json<ProductGetResponse>, ErrorData> {
        let product = self.lookup_product(&params.0.product_id)?;
        Ok(Json(ProductGetResponse {
            product: mcp_product(product),
        }))
    }

    /// Plan a walking route to a product without touching the shared selection; starts at the
    /// shopper's position unless `from` is given.
    #[tool(name = "route.plan")]
    async fn route_plan(
        &self,
        params: Parameters<RoutePlanParams>,
    ) -> Result<Json<RoutePlanResponse>, ErrorData> {
        let RoutePlanParams {
            product_id,
            from,
            via_entrance,
        } = params.0;
        let product = self.lookup_product(&product_id)?;
        let from = match from {
            Some(point) => checked_store_point(point)?,
            None => self.ui_state.lock().await.user_location(),
        };
        let options = RouteOptions {
            via_entrance: via_entrance.unwrap_or(self.style.via_entrance),
        };
        let path = build_path(self.store, from, product, options);
        let steps = build_steps(&path, product);

        Ok(Json(RoutePlanResponse {
            product: mcp_product(product),
            from,
            waypoints: path.to_vec(),
            total_distance_meters: total_distance_meters(&steps),
            steps,
        }))
    }

    /// Render the store map as text with the route to a product (default: current selection);
    /// use for a human-readable snapshot.
    #[tool(name = "map.render_text")]
    async fn map_render_text(
        &self,
        params: Parameters<MapRenderTextParams>,
    ) -> Result<Json<MapRenderTextResponse>, ErrorData> {
        let MapRenderTextParams {
            product_id,
            width,
            height,
            frame,
        } = params.0;
        let width = checked_extent("width", width.unwrap_or(DEFAULT_TEXT_WIDTH), TEXT_WIDTH_RANGE)?;
        let height = checked_extent(
            "height",
            height.unwrap_or(DEFAULT_TEXT_HEIGHT),
            TEXT_HEIGHT_RANGE,
        )?;

        let (selected, user_location) = {
            let state = self.ui_state.lock().await;
            (state.selected_product_id().cloned(), state.user_location())
        };
        let product = match product_id {
            Some(product_id) => Some(self.lookup_product(&product_id)?.id().clone()),
            None => selected,
        };

        let text = render_still(
            self.store,
            &self.style,
            user_location,
            product.clone(),
            frame.unwrap_or(DRAW_IN_FRAMES),
            width,
            height,
        )
        .map_err(|err| ErrorData::internal_error(format!("render error: {err}"), None))?;

        Ok(Json(MapRenderTextResponse {
            text,
            product_id: product.map(ProductId::into_string),
        }))
    }

    /// Read the latest selection, who made it (TUI user or agent), and the recently viewed list.
    /// With follow-agent off the TUI keeps showing its own pick and agent selections stay out of
    /// the history.
    #[tool(name = "selection.read")]
    async fn selection_read(&self) -> Result<Json<SelectionReadResponse>, ErrorData> {
        let state = self.ui_state.lock().await.clone();
        let product = state
            .selected_product_id()
            .and_then(|id| find_product_by_id(self.store, id.as_str()))
            .map(mcp_product);

        Ok(Json(SelectionReadResponse {
            product,
            source: state.selection_source().as_str().to_owned(),
            recently_viewed: state
                .recently_viewed()
                .iter()
                .map(|id| id.as_str().to_owned())
                .collect(),
            ui_rev: state.rev(),
        }))
    }

    /// Show a product on the shopper's map (`null` clears); the TUI follows unless the user
    /// turned off follow-agent.
    #[tool(name = "selection.set")]
    async fn selection_set(
        &self,
        params: Parameters<SelectionSetParams>,
    ) -> Result<Json<SelectionSetResponse>, ErrorData> {
        let product = match params.0.product_id.as_deref() {
            Some(product_id) => Some(self.lookup_product(product_id)?),
            None => None,
        };

        let mut state = self.ui_state.lock().await;
        state.set_selection(SelectionSource::Agent, product.map(|product| product.id().clone()));
        let steps = match product {
            Some(product) => {
                let options = RouteOptions {
                    via_entrance: self.style.via_entrance,
                };
                let path = build_path(self.store, state.user_location(), product, options);
                build_steps(&path, product)
            }
            None => Vec::new(),
        };
        drop(state);

        Ok(Json(SelectionSetResponse {
            product: product.map(mcp_product),
            steps,
        }))
    }

    /// Read the shopper's current position in store units.
    #[tool(name = "location.read")]
    async fn location_read(&self) -> Result<Json<LocationReadResponse>, ErrorData> {
        let state = self.ui_state.lock().await;
        Ok(Json(LocationReadResponse {
            location: state.user_location(),
            ui_rev: state.rev(),
        }))
    }

    /// Read follow-agent mode (`true` means the TUI jumps to agent selections).
    #[tool(name = "follow_agent.read")]
    async fn follow_agent_read(&self) -> Result<Json<FollowAgentReadResponse>, ErrorData> {
        let enabled = self.ui_state.lock().await.follow_agent();
        Ok(Json(FollowAgentReadResponse { enabled }))
    }

    /// Set follow-agent mode.
    #[tool(name = "follow_agent.set")]
    async fn follow_agent_set(
        &self,
        params: Parameters<FollowAgentSetParams>,
    ) -> Result<Json<FollowAgentSetResponse>, ErrorData> {
        let FollowAgentSetParams { enabled } = params.0;
        self.ui_state.lock().await.set_follow_agent(enabled);
        Ok(Json(FollowAgentSetResponse { enabled }))
    }
}

#[tool_handler]
impl ServerHandler for AislemapMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Aislemap in-store product locator (tools: catalog.sections, catalog.search, catalog.suggest, product.get, route.plan, map.render_text, selection.read, selection.set, location.read, follow_agent.read, follow_agent.set)"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

// Mapping and validation helpers for the tool handlers.
include!("server/helpers.rs");
