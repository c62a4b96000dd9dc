// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Aislemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Aislemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// MCP server helper functions: catalog mapping and parameter validation.
fn mcp_product(product: &Product) -> McpProduct {
    let location = product.location();
    McpProduct {
        product_id: product.id().as_str().to_owned(),
        name: product.name().to_owned(),
        category: product.category().to_owned(),
        section_id: product.section_id().into_string(),
        price_cents: product.price().cents(),
        price: product.price().to_string(),
        in_stock: product.in_stock(),
        location: McpShelfLocation {
            aisle: location.aisle(),
            section: location.section().to_owned(),
            shelf: location.shelf().to_owned(),
        },
    }
}

fn mcp_section(section: &Section) -> McpSection {
    McpSection {
        section_id: section.id().as_str().to_owned(),
        name: section.name().to_owned(),
        kind: section.kind().as_str().to_owned(),
        bounds: *section.bounds(),
        color: section.color().map(|color| color.to_string()),
    }
}

fn search_mode_label(mode: SearchMode) -> &'static str {
    match mode {
        SearchMode::Id => "id",
        SearchMode::Name => "name",
    }
}

fn parse_product_id(value: &str) -> Result<ProductId, ErrorData> {
    ProductId::new(value.trim()).map_err(|err| {
        ErrorData::invalid_params(
            format!("invalid product_id: {err}"),
            Some(serde_json::json!({ "product_id": value })),
        )
    })
}

fn checked_extent(
    name: &str,
    value: u64,
    range: std::ops::RangeInclusive<u64>,
) -> Result<usize, ErrorData> {
    if !range.contains(&value) {
        return Err(ErrorData::invalid_params(
            format!(
                "{name} must be between {} and {}",
                range.start(),
                range.end()
            ),
            Some(serde_json::json!({ "field": name, "value": value })),
        ));
    }
    usize::try_from(value)
        .map_err(|_| ErrorData::invalid_params(format!("{name} is too large"), None))
}

fn checked_store_point(point: Waypoint) -> Result<Waypoint, ErrorData> {
    let inside = (0.0..=STORE_WIDTH).contains(&point.x) && (0.0..=STORE_HEIGHT).contains(&point.y);
    if !inside {
        return Err(ErrorData::invalid_params(
            format!("from must lie within the store (0..={STORE_WIDTH} x 0..={STORE_HEIGHT})"),
            Some(serde_json::json!({ "x": point.x, "y": point.y })),
        ));
    }
    Ok(point)
}
