// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Aislemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Aislemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::{env, error::Error, fmt};

use super::command::Rgba;
use crate::model::builtin::NEON_YELLOW;
use crate::model::Rgb;
use crate::route::RouteOptions;

const ARROWS_ENV: &str = "AISLEMAP_ARROWS";
const DIRECT_ENV: &str = "AISLEMAP_DIRECT";
const DIRECTIONS_ENV: &str = "AISLEMAP_DIRECTIONS";

/// Visual parameters of the store map.
///
/// One renderer serves every look: the minimal map (direct routes, no arrows, no directions
/// panel) and the full navigation map are just different values of this struct.
#[derive(Debug, Clone, PartialEq)]
pub struct MapStyle {
    pub background: Rgb,
    pub grid: Rgba,
    pub grid_spacing: f64,
    pub section_fill: Rgb,
    pub highlight_fill: Rgb,
    pub section_border: Rgb,
    pub section_opacity: f64,
    pub glow_alpha: f64,
    pub glow_spread: f64,
    pub label: Rgb,
    pub label_font_size: u16,
    pub path: Rgb,
    pub path_width: f64,
    pub path_glow_width: f64,
    pub path_glow_alpha: f64,
    pub path_dash: (f64, f64),
    pub arrows: bool,
    pub arrow_size: f64,
    pub destination_radius: f64,
    pub destination_alpha: f64,
    pub user: Rgb,
    pub user_radius: f64,
    pub user_label: String,
    pub via_entrance: bool,
    pub directions_panel: bool,
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            background: Rgb::new(0x11, 0x11, 0x11),
            grid: Rgba::opaque(Rgb::new(255, 255, 255)).with_alpha(0.05),
            grid_spacing: 50.0,
            section_fill: Rgb::new(0x33, 0x33, 0x33),
            highlight_fill: Rgb::new(0x66, 0x66, 0x66),
            section_border: Rgb::new(0xff, 0xff, 0xff),
            section_opacity: 0.7,
            glow_alpha: 0.3,
            glow_spread: 0.7,
            label: Rgb::new(0xff, 0xff, 0xff),
            label_font_size: 14,
            path: NEON_YELLOW,
            path_width: 4.0,
            path_glow_width: 8.0,
            path_glow_alpha: 0.3,
            path_dash: (10.0, 10.0),
            arrows: true,
            arrow_size: 12.0,
            destination_radius: 10.0,
            destination_alpha: 0.7,
            user: Rgb::new(0xff, 0xff, 0xff),
            user_radius: 8.0,
            user_label: "You are here".to_owned(),
            via_entrance: true,
            directions_panel: true,
        }
    }
}

impl MapStyle {
    /// The bare map: direct routes, no arrowheads, no directions panel.
    pub fn minimal() -> Self {
        Self {
            arrows: false,
            via_entrance: false,
            directions_panel: false,
            ..Self::default()
        }
    }

    /// Default style with `AISLEMAP_ARROWS`, `AISLEMAP_DIRECT` and `AISLEMAP_DIRECTIONS`
    /// overrides applied.
    pub fn from_env() -> Result<Self, StyleError> {
        let mut style = Self::default();
        if let Some(arrows) = bool_from_env(ARROWS_ENV)? {
            style.arrows = arrows;
        }
        if let Some(direct) = bool_from_env(DIRECT_ENV)? {
            style.via_entrance = !direct;
        }
        if let Some(directions) = bool_from_env(DIRECTIONS_ENV)? {
            style.directions_panel = directions;
        }
        Ok(style)
    }

    pub fn route_options(&self) -> RouteOptions {
        RouteOptions {
            via_entrance: self.via_entrance,
        }
    }
}

fn bool_from_env(name: &str) -> Result<Option<bool>, StyleError> {
    match env::var(name) {
        Ok(value) => parse_bool(&value).map(Some).ok_or_else(|| StyleError::InvalidEnv {
            name: name.to_owned(),
            value,
        }),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(StyleError::InvalidEnv {
            name: name.to_owned(),
            value: "<non-unicode>".to_owned(),
        }),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    InvalidEnv { name: String, value: String },
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnv { name, value } => {
                write!(f, "invalid env {name}={value} (expected true/false)")
            }
        }
    }
}

impl Error for StyleError {}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{parse_bool, MapStyle};

    #[rstest]
    #[case("1", Some(true))]
    #[case(" Yes ", Some(true))]
    #[case("off", Some(false))]
    #[case("FALSE", Some(false))]
    #[case("maybe", None)]
    fn parses_bool_flags(#[case] value: &str, #[case] expected: Option<bool>) {
        assert_eq!(parse_bool(value), expected);
    }

    #[test]
    fn minimal_style_routes_directly() {
        let style = MapStyle::minimal();
        assert!(!style.route_options().via_entrance);
        assert!(!style.arrows);
        assert!(MapStyle::default().route_options().via_entrance);
    }
}
